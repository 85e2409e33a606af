use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Country recorded when the request carries none.
pub const UNKNOWN_COUNTRY: &str = "Desconocido";

/// One page view, as stored in the visits table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    #[serde(rename = "ip_address")]
    pub ip: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "created_at")]
    pub timestamp: DateTime<Utc>,
}

impl VisitRecord {
    pub fn new(ip: impl Into<String>, country: impl Into<String>, city: Option<String>) -> Self {
        Self { ip: ip.into(), country: country.into(), city, timestamp: Utc::now() }
    }
}

/// Visits from one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

/// Aggregate shown by the visit counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitSummary {
    pub total: u64,
    pub countries: Vec<CountryCount>,
}

impl VisitSummary {
    /// Build from per-country counts (duplicates are merged); countries are
    /// ordered by count, most visits first, then by name.
    pub fn from_counts(counts: impl IntoIterator<Item = CountryCount>) -> Self {
        let mut merged: AHashMap<String, u64> = AHashMap::new();
        for c in counts {
            *merged.entry(c.country).or_default() += c.count;
        }

        let mut countries: Vec<CountryCount> = merged.into_iter()
            .map(|(country, count)| CountryCount { country, count })
            .collect();
        countries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));

        let total = countries.iter().map(|c| c.count).sum();
        Self { total, countries }
    }

    /// Group raw visit records by country.
    pub fn aggregate<'a>(records: impl IntoIterator<Item = &'a VisitRecord>) -> Self {
        Self::from_counts(records.into_iter().map(|r| CountryCount { country: r.country.clone(), count: 1 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(country: &str, count: u64) -> CountryCount { CountryCount { country: country.into(), count } }

    #[test]
    fn aggregates_by_country_sorted() {
        let records = [
            VisitRecord::new("1.1.1.1", "México", None),
            VisitRecord::new("2.2.2.2", "España", None),
            VisitRecord::new("3.3.3.3", "México", Some("Toluca".into())),
            VisitRecord::new("4.4.4.4", "Argentina", None),
        ];
        let summary = VisitSummary::aggregate(&records);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.countries, vec![count("México", 2), count("Argentina", 1), count("España", 1)]);
    }

    #[test]
    fn merges_duplicate_rows() {
        let summary = VisitSummary::from_counts([count("Chile", 2), count("Chile", 3)]);
        assert_eq!(summary, VisitSummary { total: 5, countries: vec![count("Chile", 5)] });
        assert_eq!(VisitSummary::from_counts(Vec::new()), VisitSummary::default());
    }

    #[test]
    fn record_uses_table_column_names() {
        let json = serde_json::to_value(VisitRecord::new("1.1.1.1", "Perú", None)).unwrap();
        assert_eq!(json["ip_address"], "1.1.1.1");
        assert_eq!(json["country"], "Perú");
        assert!(json.get("city").is_none());
        assert!(json["created_at"].is_string());
    }
}
