use anyhow::{bail, Result};
use histmap::{
    get_visits, track_visit, AnalyticsBackend, AnalyticsConfig, MemoryBackend, VisitRecord, VisitRequest,
    VisitSummary, UNKNOWN_COUNTRY, UNKNOWN_IP,
};
use serde_json::json;

fn visit(backend: &dyn AnalyticsBackend, ip: &str, country: Option<&str>) -> u16 {
    let mut headers = vec![("x-forwarded-for", ip.to_string())];
    if let Some(country) = country {
        headers.push(("x-country", country.to_string()));
    }
    track_visit(&VisitRequest::new(headers), backend).status_code
}

#[test]
fn visit_counter_groups_by_country() {
    let backend = MemoryBackend::new();
    for (ip, country) in [("1.1.1.1", Some("MX")), ("2.2.2.2", Some("ES")), ("3.3.3.3", Some("MX")), ("4.4.4.4", None)] {
        assert_eq!(visit(&backend, ip, country), 200);
    }

    let resp = get_visits(&backend);
    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.body, json!({
        "total": 4,
        "countries": [
            { "country": "MX", "count": 2 },
            { "country": UNKNOWN_COUNTRY, "count": 1 },
            { "country": "ES", "count": 1 },
        ],
    }));
}

#[test]
fn empty_store_reports_zero() {
    let resp = get_visits(&MemoryBackend::new());
    assert_eq!(resp.body, json!({ "total": 0, "countries": [] }));
}

struct Unreachable;

impl AnalyticsBackend for Unreachable {
    fn record_visit(&self, _: &VisitRecord) -> Result<()> { bail!("dns error: analytics.invalid") }
    fn visit_summary(&self) -> Result<VisitSummary> { bail!("dns error: analytics.invalid") }
}

#[test]
fn backend_failures_become_error_responses() {
    assert_eq!(visit(&Unreachable, "1.1.1.1", Some("MX")), 500);

    let resp = get_visits(&Unreachable);
    assert!(!resp.is_success());
    assert!(resp.body["error"].as_str().unwrap().contains("dns error"));
}

#[test]
fn stored_rows_use_table_column_names() {
    let backend = MemoryBackend::new();
    track_visit(&VisitRequest::default(), &backend);

    let row = serde_json::to_value(&backend.visits()[0]).unwrap();
    assert_eq!(row["ip_address"], UNKNOWN_IP);
    assert_eq!(row["country"], UNKNOWN_COUNTRY);
    assert!(row.get("city").is_none());
    assert!(row["created_at"].is_string());
}

#[test]
fn config_reads_overrides_from_lookup() {
    let config = AnalyticsConfig::from_lookup(|name| match name {
        "SUPABASE_URL" => Some("https://demo.supabase.co/".into()),
        "SUPABASE_KEY" => Some("anon".into()),
        "HISTMAP_VISITS_TABLE" => Some("page_views".into()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.table_url(), "https://demo.supabase.co/rest/v1/page_views");
    assert_eq!(config.rpc_url(), "https://demo.supabase.co/rest/v1/rpc/visits_by_country");

    let err = AnalyticsConfig::from_lookup(|_| None).unwrap_err();
    assert!(err.to_string().contains("SUPABASE_URL"));
}
