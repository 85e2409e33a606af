use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable key for a Feature, Marker or Route.
/// The dataset stores ids as numbers or strings; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Arc<str>);

impl ItemId {
    pub fn new(id: impl AsRef<str>) -> Self { Self(Arc::from(id.as_ref())) }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self { Self::new(id.to_string()) }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw { Int(i64), Float(f64), Text(String) }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(i) => ItemId::from(i),
            Raw::Float(f) => ItemId::new(f.to_string()),
            Raw::Text(s) => ItemId::new(s),
        })
    }
}

/// A `[lat, lon]` pair, in the order the map library expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng(pub f64, pub f64);

impl LatLng {
    #[inline] pub fn lat(&self) -> f64 { self.0 }
    #[inline] pub fn lon(&self) -> f64 { self.1 }

    /// Planar coordinate with x = lon, y = lat.
    #[inline] pub fn to_coord(&self) -> geo::Coord<f64> { geo::Coord { x: self.1, y: self.0 } }
}

/// A `year` value as it appears in the dataset: sometimes a number,
/// sometimes a string such as `"1583"`, occasionally junk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawYear {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawYear {
    /// Integer year, reading a leading signed integer out of text the way
    /// the viewer always has (`"1583 d.C."` -> 1583). `None` when unusable.
    pub fn parse(&self) -> Option<i32> {
        match self {
            RawYear::Int(i) => i32::try_from(*i).ok(),
            RawYear::Float(f) if f.is_finite() => i32::try_from(f.trunc() as i64).ok(),
            RawYear::Float(_) => None,
            RawYear::Text(s) => leading_int(s),
            RawYear::Other(_) => None,
        }
    }

    /// An empty or whitespace-only string, which the viewer treats as no year.
    pub fn is_blank(&self) -> bool {
        matches!(self, RawYear::Text(s) if s.trim().is_empty())
    }
}

fn leading_int(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|n| sign * n)
}

/// Accept any JSON value for a date field; non-strings are kept as their
/// JSON text so that they later fail to parse instead of failing the load.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// The optional temporal metadata shared by every dataset item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<RawYear>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl TemporalFields {
    pub fn year(year: i32) -> Self {
        Self { year: Some(RawYear::Int(year.into())), ..Default::default() }
    }

    pub fn dates(start: impl Into<String>, end: Option<&str>) -> Self {
        Self { year: None, start_date: Some(start.into()), end_date: end.map(str::to_string) }
    }

    /// True when no temporal field is present at all. A blank `year` counts as absent.
    pub fn is_empty(&self) -> bool {
        self.year.as_ref().is_none_or(RawYear::is_blank)
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// A point of interest inside a Feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: ItemId,
    pub position: LatLng,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub when: TemporalFields,
}

/// A polyline (road, river, expedition) inside a Feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub positions: Vec<LatLng>,
    #[serde(flatten)]
    pub when: TemporalFields,
}

/// A named polygon with its nested markers, routes and sub-polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub positions: Vec<LatLng>,
    #[serde(flatten)]
    pub when: TemporalFields,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default, alias = "sub_polygons")]
    pub sub_polygons: Vec<Feature>,
}

impl Feature {
    /// Bare feature with no geometry or children, mostly for tests and builders.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            image: None,
            color: String::new(),
            positions: Vec::new(),
            when: TemporalFields::default(),
            markers: Vec::new(),
            routes: Vec::new(),
            sub_polygons: Vec::new(),
        }
    }

    pub fn with_when(mut self, when: TemporalFields) -> Self { self.when = when; self }
}
