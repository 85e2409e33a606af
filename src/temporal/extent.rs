use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::data::{Feature, Marker, Route, TemporalFields};

use super::range::YearRange;

/// The time an item is associated with, reduced to calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalExtent {
    /// No temporal field at all: visible under every range.
    Unbounded,
    /// A single year.
    Year(i32),
    /// An inclusive span of years, `start <= end`.
    Span { start: i32, end: i32 },
    /// Temporal data is present but unusable (malformed year or start date,
    /// or an end date without a start date). Visible only when unconstrained.
    Unknown,
}

impl TemporalExtent {
    /// Span constructor that orders its bounds.
    pub fn span(a: i32, b: i32) -> Self {
        TemporalExtent::Span { start: a.min(b), end: a.max(b) }
    }

    /// Whether an item with this extent is shown under `range`.
    pub fn intersects(&self, range: &YearRange) -> bool {
        let Some((lo, hi)) = range.bounds() else { return true };
        let within = |y: i32| lo <= y && y <= hi;

        match *self {
            TemporalExtent::Unbounded => true,
            TemporalExtent::Year(y) => within(y),
            TemporalExtent::Span { start, end } => {
                within(start) || within(end) || (start <= lo && end >= hi)
            }
            TemporalExtent::Unknown => false,
        }
    }

    /// The `(first, last)` years this extent mentions, if any.
    pub fn years(&self) -> Option<(i32, i32)> {
        match *self {
            TemporalExtent::Year(y) => Some((y, y)),
            TemporalExtent::Span { start, end } => Some((start, end)),
            TemporalExtent::Unbounded | TemporalExtent::Unknown => None,
        }
    }
}

/// Calendar year of an ISO date (`1521-08-13`), an RFC 3339 timestamp or a
/// naive `YYYY-MM-DDTHH:MM:SS` timestamp.
pub fn parse_date_year(text: &str) -> Option<i32> {
    let s = text.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.year())
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|d| d.year()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|d| d.year()))
        .ok()
}

impl TemporalFields {
    /// Reduce the raw fields to a single extent. A usable `year` wins;
    /// otherwise the start/end dates are used.
    pub fn extent(&self) -> TemporalExtent {
        if let Some(year) = self.year.as_ref().and_then(|y| y.parse()) {
            return TemporalExtent::Year(year);
        }

        match self.start_date.as_deref() {
            Some(start) => match parse_date_year(start) {
                Some(start) => {
                    let end = self.end_date.as_deref()
                        .and_then(parse_date_year)
                        .unwrap_or(start);
                    TemporalExtent::span(start, end)
                }
                None => TemporalExtent::Unknown,
            },
            None if self.is_empty() => TemporalExtent::Unbounded,
            None => TemporalExtent::Unknown,
        }
    }
}

/// Anything carrying a temporal extent: features, markers, routes.
pub trait Temporal {
    fn temporal_extent(&self) -> TemporalExtent;
}

impl<T: Temporal + ?Sized> Temporal for &T {
    fn temporal_extent(&self) -> TemporalExtent { (**self).temporal_extent() }
}

impl<T: Temporal + ?Sized> Temporal for std::sync::Arc<T> {
    fn temporal_extent(&self) -> TemporalExtent { (**self).temporal_extent() }
}

impl Temporal for TemporalExtent {
    fn temporal_extent(&self) -> TemporalExtent { *self }
}

impl Temporal for TemporalFields {
    fn temporal_extent(&self) -> TemporalExtent { self.extent() }
}

impl Temporal for Feature {
    fn temporal_extent(&self) -> TemporalExtent { self.when.extent() }
}

impl Temporal for Marker {
    fn temporal_extent(&self) -> TemporalExtent { self.when.extent() }
}

impl Temporal for Route {
    fn temporal_extent(&self) -> TemporalExtent { self.when.extent() }
}
