use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The active year window. A missing bound leaves the range unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl YearRange {
    /// The "show everything" range.
    pub const UNBOUNDED: YearRange = YearRange { start: None, end: None };

    pub fn new(start: Option<i32>, end: Option<i32>) -> Self { Self { start, end } }

    /// Fully constrained range; the bounds may come in either order.
    pub fn between(a: i32, b: i32) -> Self {
        Self { start: Some(a.min(b)), end: Some(a.max(b)) }
    }

    /// Range spanning the calendar years of two dates.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::between(start.year(), end.year())
    }

    /// `(low, high)` with `low <= high`, or `None` when either bound is missing.
    pub fn bounds(&self) -> Option<(i32, i32)> {
        match (self.start, self.end) {
            (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
            _ => None,
        }
    }

    #[inline] pub fn is_unbounded(&self) -> bool { self.bounds().is_none() }

    /// Whether a bare year falls inside the range.
    pub fn contains_year(&self, year: i32) -> bool {
        self.bounds().is_none_or(|(lo, hi)| lo <= year && year <= hi)
    }

    /// Calendar bounds as the slider reports them: January 1 of the first
    /// year through December 31 of the last.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let (lo, hi) = self.bounds()?;
        Some((NaiveDate::from_ymd_opt(lo, 1, 1)?, NaiveDate::from_ymd_opt(hi, 12, 31)?))
    }
}

impl From<Option<(i32, i32)>> for YearRange {
    fn from(bounds: Option<(i32, i32)>) -> Self {
        bounds.map_or(YearRange::UNBOUNDED, |(a, b)| YearRange::between(a, b))
    }
}
