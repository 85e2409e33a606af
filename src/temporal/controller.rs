use crate::data::{Dataset, Feature};

use super::{extent::Temporal, range::YearRange};

/// Global `(min, max)` year over every feature, marker and route at any
/// nesting level. Items without a usable temporal extent are skipped.
pub fn compute_bounds<'a, I>(features: I) -> Option<(i32, i32)>
where
    I: IntoIterator<Item = &'a Feature>,
{
    fn merge(acc: &mut Option<(i32, i32)>, years: Option<(i32, i32)>) {
        if let Some((a, b)) = years {
            *acc = Some(match *acc {
                Some((lo, hi)) => (lo.min(a), hi.max(b)),
                None => (a, b),
            });
        }
    }

    fn walk(feature: &Feature, acc: &mut Option<(i32, i32)>) {
        merge(acc, feature.temporal_extent().years());
        feature.markers.iter().for_each(|m| merge(acc, m.temporal_extent().years()));
        feature.routes.iter().for_each(|r| merge(acc, r.temporal_extent().years()));
        feature.sub_polygons.iter().for_each(|sub| walk(sub, acc));
    }

    let mut acc = None;
    for feature in features {
        walk(feature, &mut acc);
    }
    acc
}

/// Normalizes slider input into a canonical, clamped [`YearRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeController {
    min_year: i32,
    max_year: i32,
}

impl RangeController {
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year: min_year.min(max_year), max_year: min_year.max(max_year) }
    }

    /// Controller over the dataset's extent; `None` when nothing is dated.
    pub fn from_features<'a, I>(features: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Feature>,
    {
        compute_bounds(features).map(|(lo, hi)| Self::new(lo, hi))
    }

    /// Controller over every item in the dataset.
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        Self::from_features(dataset.features().iter().map(|f| f.as_ref()))
    }

    #[inline] pub fn min_year(&self) -> i32 { self.min_year }

    #[inline] pub fn max_year(&self) -> i32 { self.max_year }

    /// The range the viewer starts with.
    pub fn full_range(&self) -> YearRange { YearRange::between(self.min_year, self.max_year) }

    /// Clamp a pair of slider endpoints to the dataset extent, swapping an
    /// inverted pair so that `start <= end`.
    pub fn on_range_change(&self, raw: (i32, i32)) -> YearRange {
        self.normalize(Some(raw.0), Some(raw.1))
    }

    /// Like [`Self::on_range_change`], but a missing endpoint snaps to the
    /// corresponding dataset bound.
    pub fn normalize(&self, start: Option<i32>, end: Option<i32>) -> YearRange {
        let clamp = |y: i32| y.clamp(self.min_year, self.max_year);
        let a = clamp(start.unwrap_or(self.min_year));
        let b = clamp(end.unwrap_or(self.max_year));
        YearRange::between(a, b)
    }
}
