use std::sync::Arc;

use histmap::{
    filter_by_date, is_in_range, Feature, ItemId, RangeController, Selection, Temporal, TemporalExtent,
    TemporalFields, YearRange,
};
use proptest::prelude::*;

/// An extent remembering where it sat in the input.
#[derive(Debug, Clone, Copy)]
struct Tagged(usize, TemporalExtent);

impl Temporal for Tagged {
    fn temporal_extent(&self) -> TemporalExtent { self.1 }
}

fn extent_strategy() -> impl Strategy<Value = TemporalExtent> {
    prop_oneof![
        Just(TemporalExtent::Unbounded),
        Just(TemporalExtent::Unknown),
        (-3000i32..3000).prop_map(TemporalExtent::Year),
        (-3000i32..3000, -3000i32..3000).prop_map(|(a, b)| TemporalExtent::span(a, b)),
    ]
}

fn range_strategy() -> impl Strategy<Value = YearRange> {
    (proptest::option::of(-3000i32..3000), proptest::option::of(-3000i32..3000))
        .prop_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => YearRange::between(a, b),
            (a, b) => YearRange::new(a, b),
        })
}

proptest! {
    #[test]
    fn unconstrained_range_shows_everything(extent in extent_strategy()) {
        prop_assert!(is_in_range(&extent, &YearRange::UNBOUNDED));
    }

    #[test]
    fn year_is_compared_inclusively(y in -3000i32..3000, a in -3000i32..3000, b in -3000i32..3000) {
        let f = Feature::new("f", "F").with_when(TemporalFields::year(y));
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert_eq!(is_in_range(&f, &YearRange::between(a, b)), lo <= y && y <= hi);
    }

    #[test]
    fn filtering_is_idempotent(xs in prop::collection::vec(extent_strategy(), 0..40), range in range_strategy()) {
        let once = filter_by_date(xs.iter().copied(), &range);
        let twice = filter_by_date(once.iter().copied(), &range);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtering_keeps_original_order(xs in prop::collection::vec(extent_strategy(), 0..40), range in range_strategy()) {
        let tagged: Vec<Tagged> = xs.into_iter().enumerate().map(|(i, e)| Tagged(i, e)).collect();
        let positions: Vec<usize> = filter_by_date(&tagged, &range).iter().map(|t| t.0).collect();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(positions.iter().all(|&i| is_in_range(&tagged[i], &range)));
        prop_assert_eq!(positions.len(), tagged.iter().filter(|t| is_in_range(*t, &range)).count());
    }

    #[test]
    fn toggle_twice_restores_selection(n in 0usize..8, pick in 0usize..16) {
        let features: Vec<Arc<Feature>> = (0..16)
            .map(|i| Arc::new(Feature::new(ItemId::from(i as i64), format!("F{i}"))))
            .collect();
        let s: Selection = features[..n].iter().cloned().collect();
        let f = &features[pick];

        let mut before: Vec<&str> = s.ids().map(ItemId::as_str).collect();
        let again = s.toggle(f).toggle(f);
        let mut after: Vec<&str> = again.ids().map(ItemId::as_str).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn range_change_is_clamped_and_ordered(
        lo in -3000i32..3000, width in 0i32..2000,
        a in -6000i32..6000, b in -6000i32..6000,
    ) {
        let ctl = RangeController::new(lo, lo + width);
        let r = ctl.on_range_change((a, b));
        let (start, end) = r.bounds().unwrap();
        prop_assert!(start <= end);
        prop_assert!(ctl.min_year() <= start && end <= ctl.max_year());
        prop_assert_eq!(ctl.on_range_change((lo - 100, lo + width + 100)), ctl.full_range());
    }
}
