use super::{extent::Temporal, range::YearRange};

/// Whether `item` is in view under `range`.
#[inline]
pub fn is_in_range<T: Temporal + ?Sized>(item: &T, range: &YearRange) -> bool {
    item.temporal_extent().intersects(range)
}

/// Keep the in-view items, preserving their relative order.
///
/// Accepts anything iterable over temporal items, so both `&[Marker]`
/// (yielding `Vec<&Marker>`) and an already filtered `Vec<&Marker>` work;
/// filtering twice with the same range yields the same sequence.
pub fn filter_by_date<I>(items: I, range: &YearRange) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Temporal,
{
    if range.is_unbounded() {
        return items.into_iter().collect();
    }
    items.into_iter().filter(|item| is_in_range(item, range)).collect()
}
