mod century;
mod controller;
mod extent;
mod filter;
mod range;

pub use century::{century, century_label, to_roman};
pub use controller::{compute_bounds, RangeController};
pub use extent::{parse_date_year, Temporal, TemporalExtent};
pub use filter::{filter_by_date, is_in_range};
pub use range::YearRange;
