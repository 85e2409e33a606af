use geo::{BoundingRect, MultiPoint, Point, Rect};

use crate::data::LatLng;
use crate::temporal::YearRange;

use super::{compose::compose, selection::Selection};

/// Where the map opens when nothing is selected.
pub const DEFAULT_CENTER: LatLng = LatLng(19.6925, -98.8438);
pub const DEFAULT_ZOOM: u8 = 14;

/// Province-wide view used when re-centering with an empty selection.
pub const OVERVIEW_CENTER: LatLng = LatLng(19.954210, -99.534492);
pub const OVERVIEW_ZOOM: u8 = 10;

/// Padding (pixels) and zoom cap applied when fitting bounds.
pub const FIT_PADDING_PX: u32 = 50;
pub const FIT_MAX_ZOOM: u8 = 16;

/// What the "center map" control should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraTarget {
    /// Jump to a fixed view.
    Reset { center: LatLng, zoom: u8 },
    /// Fit the given bounds (x = lon, y = lat).
    Fit { bounds: Rect<f64>, padding: u32, max_zoom: u8 },
}

/// Center of the map on first render: the first vertex of the first
/// selected feature, or the default center.
pub fn initial_center(selection: &Selection) -> LatLng {
    selection.iter()
        .next()
        .and_then(|f| f.positions.first().copied())
        .unwrap_or(DEFAULT_CENTER)
}

fn bounding_rect(coords: impl Iterator<Item = LatLng>) -> Option<Rect<f64>> {
    let points: MultiPoint<f64> = coords.map(|c| Point::from(c.to_coord())).collect();
    points.bounding_rect()
}

/// Bounds of everything visible for the selection and range. When nothing
/// is visible, the outlines of the selected features are used instead.
/// `None` when the selection is empty or has no geometry at all.
pub fn fit_bounds(selection: &Selection, range: &YearRange) -> Option<Rect<f64>> {
    if selection.is_empty() {
        return None;
    }

    bounding_rect(compose(selection, range).coords()).or_else(|| {
        bounding_rect(selection.iter().flat_map(|f| f.positions.iter().copied()))
    })
}

/// Resolve the "center map" action.
pub fn camera_target(selection: &Selection, range: &YearRange) -> CameraTarget {
    match fit_bounds(selection, range) {
        Some(bounds) => CameraTarget::Fit { bounds, padding: FIT_PADDING_PX, max_zoom: FIT_MAX_ZOOM },
        None => CameraTarget::Reset { center: OVERVIEW_CENTER, zoom: OVERVIEW_ZOOM },
    }
}
