mod camera;
mod compose;
mod panels;
mod selection;

pub use camera::{
    camera_target, fit_bounds, initial_center, CameraTarget,
    DEFAULT_CENTER, DEFAULT_ZOOM, FIT_MAX_ZOOM, FIT_PADDING_PX, OVERVIEW_CENTER, OVERVIEW_ZOOM,
};
pub use compose::{compose, ComposedFeature, MapComposition};
pub use panels::{detail_panel, polygon_list, DetailEntry, ListEntry};
pub use selection::Selection;
