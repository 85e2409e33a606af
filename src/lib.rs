#![doc = "Historical map viewer core: dataset model, temporal filtering, selection and map composition"]
mod analytics;
#[cfg(feature = "wasm-console")]
mod console;
mod data;
mod temporal;
mod view;

#[doc(inline)]
pub use data::{
    write_json_file, Dataset, DatasetCounts, DatasetSource, DiskSource, Feature, ItemId, LatLng,
    LayerCatalog, LayerDefinition, Marker, MemSource, RawYear, Route, TemporalFields,
    DATASET_FILE, DEFAULT_LAYER_NAME, LAYERS_FILE,
};

#[doc(inline)]
pub use temporal::{
    century, century_label, compute_bounds, filter_by_date, is_in_range, parse_date_year, to_roman,
    RangeController, Temporal, TemporalExtent, YearRange,
};

#[doc(inline)]
pub use view::{
    camera_target, compose, detail_panel, fit_bounds, initial_center, polygon_list, CameraTarget,
    ComposedFeature, DetailEntry, ListEntry, MapComposition, Selection, DEFAULT_CENTER, DEFAULT_ZOOM,
    FIT_MAX_ZOOM, FIT_PADDING_PX, OVERVIEW_CENTER, OVERVIEW_ZOOM,
};

#[doc(inline)]
pub use analytics::{
    get_visits, track_visit, AnalyticsBackend, AnalyticsConfig, CountryCount, HandlerResponse,
    MemoryBackend, VisitRecord, VisitRequest, VisitSummary, UNKNOWN_COUNTRY, UNKNOWN_IP,
};

#[cfg(feature = "analytics")]
#[doc(inline)]
pub use analytics::SupabaseBackend;

#[cfg(feature = "wasm-console")]
#[doc(inline)]
pub use console::init_console_logger;
