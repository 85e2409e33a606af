mod dataset;
mod feature;
mod io;
mod layer;
mod source;

pub use dataset::{Dataset, DatasetCounts};
pub use feature::{Feature, ItemId, LatLng, Marker, RawYear, Route, TemporalFields};
pub use io::write_json_file;
pub use layer::{LayerCatalog, LayerDefinition, DEFAULT_LAYER_NAME};
pub use source::{DatasetSource, DiskSource, MemSource, DATASET_FILE, LAYERS_FILE};
