use std::sync::Arc;

use histmap_core::{
    camera_target, compose, detail_panel, initial_center, polygon_list, CameraTarget, Dataset,
    DatasetSource, ItemId, LayerCatalog, RangeController, Selection, YearRange, LAYERS_FILE,
};
use serde_json::json;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use crate::common::*;

/// Viewer session state: the static dataset plus the user's selection and range.
#[wasm_bindgen]
pub struct WasmViewer {
    dataset: Arc<Dataset>,
    layers: LayerCatalog,
    controller: Option<RangeController>,
    selection: Selection,
    range: YearRange,
}

impl WasmViewer {
    fn from_parts(dataset: Dataset, layers: LayerCatalog) -> Self {
        let controller = RangeController::from_dataset(&dataset);
        let range = controller.map_or(YearRange::UNBOUNDED, |c| c.full_range());
        Self { dataset: Arc::new(dataset), layers, controller, selection: Selection::new(), range }
    }

    fn feature(&self, id: &str) -> Result<&Arc<histmap_core::Feature>, JsValue> {
        self.dataset.get(&ItemId::new(id))
            .ok_or_else(|| js_err(format!("Unknown feature id {id:?}")))
    }
}

#[wasm_bindgen]
impl WasmViewer {
    /// Construct from the JSON text of the dataset and, optionally, the layer catalog.
    #[wasm_bindgen(constructor)]
    pub fn new(dataset_json: &str, layers_json: Option<String>) -> Result<WasmViewer, JsValue> {
        let dataset = Dataset::from_json_bytes(dataset_json.as_bytes()).map_err(js_err)?;
        dataset.validate().map_err(js_err)?;
        let layers = match layers_json {
            Some(text) => LayerCatalog::from_json_bytes(text.as_bytes()).map_err(js_err)?,
            None => LayerCatalog::default(),
        };
        Ok(Self::from_parts(dataset, layers))
    }

    /// Construct from in-memory files:
    /// files: { "mapData.json": Uint8Array | string, "layersData.json": ... }
    #[wasm_bindgen(js_name = "fromFiles")]
    pub fn from_files(files: JsValue) -> Result<WasmViewer, JsValue> {
        let src = js_files_to_source(files).map_err(js_err)?;
        let dataset = Dataset::read_from_source(&src).map_err(js_err)?;
        let layers = if src.has(LAYERS_FILE) {
            LayerCatalog::read_from_source(&src).map_err(js_err)?
        } else {
            LayerCatalog::default()
        };
        Ok(Self::from_parts(dataset, layers))
    }

    /// Toggle a feature in the selection. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> Result<bool, JsValue> {
        let feature = self.feature(id)?.clone();
        self.selection = self.selection.toggle(&feature);
        Ok(self.selection.contains(&feature.id))
    }

    /// Add a feature to the selection (map click); never removes.
    pub fn select(&mut self, id: &str) -> Result<(), JsValue> {
        let feature = self.feature(id)?.clone();
        self.selection = self.selection.select(&feature);
        Ok(())
    }

    #[wasm_bindgen(js_name = "clearSelection")]
    pub fn clear_selection(&mut self) { self.selection = self.selection.clear(); }

    /// Selected feature ids in selection order.
    #[wasm_bindgen(js_name = "selectedIds")]
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.ids().map(|id| id.to_string()).collect()
    }

    /// `[minYear, maxYear]` of the dataset, or null when nothing is dated.
    pub fn bounds(&self) -> Result<JsValue, JsValue> {
        to_js(&self.controller.map(|c| [c.min_year(), c.max_year()]))
    }

    /// Apply slider endpoints; returns the normalized `{start, end}` range.
    #[wasm_bindgen(js_name = "setRange")]
    pub fn set_range(&mut self, start: Option<i32>, end: Option<i32>) -> Result<JsValue, JsValue> {
        self.range = match self.controller {
            Some(ctl) => ctl.normalize(start, end),
            None => YearRange::new(start, end),
        };
        to_js(&self.range)
    }

    /// Drop the range constraint and show everything.
    #[wasm_bindgen(js_name = "clearRange")]
    pub fn clear_range(&mut self) { self.range = YearRange::UNBOUNDED; }

    pub fn range(&self) -> Result<JsValue, JsValue> { to_js(&self.range) }

    /// Geometry to draw: visible selected features with their visible children.
    #[wasm_bindgen(js_name = "mapView")]
    pub fn map_view(&self) -> Result<JsValue, JsValue> {
        to_js(&compose(&self.selection, &self.range))
    }

    /// Sidebar rows for every feature visible under the range.
    #[wasm_bindgen(js_name = "polygonList")]
    pub fn polygon_list(&self) -> Result<JsValue, JsValue> {
        to_js(&polygon_list(&self.dataset, &self.selection, &self.range))
    }

    /// Detail cards for the visible selected features.
    #[wasm_bindgen(js_name = "detailPanel")]
    pub fn detail_panel(&self) -> Result<JsValue, JsValue> {
        to_js(&detail_panel(&self.selection, &self.range))
    }

    /// Map center for the first render, as `[lat, lon]`.
    #[wasm_bindgen(js_name = "initialCenter")]
    pub fn initial_center(&self) -> Result<JsValue, JsValue> {
        to_js(&initial_center(&self.selection))
    }

    /// Result of the "center map" control:
    /// `{center, zoom}` or `{bounds: [[south, west], [north, east]], padding, maxZoom}`.
    pub fn camera(&self) -> Result<JsValue, JsValue> {
        let value = match camera_target(&self.selection, &self.range) {
            CameraTarget::Reset { center, zoom } => json!({ "center": center, "zoom": zoom }),
            CameraTarget::Fit { bounds, padding, max_zoom } => json!({
                "bounds": [[bounds.min().y, bounds.min().x], [bounds.max().y, bounds.max().x]],
                "padding": padding,
                "maxZoom": max_zoom,
            }),
        };
        to_js(&value)
    }

    /// Base layers, each with its attribution also in plain text.
    pub fn layers(&self) -> Result<JsValue, JsValue> {
        let layers: Vec<_> = self.layers.layers().iter()
            .map(|l| json!({
                "name": l.name,
                "url": l.url,
                "attribution": l.attribution,
                "plainAttribution": l.plain_attribution(),
                "previewUrl": l.preview_url,
            }))
            .collect();
        to_js(&layers)
    }

    #[wasm_bindgen(js_name = "defaultLayer")]
    pub fn default_layer(&self) -> Option<String> {
        self.layers.default_layer().map(|l| l.name.clone())
    }
}
