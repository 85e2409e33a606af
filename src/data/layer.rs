use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::source::{DatasetSource, LAYERS_FILE};

/// Base layer that the viewer opens with when it is present in the catalog.
pub const DEFAULT_LAYER_NAME: &str = "OpenStreetMap";

/// Position of the default layer in the bundled catalog, used when no layer
/// carries the default name.
const DEFAULT_LAYER_INDEX: usize = 3;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// A base-map tile source the user can switch to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDefinition {
    pub name: String,
    /// Tile URL template, e.g. `https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png`.
    pub url: String,
    /// Attribution as HTML.
    #[serde(default)]
    pub attribution: String,
    #[serde(default)]
    pub preview_url: String,
}

impl LayerDefinition {
    /// Attribution with HTML tags removed, for compact list rendering.
    pub fn plain_attribution(&self) -> String {
        HTML_TAG.replace_all(&self.attribution, "").into_owned()
    }
}

/// The static, ordered list of base layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerCatalog {
    #[serde(rename = "Layers", default)]
    layers: Vec<LayerDefinition>,
}

impl LayerCatalog {
    pub fn new(layers: Vec<LayerDefinition>) -> Self { Self { layers } }

    /// Parse a `{"Layers": [...]}` document.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("Failed to parse layer catalog")
    }

    /// Read the layer catalog from a dataset source.
    pub fn read_from_source(src: &dyn DatasetSource) -> Result<Self> {
        let bytes = src.get(LAYERS_FILE)?;
        let catalog = Self::from_json_bytes(&bytes)
            .with_context(|| format!("Failed to load {LAYERS_FILE}"))?;
        log::info!("[layers] loaded {} base layers", catalog.len());
        Ok(catalog)
    }

    #[inline] pub fn layers(&self) -> &[LayerDefinition] { &self.layers }

    #[inline] pub fn len(&self) -> usize { self.layers.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.layers.is_empty() }

    pub fn get(&self, name: &str) -> Option<&LayerDefinition> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// The layer selected on start-up.
    pub fn default_layer(&self) -> Option<&LayerDefinition> {
        self.get(DEFAULT_LAYER_NAME)
            .or_else(|| self.layers.get(DEFAULT_LAYER_INDEX))
            .or_else(|| self.layers.first())
    }
}
