use std::{path::Path, sync::Arc};

use ahash::AHashSet;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::{
    feature::{Feature, ItemId},
    source::{DatasetSource, DiskSource, DATASET_FILE},
};

/// On-disk shape of the dataset document.
#[derive(Serialize, Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    polygons: Vec<Feature>,
}

/// The static collection of map features, loaded once per session.
/// Features are shared so that a Selection can hold them cheaply.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    features: Vec<Arc<Feature>>,
}

impl Dataset {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features: features.into_iter().map(Arc::new).collect() }
    }

    /// Parse a `{"polygons": [...]}` document.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let doc: DatasetDocument = serde_json::from_slice(bytes)
            .context("Failed to parse dataset document")?;
        Ok(Self::new(doc.polygons))
    }

    /// Read and validate the dataset from a source.
    pub fn read_from_source(src: &dyn DatasetSource) -> Result<Self> {
        let bytes = src.get(DATASET_FILE)?;
        let dataset = Self::from_json_bytes(&bytes)
            .with_context(|| format!("Failed to load {DATASET_FILE}"))?;
        dataset.validate()?;
        log::info!("[dataset] loaded {} features", dataset.len());
        Ok(dataset)
    }

    /// Read and validate the dataset from a directory on disk.
    pub fn read_from_dir(dir: &Path) -> Result<Self> {
        Self::read_from_source(&DiskSource::new(dir))
    }

    /// Serialize back to the document shape.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let doc = DatasetDocument {
            polygons: self.features.iter().map(|f| f.as_ref().clone()).collect(),
        };
        serde_json::to_vec(&doc).context("Failed to serialize dataset")
    }

    #[inline] pub fn features(&self) -> &[Arc<Feature>] { &self.features }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// Look up a top-level feature by id.
    pub fn get(&self, id: &ItemId) -> Option<&Arc<Feature>> {
        self.features.iter().find(|f| &f.id == id)
    }

    /// Check id uniqueness: feature ids across the dataset (sub-polygons
    /// included), marker and route ids within their owning feature.
    pub fn validate(&self) -> Result<()> {
        fn check(feature: &Feature, seen: &mut AHashSet<ItemId>) -> Result<()> {
            if !seen.insert(feature.id.clone()) {
                bail!("Duplicate feature id '{}'", feature.id);
            }

            let mut markers = AHashSet::with_capacity(feature.markers.len());
            for marker in &feature.markers {
                if !markers.insert(&marker.id) {
                    bail!("Duplicate marker id '{}' in feature '{}'", marker.id, feature.id);
                }
            }

            let mut routes = AHashSet::with_capacity(feature.routes.len());
            for route in &feature.routes {
                if !routes.insert(&route.id) {
                    bail!("Duplicate route id '{}' in feature '{}'", route.id, feature.id);
                }
            }

            for sub in &feature.sub_polygons {
                check(sub, seen)?;
            }
            Ok(())
        }

        let mut seen = AHashSet::new();
        for feature in &self.features {
            check(feature, &mut seen)?;
        }
        Ok(())
    }

    /// Count of features, markers and routes at every nesting level.
    pub fn counts(&self) -> DatasetCounts {
        fn walk(feature: &Feature, counts: &mut DatasetCounts) {
            counts.features += 1;
            counts.markers += feature.markers.len();
            counts.routes += feature.routes.len();
            feature.sub_polygons.iter().for_each(|sub| walk(sub, counts));
        }

        let mut counts = DatasetCounts::default();
        self.features.iter().for_each(|f| walk(f, &mut counts));
        counts
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetCounts {
    pub features: usize,
    pub markers: usize,
    pub routes: usize,
}
