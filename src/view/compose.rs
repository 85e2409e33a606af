use serde::Serialize;

use crate::data::{Feature, ItemId, LatLng, Marker, Route};
use crate::temporal::{filter_by_date, is_in_range, YearRange};

use super::selection::Selection;

/// A visible feature together with its visible children, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedFeature<'a> {
    pub id: &'a ItemId,
    pub name: &'a str,
    pub color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
    pub positions: &'a [LatLng],
    pub markers: Vec<&'a Marker>,
    pub routes: Vec<&'a Route>,
    pub sub_polygons: Vec<ComposedFeature<'a>>,
    #[serde(skip)]
    pub source: &'a Feature,
}

impl<'a> ComposedFeature<'a> {
    /// Compose one feature: `None` when the feature itself is out of range,
    /// otherwise its children filtered on their own extents.
    pub fn compose(feature: &'a Feature, range: &YearRange) -> Option<Self> {
        if !is_in_range(feature, range) {
            return None;
        }

        Some(Self {
            id: &feature.id,
            name: &feature.name,
            color: &feature.color,
            description: feature.description.as_deref(),
            image: feature.image.as_deref(),
            positions: &feature.positions,
            markers: filter_by_date(&feature.markers, range),
            routes: filter_by_date(&feature.routes, range),
            sub_polygons: feature.sub_polygons.iter()
                .filter_map(|sub| Self::compose(sub, range))
                .collect(),
            source: feature,
        })
    }

    /// Every drawable coordinate: outline, marker positions, route vertices,
    /// then the same for sub-polygons.
    pub fn coords(&self) -> Box<dyn Iterator<Item = LatLng> + '_> {
        let own = self.positions.iter().copied()
            .chain(self.markers.iter().map(|m| m.position))
            .chain(self.routes.iter().flat_map(|r| r.positions.iter().copied()));
        Box::new(own.chain(self.sub_polygons.iter().flat_map(|sub| sub.coords())))
    }
}

/// The exact geometry set to render for a selection and range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapComposition<'a> {
    pub features: Vec<ComposedFeature<'a>>,
}

impl<'a> MapComposition<'a> {
    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// All drawable coordinates in render order.
    pub fn coords(&self) -> impl Iterator<Item = LatLng> + '_ {
        self.features.iter().flat_map(|f| f.coords())
    }

    /// Number of visible markers across all levels.
    pub fn marker_count(&self) -> usize {
        fn count(f: &ComposedFeature<'_>) -> usize {
            f.markers.len() + f.sub_polygons.iter().map(count).sum::<usize>()
        }
        self.features.iter().map(count).sum()
    }

    /// Number of visible routes across all levels.
    pub fn route_count(&self) -> usize {
        fn count(f: &ComposedFeature<'_>) -> usize {
            f.routes.len() + f.sub_polygons.iter().map(count).sum::<usize>()
        }
        self.features.iter().map(count).sum()
    }
}

/// Compose every selected feature, in selection order.
pub fn compose<'a>(selection: &'a Selection, range: &YearRange) -> MapComposition<'a> {
    let features = selection.iter()
        .filter_map(|feature| ComposedFeature::compose(feature, range))
        .collect();
    MapComposition { features }
}
