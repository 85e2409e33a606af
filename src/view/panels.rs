use serde::Serialize;

use crate::data::{Dataset, ItemId, Marker, Route};
use crate::temporal::{filter_by_date, YearRange};

use super::{compose::compose, selection::Selection};

/// One row of the feature list in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry<'a> {
    pub id: &'a ItemId,
    pub name: &'a str,
    pub color: &'a str,
    pub selected: bool,
    pub marker_count: usize,
    pub route_count: usize,
}

/// Features visible under `range`, with their visible marker/route counts.
pub fn polygon_list<'a>(dataset: &'a Dataset, selection: &Selection, range: &YearRange) -> Vec<ListEntry<'a>> {
    filter_by_date(dataset.features(), range)
        .into_iter()
        .map(|feature| ListEntry {
            id: &feature.id,
            name: &feature.name,
            color: &feature.color,
            selected: selection.contains(&feature.id),
            marker_count: filter_by_date(&feature.markers, range).len(),
            route_count: filter_by_date(&feature.routes, range).len(),
        })
        .collect()
}

/// One card of the detail panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailEntry<'a> {
    pub id: &'a ItemId,
    pub name: &'a str,
    pub color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<&'a str>,
    pub routes: Vec<&'a Route>,
    pub markers: Vec<&'a Marker>,
}

/// Detail cards for the selected features that are visible under `range`.
/// An empty result means the panel shows its empty-state message.
pub fn detail_panel<'a>(selection: &'a Selection, range: &YearRange) -> Vec<DetailEntry<'a>> {
    compose(selection, range).features
        .into_iter()
        .map(|composed| DetailEntry {
            id: composed.id,
            name: composed.name,
            color: composed.color,
            image: composed.image,
            start_date: composed.source.when.start_date.as_deref(),
            end_date: composed.source.when.end_date.as_deref(),
            routes: composed.routes,
            markers: composed.markers,
        })
        .collect()
}
