use std::sync::Arc;

use crate::data::{Feature, ItemId};

/// The features the user has chosen to display, in the order they were
/// chosen. Features are unique by id.
///
/// Operations return a new `Selection` rather than mutating in place, so a
/// renderer can detect changes by comparing values.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    features: Vec<Arc<Feature>>,
}

impl Selection {
    pub fn new() -> Self { Self::default() }

    /// Remove `feature` if a feature with its id is selected, append it otherwise.
    pub fn toggle(&self, feature: &Arc<Feature>) -> Selection {
        if self.contains(&feature.id) {
            let features = self.features.iter()
                .filter(|f| f.id != feature.id)
                .cloned()
                .collect();
            Selection { features }
        } else {
            self.select(feature)
        }
    }

    /// Append `feature` unless already selected (map clicks never deselect).
    pub fn select(&self, feature: &Arc<Feature>) -> Selection {
        let mut features = self.features.clone();
        if !self.contains(&feature.id) {
            features.push(Arc::clone(feature));
        }
        Selection { features }
    }

    /// An empty selection; the input is left untouched.
    pub fn clear(&self) -> Selection { Selection::new() }

    #[inline] pub fn contains(&self, id: &ItemId) -> bool { self.features.iter().any(|f| &f.id == id) }

    #[inline] pub fn features(&self) -> &[Arc<Feature>] { &self.features }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> + '_ { self.features.iter().map(|f| &f.id) }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> + '_ { self.features.iter().map(|f| f.as_ref()) }
}

/// Selections are equal when they hold the same ids in the same order.
impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool { self.ids().eq(other.ids()) }
}

impl Eq for Selection {}

impl FromIterator<Arc<Feature>> for Selection {
    fn from_iter<I: IntoIterator<Item = Arc<Feature>>>(iter: I) -> Self {
        iter.into_iter().fold(Selection::new(), |sel, f| sel.select(&f))
    }
}
