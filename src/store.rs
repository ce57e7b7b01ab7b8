use std::collections::BTreeSet;

use crate::feature::{Feature, FeatureCollection};
use crate::filter::CategoryFilter;

/// Authoritative point features for a viewer.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: FeatureCollection,
}

impl FeatureStore {
    pub fn new() -> Self { Self::default() }

    /// Replace the stored collection.
    pub fn load(&mut self, features: FeatureCollection) {
        self.features = features;
    }

    pub fn features(&self) -> &[Feature] { self.features.features() }

    pub fn collection(&self) -> &FeatureCollection { &self.features }

    pub fn len(&self) -> usize { self.features.len() }

    pub fn is_empty(&self) -> bool { self.features.is_empty() }

    pub fn categories(&self) -> Vec<String> { categories(self.features()) }
}

/// Distinct non-empty category values, sorted ascending.
///
/// A category literally named "ALL" would collide with the selector
/// sentinel and is left out.
pub fn categories(features: &[Feature]) -> Vec<String> {
    let set: BTreeSet<&str> = features.iter()
        .filter_map(Feature::category)
        .filter(|c| !c.is_empty())
        .collect();

    if set.contains(CategoryFilter::ALL) {
        tracing::warn!("ignoring category {:?}, it is reserved for the category selector", CategoryFilter::ALL);
    }

    set.into_iter()
        .filter(|c| *c != CategoryFilter::ALL)
        .map(str::to_string)
        .collect()
}
