use geo::Rect;

use crate::feature::Feature;
use crate::view::union_bounds;

/// Ordered features in source-document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self { Self { features } }

    pub fn features(&self) -> &[Feature] { &self.features }

    pub fn len(&self) -> usize { self.features.len() }

    pub fn is_empty(&self) -> bool { self.features.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> { self.features.iter() }

    pub fn into_features(self) -> Vec<Feature> { self.features }

    /// Union of all feature bounds, None when no feature has coordinates.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.features.iter().map(Feature::bounds).fold(None, union_bounds)
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self { features: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter { self.features.iter() }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter { self.features.into_iter() }
}
