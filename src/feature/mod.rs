mod collection;
mod feature;

pub use collection::FeatureCollection;
pub use feature::Feature;
