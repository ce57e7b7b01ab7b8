mod layers;
mod read;
mod write;

pub use layers::GeoJsonLayers;
pub use read::read_feature_collection;
pub(crate) use write::*;
