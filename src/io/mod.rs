//! IO module for format-specific reading and writing operations.
//!
//! # Format Modules
//!
//! - `geojson` - GeoJSON documents in, styled GeoJSON layers out (browser maps)
//! - `svg` - SVG format for static map export

pub(crate) mod geojson;
pub(crate) mod svg;

pub use geojson::{read_feature_collection, GeoJsonLayers};
pub use svg::SvgRenderer;
