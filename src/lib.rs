#![doc = "geolayers public API"]
mod config;
mod error;
mod feature;
mod filter;
mod io;
mod popup;
mod source;
mod store;
mod style;
mod view;

#[doc(inline)]
pub use config::{DataPaths, ViewConfig};

#[doc(inline)]
pub use error::LoadError;

#[doc(inline)]
pub use feature::{Feature, FeatureCollection};

#[doc(inline)]
pub use filter::{filter, CategoryFilter, FilterState};

#[doc(inline)]
pub use io::{read_feature_collection, GeoJsonLayers, SvgRenderer};

#[doc(inline)]
pub use popup::{boundary_popup_html, escape_html, popup_html, tooltip};

#[doc(inline)]
pub use source::{DataSource, DiskSource, MemSource};

#[cfg(feature = "download")]
#[doc(inline)]
pub use source::HttpSource;

#[doc(inline)]
pub use store::{categories, FeatureStore};

#[doc(inline)]
pub use style::{style_for, BoundaryStyle, Category, Rgb, StyleSpec, BOUNDARY_STYLE};

#[doc(inline)]
pub use view::{Basemap, LayerRenderer, Overlay, Status, ViewController, FIT_PADDING};

#[cfg(test)]
pub(crate) mod test_util;
