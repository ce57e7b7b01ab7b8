use geo::{Coord, Rect};

use crate::feature::{Feature, FeatureCollection};
use crate::style::StyleSpec;
use crate::view::{Basemap, Overlay, Status};

/// The mapping-library side of a viewer.
///
/// Every `render_points` call replaces the previous points layer entirely.
pub trait LayerRenderer {
    /// Initial center (x = lon, y = lat) and zoom.
    fn set_view(&mut self, center: Coord<f64>, zoom: u8);

    fn set_basemap(&mut self, basemap: Basemap);

    fn render_boundary(&mut self, boundary: &FeatureCollection);

    fn render_points(&mut self, features: &[&Feature], style: fn(Option<&str>) -> StyleSpec);

    fn install_layer_control(&mut self, basemaps: &[Basemap], overlays: &[Overlay]);

    fn set_overlay_visible(&mut self, overlay: Overlay, visible: bool);

    fn fit_bounds(&mut self, bounds: Rect<f64>);

    /// Called whenever the status line changes.
    fn show_status(&mut self, _status: &Status) {}
}
