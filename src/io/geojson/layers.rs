use geo::{Coord, Rect};
use serde_json::{json, Map, Value};

use crate::feature::{Feature, FeatureCollection};
use crate::io::geojson::{feature_collection_to_geojson, feature_to_geojson};
use crate::popup::{boundary_popup_html, popup_html, tooltip};
use crate::style::{StyleSpec, BOUNDARY_STYLE};
use crate::view::{Basemap, LayerRenderer, Overlay, Status};

/// Renderer that keeps each layer as a GeoJSON FeatureCollection, ready to
/// hand to a browser mapping library.
///
/// Point features carry their resolved style under `_style` and their popup
/// and tooltip under `_popup` / `_tooltip`, next to the original properties.
#[derive(Debug, Clone)]
pub struct GeoJsonLayers {
    view: Option<(Coord<f64>, u8)>,
    basemap: Option<Basemap>,
    boundary: Value,
    points: Value,
    boundary_visible: bool,
    points_visible: bool,
    control: Option<(Vec<Basemap>, Vec<Overlay>)>,
    fitted: Option<Rect<f64>>,
    status: String,
}

impl Default for GeoJsonLayers {
    fn default() -> Self {
        Self {
            view: None,
            basemap: None,
            boundary: Value::Null,
            points: Value::Null,
            boundary_visible: true,
            points_visible: true,
            control: None,
            fitted: None,
            status: Status::Ready.to_string(),
        }
    }
}

impl GeoJsonLayers {
    pub fn new() -> Self { Self::default() }

    /// Boundary layer, or null before it has been rendered.
    pub fn boundary(&self) -> &Value { &self.boundary }

    /// Current points layer, or null before the first render.
    pub fn points(&self) -> &Value { &self.points }

    pub fn is_visible(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Boundary => self.boundary_visible,
            Overlay::Locations => self.points_visible,
        }
    }

    pub fn basemap(&self) -> Option<Basemap> { self.basemap }

    pub fn initial_view(&self) -> Option<(Coord<f64>, u8)> { self.view }

    pub fn has_layer_control(&self) -> bool { self.control.is_some() }

    /// Last fitted extent as [min_lon, min_lat, max_lon, max_lat].
    pub fn fitted(&self) -> Option<[f64; 4]> {
        self.fitted.map(|r| [r.min().x, r.min().y, r.max().x, r.max().y])
    }

    pub fn status(&self) -> &str { &self.status }

    /// Leaflet-style summary of basemap and overlays for building the control.
    pub fn layer_control(&self) -> Value {
        let Some((basemaps, overlays)) = &self.control else { return Value::Null };
        json!({
            "basemaps": basemaps.iter().map(|b| json!({
                "label": b.label(),
                "url": b.url_template(),
                "maxZoom": b.max_zoom(),
                "attribution": b.attribution(),
                "active": Some(*b) == self.basemap,
            })).collect::<Vec<_>>(),
            "overlays": overlays.iter().map(|o| json!({
                "label": o.label(),
                "visible": self.is_visible(*o),
            })).collect::<Vec<_>>(),
        })
    }
}

impl LayerRenderer for GeoJsonLayers {
    fn set_view(&mut self, center: Coord<f64>, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn set_basemap(&mut self, basemap: Basemap) {
        self.basemap = Some(basemap);
    }

    fn render_boundary(&mut self, boundary: &FeatureCollection) {
        let features = boundary.iter().map(|f| {
            let mut extra = Map::new();
            extra.insert("_style".into(), json!(BOUNDARY_STYLE));
            extra.insert("_popup".into(), json!(boundary_popup_html(f)));
            feature_to_geojson(f, extra)
        }).collect();
        self.boundary = feature_collection_to_geojson(features);
    }

    fn render_points(&mut self, features: &[&Feature], style: fn(Option<&str>) -> StyleSpec) {
        let features = features.iter().map(|f| {
            let mut extra = Map::new();
            extra.insert("_style".into(), json!(style(f.category())));
            extra.insert("_popup".into(), json!(popup_html(f)));
            extra.insert("_tooltip".into(), json!(tooltip(f)));
            feature_to_geojson(f, extra)
        }).collect();
        self.points = feature_collection_to_geojson(features);
    }

    fn install_layer_control(&mut self, basemaps: &[Basemap], overlays: &[Overlay]) {
        self.control = Some((basemaps.to_vec(), overlays.to_vec()));
    }

    fn set_overlay_visible(&mut self, overlay: Overlay, visible: bool) {
        match overlay {
            Overlay::Boundary => self.boundary_visible = visible,
            Overlay::Locations => self.points_visible = visible,
        }
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>) {
        self.fitted = Some(bounds);
    }

    fn show_status(&mut self, status: &Status) {
        self.status = status.to_string();
    }
}
