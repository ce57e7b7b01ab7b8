use anyhow::Result;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use geolayers_core::{Basemap, DataPaths, GeoJsonLayers, ViewController};

use crate::common::*;

/// Browser-side viewer. The page fetches the two documents and hands over
/// their bytes; every input method re-renders and the page redraws from
/// `points_geojson()`.
#[wasm_bindgen]
pub struct WasmViewer {
    inner: ViewController<GeoJsonLayers>,
}

#[wasm_bindgen]
impl WasmViewer {
    /// Build and initialize a viewer from in-memory documents:
    /// files: { "data/boundary.geojson": Uint8Array, "data/points.geojson": Uint8Array }
    ///
    /// A load failure does not throw: the viewer is returned empty with an
    /// `Error: ...` status, so the page shows exactly one message.
    #[wasm_bindgen(constructor)]
    pub fn new(files: JsValue, boundary_path: Option<String>, points_path: Option<String>) -> Result<WasmViewer, JsValue> {
        let mem = js_files_to_source(files).map_err(js_err)?;

        let defaults = DataPaths::default();
        let paths = DataPaths {
            boundary: boundary_path.unwrap_or(defaults.boundary),
            points: points_path.unwrap_or(defaults.points),
        };

        let mut inner = ViewController::new(GeoJsonLayers::new());
        // the error is already in the status line
        let _ = inner.init(&mem, &paths);
        console_status(inner.status());

        Ok(WasmViewer { inner })
    }

    pub fn status(&self) -> String { self.inner.status().to_string() }

    pub fn is_ready(&self) -> bool { self.inner.is_ready() }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.categories()).map_err(|e| e.into())
    }

    /// Category selector options: "ALL" followed by the categories.
    pub fn category_options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.category_options()).map_err(|e| e.into())
    }

    pub fn set_text(&mut self, text: String) {
        self.inner.set_text(text);
        console_status(self.inner.status());
    }

    pub fn set_category(&mut self, category: String) {
        self.inner.set_category_str(&category);
        console_status(self.inner.status());
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        console_status(self.inner.status());
    }

    /// Fit to the visible data. Returns [min_lon, min_lat, max_lon, max_lat]
    /// or undefined when there is nothing to fit.
    pub fn fit(&mut self) -> Option<Vec<f64>> {
        self.inner.fit().map(|r| vec![r.min().x, r.min().y, r.max().x, r.max().y])
    }

    /// Show or hide "Boundary" / "Locations".
    pub fn set_overlay_visible(&mut self, overlay: String, visible: bool) -> Result<(), JsValue> {
        let overlay = parse_overlay(&overlay).map_err(js_err)?;
        self.inner.set_overlay_visible(overlay, visible);
        Ok(())
    }

    pub fn is_overlay_visible(&self, overlay: String) -> Result<bool, JsValue> {
        let overlay = parse_overlay(&overlay).map_err(js_err)?;
        Ok(self.inner.renderer().is_visible(overlay))
    }

    /// Switch basemap: "open_street_map" or "topo".
    pub fn set_basemap(&mut self, basemap: String) -> Result<(), JsValue> {
        let basemap: Basemap = serde_json::from_value(serde_json::Value::String(basemap))
            .map_err(js_err)?;
        self.inner.set_basemap(basemap);
        Ok(())
    }

    /// Current points layer as a GeoJSON FeatureCollection; each feature's
    /// properties carry `_style`, `_popup` and `_tooltip`.
    #[wasm_bindgen(js_name = "points_geojson")]
    pub fn points_geojson(&self) -> Result<JsValue, JsValue> {
        json_to_js(self.inner.renderer().points())
    }

    #[wasm_bindgen(js_name = "boundary_geojson")]
    pub fn boundary_geojson(&self) -> Result<JsValue, JsValue> {
        json_to_js(self.inner.renderer().boundary())
    }

    /// Basemap and overlay entries for building a layer switcher.
    pub fn layer_control(&self) -> Result<JsValue, JsValue> {
        json_to_js(&self.inner.renderer().layer_control())
    }

    /// Last fitted extent, [min_lon, min_lat, max_lon, max_lat].
    pub fn fitted_bounds(&self) -> Option<Vec<f64>> {
        self.inner.renderer().fitted().map(|b| b.to_vec())
    }
}
