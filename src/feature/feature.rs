use geo::{BoundingRect, Geometry, Rect};
use serde_json::{Map, Value};

/// A single geographic entity with its GeoJSON properties.
///
/// Features are immutable once loaded; everything downstream borrows them.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    geometry: Option<Geometry<f64>>,
    properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry<f64>>, properties: Map<String, Value>) -> Self {
        Self { geometry, properties }
    }

    /// Geometry, or None for a GeoJSON feature with `"geometry": null`.
    pub fn geometry(&self) -> Option<&Geometry<f64>> { self.geometry.as_ref() }

    /// All properties, including ones this crate does not interpret.
    pub fn properties(&self) -> &Map<String, Value> { &self.properties }

    /// String-valued property. Non-string values read as absent.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> { self.property("name") }

    pub fn category(&self) -> Option<&str> { self.property("category") }

    pub fn description(&self) -> Option<&str> { self.property("description") }

    /// Bounding rectangle of the geometry, if it has any coordinates.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.geometry.as_ref().and_then(|g| g.bounding_rect())
    }
}
