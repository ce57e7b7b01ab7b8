use serde::{Deserialize, Serialize};

use crate::view::Basemap;

/// Relative paths of the two documents a viewer loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub boundary: String,
    pub points: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            boundary: "data/boundary.geojson".to_string(),
            points: "data/points.geojson".to_string(),
        }
    }
}

/// Initial map view before any data is fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// [lat, lon]
    pub center: [f64; 2],
    pub zoom: u8,
    pub basemap: Basemap,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { center: [43.8153, -111.7845], zoom: 15, basemap: Basemap::OpenStreetMap }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let paths: DataPaths = serde_json::from_str(r#"{"points": "pts.json"}"#).unwrap();
        assert_eq!(paths.points, "pts.json");
        assert_eq!(paths.boundary, "data/boundary.geojson");

        let view: ViewConfig = serde_json::from_str(r#"{"basemap": "topo"}"#).unwrap();
        assert_eq!(view.basemap, Basemap::Topo);
        assert_eq!(view.zoom, 15);
    }
}
