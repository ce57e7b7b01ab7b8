use serde::{Deserialize, Serialize};

/// Background tile layers offered in the layer control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basemap {
    #[default]
    OpenStreetMap,
    Topo,
}

impl Basemap {
    pub const ALL: [Basemap; 2] = [Basemap::OpenStreetMap, Basemap::Topo];

    /// Label shown in the layer control.
    pub fn label(self) -> &'static str {
        match self {
            Basemap::OpenStreetMap => "OpenStreetMap",
            Basemap::Topo => "Topo (Optional)",
        }
    }

    /// XYZ tile URL template with `{s}` subdomain placeholder.
    pub fn url_template(self) -> &'static str {
        match self {
            Basemap::OpenStreetMap => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Basemap::Topo => "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        }
    }

    pub fn max_zoom(self) -> u8 {
        match self {
            Basemap::OpenStreetMap => 19,
            Basemap::Topo => 17,
        }
    }

    pub fn attribution(self) -> &'static str {
        match self {
            Basemap::OpenStreetMap => "&copy; OpenStreetMap contributors",
            Basemap::Topo => "&copy; OpenTopoMap contributors",
        }
    }
}

/// Data overlays that can be toggled on and off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    Boundary,
    Locations,
}

impl Overlay {
    pub const ALL: [Overlay; 2] = [Overlay::Boundary, Overlay::Locations];

    pub fn label(self) -> &'static str {
        match self {
            Overlay::Boundary => "Boundary",
            Overlay::Locations => "Locations",
        }
    }

    /// Inverse of `label`, case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label().eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basemap_zoom_limits() {
        assert_eq!(Basemap::default(), Basemap::OpenStreetMap);
        assert_eq!(Basemap::OpenStreetMap.max_zoom(), 19);
        assert_eq!(Basemap::Topo.max_zoom(), 17);
        for b in Basemap::ALL {
            assert!(b.url_template().contains("{z}/{x}/{y}"));
        }
    }

    #[test]
    fn overlay_labels_round_trip() {
        for o in Overlay::ALL {
            assert_eq!(Overlay::from_label(o.label()), Some(o));
        }
        assert_eq!(Overlay::from_label("locations"), Some(Overlay::Locations));
        assert_eq!(Overlay::from_label("roads"), None);
    }
}
