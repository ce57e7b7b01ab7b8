//! Category symbology for point markers and the boundary overlay.

mod color;

use serde::Serialize;

pub use color::Rgb;

/// Known location categories. Anything else resolves to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Study,
    Services,
    Fitness,
    Parking,
    Other,
}

impl Category {
    /// Categories with a dedicated color, in legend order.
    pub const KNOWN: [Category; 4] = [Category::Study, Category::Services, Category::Fitness, Category::Parking];

    /// Resolve a category property. Matching is exact and case-sensitive.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("Study") => Category::Study,
            Some("Services") => Category::Services,
            Some("Fitness") => Category::Fitness,
            Some("Parking") => Category::Parking,
            _ => Category::Other,
        }
    }

    pub fn fill_color(self) -> Rgb {
        match self {
            Category::Study => Rgb::hex(0x4ea1ff),
            Category::Services => Rgb::hex(0x6ee7b7),
            Category::Fitness => Rgb::hex(0xfbbf24),
            Category::Parking => Rgb::hex(0xf472b6),
            Category::Other => Rgb::hex(0xa7b1c2),
        }
    }
}

/// Circle-marker style for a point feature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSpec {
    pub radius: f64,
    #[serde(rename = "weight")]
    pub stroke_weight: f64,
    pub fill_opacity: f64,
    pub fill_color: Rgb,
    #[serde(rename = "color")]
    pub stroke_color: Rgb,
}

const MARKER_RADIUS: f64 = 8.0;
const MARKER_WEIGHT: f64 = 2.0;
const MARKER_FILL_OPACITY: f64 = 0.9;
const MARKER_STROKE: Rgb = Rgb::hex(0x0b0c10);

/// Style for a category property value. Total: missing, empty, and unknown
/// categories all get the `Other` color.
pub fn style_for(category: Option<&str>) -> StyleSpec {
    StyleSpec {
        radius: MARKER_RADIUS,
        stroke_weight: MARKER_WEIGHT,
        fill_opacity: MARKER_FILL_OPACITY,
        fill_color: Category::from_name(category).fill_color(),
        stroke_color: MARKER_STROKE,
    }
}

/// Outline style for the boundary polygon.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryStyle {
    pub color: Rgb,
    pub weight: f64,
    pub fill_opacity: f64,
}

pub const BOUNDARY_STYLE: BoundaryStyle = BoundaryStyle {
    color: Rgb::hex(0x4ea1ff),
    weight: 2.0,
    fill_opacity: 0.08,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_get_their_colors() {
        assert_eq!(style_for(Some("Study")).fill_color.to_string(), "#4ea1ff");
        assert_eq!(style_for(Some("Services")).fill_color.to_string(), "#6ee7b7");
        assert_eq!(style_for(Some("Fitness")).fill_color.to_string(), "#fbbf24");
        assert_eq!(style_for(Some("Parking")).fill_color.to_string(), "#f472b6");
    }

    #[test]
    fn unknown_missing_and_empty_fall_back() {
        let fallback = style_for(None);
        assert_eq!(fallback.fill_color, Category::Other.fill_color());
        assert_eq!(style_for(Some("")), fallback);
        assert_eq!(style_for(Some("Cafeteria")), fallback);
        // case-sensitive
        assert_eq!(style_for(Some("study")), fallback);
    }

    #[test]
    fn deterministic_and_shared_geometry() {
        for cat in [Some("Study"), Some("Parking"), Some("nope"), None] {
            let a = style_for(cat);
            assert_eq!(a, style_for(cat));
            assert_eq!(a.radius, 8.0);
            assert_eq!(a.stroke_weight, 2.0);
            assert_eq!(a.fill_opacity, 0.9);
            assert_eq!(a.stroke_color.to_string(), "#0b0c10");
        }
    }

    #[test]
    fn known_colors_are_distinct_from_fallback() {
        for cat in Category::KNOWN {
            assert_ne!(cat.fill_color(), Category::Other.fill_color());
        }
    }

    #[test]
    fn serializes_with_leaflet_option_names() {
        let v = serde_json::to_value(style_for(Some("Study"))).unwrap();
        assert_eq!(v["fillColor"], "#4ea1ff");
        assert_eq!(v["color"], "#0b0c10");
        assert_eq!(v["weight"], 2.0);
        assert_eq!(v["fillOpacity"], 0.9);
    }
}
