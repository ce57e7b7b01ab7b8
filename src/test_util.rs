use geo::{Geometry, Point};
use serde_json::{Map, Value};

use crate::feature::Feature;

/// Point feature at (x, y) with optional name and category.
pub(crate) fn point(name: Option<&str>, category: Option<&str>, x: f64, y: f64) -> Feature {
    let mut props = Map::new();
    if let Some(name) = name {
        props.insert("name".into(), Value::from(name));
    }
    if let Some(category) = category {
        props.insert("category".into(), Value::from(category));
    }
    Feature::new(Some(Geometry::Point(Point::new(x, y))), props)
}

/// The three-location campus fixture: Library, Gym, Lot A.
pub(crate) fn campus() -> Vec<Feature> {
    vec![
        point(Some("Library"), Some("Study"), -111.784, 43.815),
        point(Some("Gym"), Some("Fitness"), -111.782, 43.818),
        point(Some("Lot A"), Some("Parking"), -111.787, 43.813),
    ]
}

pub(crate) fn names<'a>(features: &[&'a Feature]) -> Vec<&'a str> {
    features.iter().map(|f| f.name().unwrap_or("")).collect()
}
