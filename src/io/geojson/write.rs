use geo::{Coord, Geometry, LineString, Polygon};
use serde_json::{json, Map, Value};

use crate::feature::Feature;

/// Convert a geometry to a GeoJSON geometry object.
/// Line, Rect and Triangle are written as their LineString/Polygon equivalents.
pub(crate) fn geometry_to_geojson(geom: &Geometry<f64>) -> Value {
    match geom {
        Geometry::Point(p) => json!({ "type": "Point", "coordinates": position(&p.0) }),
        Geometry::MultiPoint(mp) => json!({
            "type": "MultiPoint",
            "coordinates": mp.0.iter().map(|p| position(&p.0)).collect::<Vec<_>>(),
        }),
        Geometry::Line(line) => json!({
            "type": "LineString",
            "coordinates": [position(&line.start), position(&line.end)],
        }),
        Geometry::LineString(ls) => json!({ "type": "LineString", "coordinates": line(ls) }),
        Geometry::MultiLineString(mls) => json!({
            "type": "MultiLineString",
            "coordinates": mls.0.iter().map(line).collect::<Vec<_>>(),
        }),
        Geometry::Polygon(poly) => json!({ "type": "Polygon", "coordinates": rings(poly) }),
        Geometry::MultiPolygon(mp) => json!({
            "type": "MultiPolygon",
            "coordinates": mp.0.iter().map(rings).collect::<Vec<_>>(),
        }),
        Geometry::Rect(rect) => json!({ "type": "Polygon", "coordinates": rings(&rect.to_polygon()) }),
        Geometry::Triangle(tri) => json!({ "type": "Polygon", "coordinates": rings(&tri.to_polygon()) }),
        Geometry::GeometryCollection(gc) => json!({
            "type": "GeometryCollection",
            "geometries": gc.0.iter().map(geometry_to_geojson).collect::<Vec<_>>(),
        }),
    }
}

/// Feature with its original properties plus `extra` members merged on top.
pub(crate) fn feature_to_geojson(feature: &Feature, extra: Map<String, Value>) -> Value {
    let mut properties = feature.properties().clone();
    properties.extend(extra);

    json!({
        "type": "Feature",
        "geometry": feature.geometry().map(geometry_to_geojson),
        "properties": properties,
    })
}

pub(crate) fn feature_collection_to_geojson(features: Vec<Value>) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn position(c: &Coord<f64>) -> [f64; 2] { [c.x, c.y] }

fn line(ls: &LineString<f64>) -> Vec<[f64; 2]> { ls.0.iter().map(position).collect() }

/// Exterior ring followed by holes.
fn rings(poly: &Polygon<f64>) -> Vec<Vec<[f64; 2]>> {
    std::iter::once(poly.exterior()).chain(poly.interiors()).map(line).collect()
}
