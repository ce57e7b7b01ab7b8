use geo::{Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::feature::{Feature, FeatureCollection};

/// Parse a GeoJSON document into a feature collection.
///
/// Accepts a FeatureCollection, a single Feature, or a bare geometry (which
/// becomes one feature without properties). A FeatureCollection whose
/// `features` member is missing or null is empty. `path` is only used in
/// error messages.
pub fn read_feature_collection(path: &str, bytes: &[u8]) -> Result<FeatureCollection, LoadError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| LoadError::parse(path, format!("invalid JSON: {e}")))?;

    parse_document(&value).map_err(|message| LoadError::parse(path, message))
}

fn parse_document(value: &Value) -> Result<FeatureCollection, String> {
    let obj = value.as_object()
        .ok_or_else(|| format!("expected a GeoJSON object, found {}", kind(value)))?;

    match type_of(obj)? {
        "FeatureCollection" => {
            let features = match obj.get("features") {
                None | Some(Value::Null) => return Ok(FeatureCollection::default()),
                Some(features) => features,
            };
            let features = features.as_array()
                .ok_or_else(|| format!("\"features\" must be an array, found {}", kind(features)))?;

            features.iter().enumerate()
                .map(|(idx, f)| parse_feature(f).map_err(|e| format!("feature {idx}: {e}")))
                .collect()
        }
        "Feature" => Ok(FeatureCollection::new(vec![parse_feature(value)?])),
        _ => Ok(FeatureCollection::new(vec![Feature::new(Some(parse_geometry(value)?), Map::new())])),
    }
}

fn parse_feature(value: &Value) -> Result<Feature, String> {
    let obj = value.as_object()
        .ok_or_else(|| format!("expected a Feature object, found {}", kind(value)))?;

    let geometry = match obj.get("geometry") {
        None | Some(Value::Null) => None,
        Some(g) => Some(parse_geometry(g)?),
    };

    let properties = match obj.get("properties") {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(props)) => props.clone(),
        Some(other) => return Err(format!("\"properties\" must be an object, found {}", kind(other))),
    };

    Ok(Feature::new(geometry, properties))
}

fn parse_geometry(value: &Value) -> Result<Geometry<f64>, String> {
    let obj = value.as_object()
        .ok_or_else(|| format!("expected a geometry object, found {}", kind(value)))?;
    let ty = type_of(obj)?;

    if ty == "GeometryCollection" {
        let members = obj.get("geometries").and_then(Value::as_array)
            .ok_or_else(|| "GeometryCollection is missing \"geometries\"".to_string())?;
        let geoms = members.iter().map(parse_geometry).collect::<Result<Vec<_>, _>>()?;
        return Ok(Geometry::GeometryCollection(GeometryCollection(geoms)));
    }

    let coords = obj.get("coordinates")
        .ok_or_else(|| format!("{ty} is missing \"coordinates\""))?;

    let geom = match ty {
        "Point" => Geometry::Point(Point(parse_position(coords)?)),
        "MultiPoint" => Geometry::MultiPoint(MultiPoint(
            array(coords)?.iter().map(|c| parse_position(c).map(Point)).collect::<Result<_, _>>()?,
        )),
        "LineString" => Geometry::LineString(parse_line(coords)?),
        "MultiLineString" => Geometry::MultiLineString(MultiLineString(
            array(coords)?.iter().map(parse_line).collect::<Result<_, _>>()?,
        )),
        "Polygon" => Geometry::Polygon(parse_polygon(coords)?),
        "MultiPolygon" => Geometry::MultiPolygon(MultiPolygon(
            array(coords)?.iter().map(parse_polygon).collect::<Result<_, _>>()?,
        )),
        other => return Err(format!("unsupported geometry type {other:?}")),
    };
    Ok(geom)
}

/// Polygon rings: [exterior, hole, hole, ...]
fn parse_polygon(value: &Value) -> Result<Polygon<f64>, String> {
    let mut rings = array(value)?.iter().map(parse_line);
    let exterior = rings.next()
        .ok_or_else(|| "polygon has no exterior ring".to_string())??;
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;

    // geo closes rings on construction
    Ok(Polygon::new(exterior, interiors))
}

fn parse_line(value: &Value) -> Result<LineString<f64>, String> {
    array(value)?.iter().map(parse_position).collect::<Result<Vec<_>, _>>().map(LineString)
}

/// Position: [x, y, ...]. Extra members (altitude) are ignored.
fn parse_position(value: &Value) -> Result<Coord<f64>, String> {
    match array(value)?.as_slice() {
        [x, y, ..] => {
            let x = x.as_f64().ok_or_else(|| "invalid coordinate: x must be a number".to_string())?;
            let y = y.as_f64().ok_or_else(|| "invalid coordinate: y must be a number".to_string())?;
            Ok(Coord { x, y })
        }
        _ => Err("invalid position: expected at least two numbers".to_string()),
    }
}

fn array(value: &Value) -> Result<&Vec<Value>, String> {
    value.as_array().ok_or_else(|| format!("expected an array, found {}", kind(value)))
}

fn type_of(obj: &Map<String, Value>) -> Result<&str, String> {
    obj.get("type").and_then(Value::as_str)
        .ok_or_else(|| "object has no \"type\" member".to_string())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
