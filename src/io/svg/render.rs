use std::{io::Write, path::Path};

use anyhow::{anyhow, Result};
use geo::{Coord, Geometry, LineString, Polygon, Rect};

use crate::feature::{Feature, FeatureCollection};
use crate::io::svg::*;
use crate::popup::{escape_html, tooltip};
use crate::style::{StyleSpec, BOUNDARY_STYLE};
use crate::view::{union_bounds, Basemap, LayerRenderer, Overlay, Status};

const MARGIN: f64 = 10.0;

/// Renderer that draws the boundary and styled markers to a static SVG.
///
/// Draws whatever was rendered last, framed by the last fitted extent (or by
/// the data when nothing was fitted). Hidden overlays are left out.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: f64,
    height: f64,
    boundary: Vec<Feature>,
    points: Vec<(Feature, StyleSpec)>,
    boundary_visible: bool,
    points_visible: bool,
    fitted: Option<Rect<f64>>,
    status: String,
}

impl SvgRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            boundary: Vec::new(),
            points: Vec::new(),
            boundary_visible: true,
            points_visible: true,
            fitted: None,
            status: String::new(),
        }
    }

    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.write_svg(&mut writer)?;
        writer.into_string()
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        self.write_svg(&mut writer)?;
        writer.finish()
    }

    fn extent(&self) -> Option<Rect<f64>> {
        self.fitted.or_else(|| {
            let boundary = self.boundary.iter().map(Feature::bounds).fold(None, union_bounds);
            let points = self.points.iter().map(|(f, _)| f.bounds()).fold(None, union_bounds);
            union_bounds(boundary, points)
        })
    }

    fn write_svg<W: Write>(&self, writer: &mut W) -> Result<()> {
        let extent = self.extent().ok_or_else(|| anyhow!("[io::svg] Nothing to draw: no geometry rendered"))?;
        let proj = Projection::fit(extent, self.width, self.height, MARGIN);

        write_svg_header(writer, self.width, self.height, &proj)?;
        write_svg_styles(writer)?;

        if self.boundary_visible {
            let attrs = format!(
                r#"class="boundary" fill="{color}" fill-opacity="{opacity}" stroke="{color}" stroke-width="{weight}""#,
                color = BOUNDARY_STYLE.color,
                opacity = BOUNDARY_STYLE.fill_opacity,
                weight = BOUNDARY_STYLE.weight,
            );
            writeln!(writer, r#"<g id="boundary">"#)?;
            for f in &self.boundary {
                if let Some(geom) = f.geometry() {
                    write_geometry(writer, geom, &proj, &attrs, 2.0)?;
                }
            }
            writeln!(writer, "</g>")?;
        }

        if self.points_visible {
            writeln!(writer, r#"<g id="locations">"#)?;
            for (f, style) in &self.points {
                let Some(geom) = f.geometry() else { continue };
                let attrs = format!(
                    r#"class="marker" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}""#,
                    style.fill_color, style.fill_opacity, style.stroke_color, style.stroke_weight,
                );
                writeln!(writer, "<g><title>{}</title>", escape_html(tooltip(f)))?;
                write_geometry(writer, geom, &proj, &attrs, style.radius)?;
                writeln!(writer, "</g>")?;
            }
            writeln!(writer, "</g>")?;
        }

        if !self.status.is_empty() {
            writeln!(writer, r#"<text class="status" x="{}" y="{}">{}</text>"#,
                MARGIN, self.height - 4.0, escape_html(&self.status))?;
        }

        write_svg_footer(writer)
    }
}

fn write_geometry<W: Write>(writer: &mut W, geom: &Geometry<f64>, proj: &Projection, attrs: &str, radius: f64) -> Result<()> {
    match geom {
        Geometry::Point(p) => write_circle(writer, p.0, proj, attrs, radius)?,
        Geometry::MultiPoint(mp) => {
            for p in &mp.0 { write_circle(writer, p.0, proj, attrs, radius)? }
        }
        Geometry::Line(line) => {
            let d = path_data([line.start, line.end].into_iter(), proj, false);
            writeln!(writer, r#"<path {attrs} fill="none" d="{d}"/>"#)?;
        }
        Geometry::LineString(ls) => {
            writeln!(writer, r#"<path {attrs} fill="none" d="{}"/>"#, path_data(ls.coords().copied(), proj, false))?;
        }
        Geometry::MultiLineString(mls) => {
            let d: Vec<String> = mls.0.iter().map(|ls| path_data(ls.coords().copied(), proj, false)).collect();
            writeln!(writer, r#"<path {attrs} fill="none" d="{}"/>"#, d.join(" "))?;
        }
        Geometry::Polygon(poly) => write_polygons(writer, std::slice::from_ref(poly), proj, attrs)?,
        Geometry::MultiPolygon(mp) => write_polygons(writer, &mp.0, proj, attrs)?,
        Geometry::Rect(rect) => write_polygons(writer, &[rect.to_polygon()], proj, attrs)?,
        Geometry::Triangle(tri) => write_polygons(writer, &[tri.to_polygon()], proj, attrs)?,
        Geometry::GeometryCollection(gc) => {
            for g in &gc.0 { write_geometry(writer, g, proj, attrs, radius)? }
        }
    }
    Ok(())
}

fn write_circle<W: Write>(writer: &mut W, c: Coord<f64>, proj: &Projection, attrs: &str, radius: f64) -> Result<()> {
    let (x, y) = proj.project(c);
    writeln!(writer, r#"<circle {attrs} cx="{x:.2}" cy="{y:.2}" r="{radius}"/>"#)?;
    Ok(())
}

/// One path per polygon set; holes cut out with evenodd.
fn write_polygons<W: Write>(writer: &mut W, polys: &[Polygon<f64>], proj: &Projection, attrs: &str) -> Result<()> {
    let d: Vec<String> = polys.iter()
        .flat_map(|p| std::iter::once(p.exterior()).chain(p.interiors()))
        .map(|ring: &LineString<f64>| path_data(ring.coords().copied(), proj, true))
        .collect();
    writeln!(writer, r#"<path {attrs} fill-rule="evenodd" d="{}"/>"#, d.join(" "))?;
    Ok(())
}

fn path_data(coords: impl Iterator<Item = Coord<f64>>, proj: &Projection, close: bool) -> String {
    let mut d = String::new();
    for (i, c) in coords.enumerate() {
        let (x, y) = proj.project(c);
        let cmd = if i == 0 { 'M' } else { 'L' };
        if !d.is_empty() { d.push(' ') }
        d.push_str(&format!("{cmd}{x:.2} {y:.2}"));
    }
    if close && !d.is_empty() { d.push_str(" Z") }
    d
}

impl LayerRenderer for SvgRenderer {
    fn set_view(&mut self, _center: Coord<f64>, _zoom: u8) {}

    // no tiles in a static export
    fn set_basemap(&mut self, _basemap: Basemap) {}

    fn render_boundary(&mut self, boundary: &FeatureCollection) {
        self.boundary = boundary.features().to_vec();
    }

    fn render_points(&mut self, features: &[&Feature], style: fn(Option<&str>) -> StyleSpec) {
        self.points = features.iter().map(|f| ((*f).clone(), style(f.category()))).collect();
    }

    fn install_layer_control(&mut self, _basemaps: &[Basemap], _overlays: &[Overlay]) {}

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

#[cfg(test)]
mod tests {
    use geo::polygon;
    use serde_json::Map;

    use super::*;
    use crate::style::style_for;
    use crate::test_util::{campus, point};

    #[test]
    fn empty_renderer_is_an_error() {
        assert!(SvgRenderer::new(100.0, 100.0).to_svg_string().is_err());
    }

    #[test]
    fn draws_markers_with_category_colors() {
        let features = campus();
        let refs: Vec<&Feature> = features.iter().collect();
        let mut svg = SvgRenderer::new(400.0, 300.0);
        svg.render_points(&refs, style_for);

        let out = svg.to_svg_string().unwrap();
        assert!(out.starts_with("<?xml"));
        assert_eq!(out.matches("<circle").count(), 3);
        assert!(out.contains(r##"fill="#4ea1ff""##));
        assert!(out.contains(r##"fill="#fbbf24""##));
        assert!(out.contains("<title>Lot A</title>"));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn draws_boundary_and_hides_toggled_overlays() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)];
        let boundary: FeatureCollection = vec![Feature::new(Some(Geometry::Polygon(poly)), Map::new())].into_iter().collect();
        let inside = point(Some("In"), Some("Study"), 0.5, 0.25);

        let mut svg = SvgRenderer::new(200.0, 200.0);
        svg.render_boundary(&boundary);
        svg.render_points(&[&inside], style_for);

        let out = svg.to_svg_string().unwrap();
        assert!(out.contains(r#"class="boundary""#));
        assert!(out.contains(" Z\""));
        assert_eq!(out.matches("<circle").count(), 1);

        svg.set_overlay_visible(Overlay::Locations, false);
        let out = svg.to_svg_string().unwrap();
        assert_eq!(out.matches("<circle").count(), 0);
        assert!(out.contains(r#"class="boundary""#));
    }

    #[test]
    fn status_line_is_escaped() {
        let features = campus();
        let mut svg = SvgRenderer::new(200.0, 200.0);
        svg.render_points(&[&features[0]], style_for);
        svg.show_status(&Status::Error("<bad>".into()));
        assert!(svg.to_svg_string().unwrap().contains("Error: &lt;bad&gt;"));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        let features = campus();
        let mut svg = SvgRenderer::new(200.0, 200.0);
        svg.render_points(&[&features[1]], style_for);
        svg.write_to_file(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<circle"));
    }
}
