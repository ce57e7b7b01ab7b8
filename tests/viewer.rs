// End-to-end tests: documents on disk -> viewer -> rendered layers.

use std::path::{Path, PathBuf};

use geolayers::{
    CategoryFilter, DataPaths, DiskSource, GeoJsonLayers, LoadError, Overlay, SvgRenderer, ViewController,
};

fn campus_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/campus")
}

fn campus_viewer() -> ViewController<GeoJsonLayers> {
    let mut view = ViewController::new(GeoJsonLayers::new());
    view.init(&DiskSource::new(campus_root()), &DataPaths::default()).unwrap();
    view
}

fn point_names(view: &ViewController<GeoJsonLayers>) -> Vec<String> {
    view.renderer().points()["features"].as_array().unwrap().iter()
        .map(|f| f["properties"]["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn loads_demo_site() {
    let view = campus_viewer();

    assert_eq!(view.status().to_string(), "Loaded 6 locations");
    assert_eq!(view.renderer().status(), "Loaded 6 locations");
    assert_eq!(view.category_options(), ["ALL", "Fitness", "Parking", "Services", "Study"]);
    assert_eq!(point_names(&view).len(), 6);
    assert!(view.renderer().has_layer_control());
    assert!(view.renderer().fitted().is_some());
}

#[test]
fn search_and_category_drive_points_layer() {
    let mut view = campus_viewer();

    view.set_text("CENTER");
    assert_eq!(point_names(&view), ["Student Center", "Fitness Center"]);
    assert_eq!(view.status().to_string(), "Showing 2 of 6 locations");

    view.set_category(CategoryFilter::parse("Fitness"));
    assert_eq!(point_names(&view), ["Fitness Center"]);

    view.clear();
    assert_eq!(point_names(&view).len(), 6);
    assert_eq!(view.status().to_string(), "Showing 6 of 6 locations");
}

#[test]
fn uncategorized_location_is_visible_but_never_selected() {
    let mut view = campus_viewer();
    assert!(point_names(&view).contains(&"Visitor Kiosk".to_string()));

    for category in view.categories() {
        view.set_category_str(&category);
        assert!(!point_names(&view).contains(&"Visitor Kiosk".to_string()));
    }

    let points = view.renderer().points().clone();
    let kiosk = points["features"].as_array().unwrap().iter()
        .find(|f| f["properties"]["name"] == "Visitor Kiosk");
    assert!(kiosk.is_none());
}

#[test]
fn missing_boundary_is_terminal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::copy(campus_root().join("data/points.geojson"), dir.path().join("data/points.geojson")).unwrap();

    let mut view = ViewController::new(GeoJsonLayers::new());
    let err = view.init(&DiskSource::new(dir.path()), &DataPaths::default()).unwrap_err();

    assert!(matches!(err, LoadError::Fetch { .. }));
    assert!(view.status().to_string().starts_with("Error: Failed to load data/boundary.geojson"));
    assert_eq!(view.renderer().status(), view.status().to_string());
    assert!(view.renderer().points().is_null());
    assert!(view.renderer().boundary().is_null());
    assert!(view.category_options().is_empty());
}

#[test]
fn malformed_points_is_terminal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::copy(campus_root().join("data/boundary.geojson"), dir.path().join("data/boundary.geojson")).unwrap();
    std::fs::write(dir.path().join("data/points.geojson"), "<html>404</html>").unwrap();

    let mut view = ViewController::new(GeoJsonLayers::new());
    assert!(matches!(
        view.init(&DiskSource::new(dir.path()), &DataPaths::default()),
        Err(LoadError::Parse { .. })
    ));
    assert!(view.status().is_error());
    assert!(view.renderer().boundary().is_null());
}

#[test]
fn renders_filtered_svg() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("map.svg");

    let mut view = ViewController::new(SvgRenderer::new(800.0, 600.0));
    view.init(&DiskSource::new(campus_root()), &DataPaths::default()).unwrap();
    view.set_category_str("Study");
    view.set_overlay_visible(Overlay::Boundary, false);
    view.renderer().write_to_file(&out).unwrap();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("<title>Library</title>"));
    assert!(svg.contains("<title>Science Building</title>"));
    assert!(!svg.contains(r#"class="boundary""#));
    assert!(svg.contains("Showing 2 of 6 locations"));
}
