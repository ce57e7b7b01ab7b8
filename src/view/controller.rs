use geo::{Coord, Rect};
use tracing::{debug, error, info, warn};

use crate::config::{DataPaths, ViewConfig};
use crate::error::LoadError;
use crate::feature::{Feature, FeatureCollection};
use crate::filter::{filter, CategoryFilter, FilterState};
use crate::io::read_feature_collection;
use crate::source::DataSource;
use crate::store::FeatureStore;
use crate::style::style_for;
use crate::view::{pad_bounds, union_bounds, Basemap, LayerRenderer, Overlay, Status, FIT_PADDING};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Ready,
    Failed,
}

/// Owns the viewer state and keeps the renderer in sync with it.
///
/// After a successful `init`, the rendered points layer is always
/// `filter(store, filter_state)`: every input method re-renders before
/// returning. Before `init` (or after it failed) input methods are ignored
/// and leave the filter state untouched.
pub struct ViewController<R: LayerRenderer> {
    renderer: R,
    config: ViewConfig,
    store: FeatureStore,
    boundary: Option<FeatureCollection>,
    state: FilterState,
    phase: Phase,
    status: Status,
    /// Extent of the points layer as last rendered.
    points_bounds: Option<Rect<f64>>,
    shown: usize,
}

impl<R: LayerRenderer> ViewController<R> {
    pub fn new(renderer: R) -> Self { Self::with_config(renderer, ViewConfig::default()) }

    pub fn with_config(renderer: R, config: ViewConfig) -> Self {
        Self {
            renderer,
            config,
            store: FeatureStore::new(),
            boundary: None,
            state: FilterState::default(),
            phase: Phase::Uninitialized,
            status: Status::Ready,
            points_bounds: None,
            shown: 0,
        }
    }

    /// Load the boundary, then the points, then populate and render.
    ///
    /// Nothing is rendered unless both documents load; on failure the status
    /// becomes `Error: ...` and the controller stays empty for good.
    pub fn init(&mut self, source: &dyn DataSource, paths: &DataPaths) -> Result<(), LoadError> {
        if self.phase != Phase::Uninitialized {
            warn!("viewer already initialized, ignoring init");
            return Ok(());
        }

        let [lat, lon] = self.config.center;
        self.renderer.set_view(Coord { x: lon, y: lat }, self.config.zoom);
        self.renderer.set_basemap(self.config.basemap);

        match self.load(source, paths) {
            Ok((boundary, points)) => {
                self.commit(boundary, points);
                Ok(())
            }
            Err(e) => {
                error!(path = e.path(), "load failed: {e}");
                self.phase = Phase::Failed;
                self.set_status(Status::Error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Both fetch stages. The second only runs if the first succeeded.
    fn load(&mut self, source: &dyn DataSource, paths: &DataPaths) -> Result<(FeatureCollection, FeatureCollection), LoadError> {
        self.set_status(Status::LoadingBoundary);
        let boundary = fetch_collection(source, &paths.boundary)?;
        info!(path = %paths.boundary, features = boundary.len(), "loaded boundary");

        self.set_status(Status::LoadingPoints);
        let points = fetch_collection(source, &paths.points)?;
        info!(path = %paths.points, features = points.len(), "loaded points");

        Ok((boundary, points))
    }

    fn commit(&mut self, boundary: FeatureCollection, points: FeatureCollection) {
        self.store.load(points);
        debug!(categories = ?self.store.categories(), "category options");

        self.renderer.render_boundary(&boundary);
        self.boundary = Some(boundary);
        self.phase = Phase::Ready;

        self.render_points();
        self.renderer.install_layer_control(&Basemap::ALL, &Overlay::ALL);
        self.fit();

        self.set_status(Status::Loaded { total: self.store.len() });
    }

    /// Re-filter the store and replace the points layer.
    fn render_points(&mut self) {
        let visible = filter(self.store.features(), &self.state);
        self.points_bounds = visible.iter().map(|f| f.bounds()).fold(None, union_bounds);
        self.shown = visible.len();
        self.renderer.render_points(&visible, style_for);
    }

    fn apply_filters(&mut self) {
        if self.phase != Phase::Ready { return }

        self.render_points();
        debug!(text = %self.state.text, category = %self.state.category, shown = self.shown, "applied filters");
        self.set_status(Status::Showing { shown: self.shown, total: self.store.len() });
    }

    fn set_status(&mut self, status: Status) {
        self.renderer.show_status(&status);
        self.status = status;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.phase != Phase::Ready { return }
        self.state.text = text.into();
        self.apply_filters();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        if self.phase != Phase::Ready { return }
        self.state.category = category;
        self.apply_filters();
    }

    /// Category selector value; "ALL" selects everything.
    pub fn set_category_str(&mut self, value: &str) {
        self.set_category(CategoryFilter::parse(value));
    }

    /// Reset text and category, re-render, then fit.
    pub fn clear(&mut self) {
        if self.phase != Phase::Ready { return }
        self.state = FilterState::default();
        self.apply_filters();
        self.fit();
    }

    /// Fit the renderer to the boundary plus the current points layer.
    /// Returns the padded extent, or None when there is nothing to fit.
    pub fn fit(&mut self) -> Option<Rect<f64>> {
        let boundary = self.boundary.as_ref().and_then(FeatureCollection::bounds);
        let bounds = pad_bounds(union_bounds(boundary, self.points_bounds)?, FIT_PADDING);
        self.renderer.fit_bounds(bounds);
        Some(bounds)
    }

    pub fn set_overlay_visible(&mut self, overlay: Overlay, visible: bool) {
        if self.phase != Phase::Ready { return }
        self.renderer.set_overlay_visible(overlay, visible);
    }

    pub fn set_basemap(&mut self, basemap: Basemap) {
        self.config.basemap = basemap;
        self.renderer.set_basemap(basemap);
    }

    pub fn status(&self) -> &Status { &self.status }

    pub fn filter_state(&self) -> &FilterState { &self.state }

    pub fn is_ready(&self) -> bool { self.phase == Phase::Ready }

    pub fn store(&self) -> &FeatureStore { &self.store }

    pub fn boundary(&self) -> Option<&FeatureCollection> { self.boundary.as_ref() }

    pub fn categories(&self) -> Vec<String> { self.store.categories() }

    /// Category selector options: "ALL" followed by the categories.
    pub fn category_options(&self) -> Vec<String> {
        if self.phase != Phase::Ready { return Vec::new() }
        std::iter::once(CategoryFilter::ALL.to_string()).chain(self.categories()).collect()
    }

    /// Features in the current points layer.
    pub fn visible(&self) -> Vec<&Feature> { filter(self.store.features(), &self.state) }

    pub fn renderer(&self) -> &R { &self.renderer }

    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }

    pub fn into_renderer(self) -> R { self.renderer }
}

fn fetch_collection(source: &dyn DataSource, rel: &str) -> Result<FeatureCollection, LoadError> {
    let bytes = source.get(rel)?;
    read_feature_collection(rel, &bytes)
}
