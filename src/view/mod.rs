mod bounds;
mod controller;
mod layers;
mod renderer;
mod status;

pub(crate) use bounds::*;
pub use controller::ViewController;
pub use layers::{Basemap, Overlay};
pub use renderer::LayerRenderer;
pub use status::Status;

/// Fraction of the data extent added on each side when fitting the view.
pub const FIT_PADDING: f64 = 0.12;
