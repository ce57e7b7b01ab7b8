//! SVG format writing operations for static map export.

mod proj;
mod render;
mod writer;

pub(crate) use proj::*;
pub use render::SvgRenderer;
pub(crate) use writer::*;
