use geo::{Coord, Rect};

/// Equirectangular lon/lat -> pixel mapping for a fixed canvas.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projection {
    bounds: Rect<f64>,
    margin: f64,
    scale: f64,
    height: f64,
}

impl Projection {
    /// Fit `bounds` inside a `width` x `height` canvas with `margin` pixels on
    /// each side, preserving aspect ratio.
    pub(crate) fn fit(bounds: Rect<f64>, width: f64, height: f64, margin: f64) -> Self {
        let avail_w = (width - 2.0 * margin).max(1.0);
        let avail_h = (height - 2.0 * margin).max(1.0);
        let sx = if bounds.width() > 0.0 { avail_w / bounds.width() } else { f64::INFINITY };
        let sy = if bounds.height() > 0.0 { avail_h / bounds.height() } else { f64::INFINITY };
        let scale = sx.min(sy);
        // degenerate extent (single point): any finite scale centers it
        let scale = if scale.is_finite() { scale } else { 1.0 };

        Self { bounds, margin, scale, height }
    }

    pub(crate) fn bounds(&self) -> &Rect<f64> { &self.bounds }

    pub(crate) fn scale(&self) -> f64 { self.scale }

    pub(crate) fn margin(&self) -> f64 { self.margin }

    /// Pixel position; y grows downward.
    pub(crate) fn project(&self, c: Coord<f64>) -> (f64, f64) {
        let x = self.margin + (c.x - self.bounds.min().x) * self.scale;
        let y = self.height - self.margin - (c.y - self.bounds.min().y) * self.scale;
        (x, y)
    }
}
