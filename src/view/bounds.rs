use geo::{Coord, Rect};

/// Union of two optional extents. None is the empty extent.
pub(crate) fn union_bounds(a: Option<Rect<f64>>, b: Option<Rect<f64>>) -> Option<Rect<f64>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(Rect::new(
            Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
            Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
        )),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Grow a rectangle by `ratio` of its width and height on every side.
pub(crate) fn pad_bounds(rect: Rect<f64>, ratio: f64) -> Rect<f64> {
    let dx = rect.width() * ratio;
    let dy = rect.height() * ratio;
    Rect::new(
        Coord { x: rect.min().x - dx, y: rect.min().y - dy },
        Coord { x: rect.max().x + dx, y: rect.max().y + dy },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect<f64> {
        Rect::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 })
    }

    #[test]
    fn union_covers_both() {
        let u = union_bounds(Some(rect(0.0, 0.0, 1.0, 1.0)), Some(rect(-2.0, 0.5, 0.5, 3.0))).unwrap();
        assert_eq!(u, rect(-2.0, 0.0, 1.0, 3.0));
    }

    #[test]
    fn union_with_empty_is_identity() {
        let r = rect(0.0, 0.0, 1.0, 1.0);
        assert_eq!(union_bounds(Some(r), None), Some(r));
        assert_eq!(union_bounds(None, Some(r)), Some(r));
        assert_eq!(union_bounds(None, None), None);
    }

    #[test]
    fn pad_grows_each_side() {
        let p = pad_bounds(rect(0.0, 0.0, 10.0, 20.0), 0.12);
        assert!((p.min().x + 1.2).abs() < 1e-9);
        assert!((p.max().x - 11.2).abs() < 1e-9);
        assert!((p.min().y + 2.4).abs() < 1e-9);
        assert!((p.max().y - 22.4).abs() < 1e-9);
    }

    #[test]
    fn pad_of_single_point_stays_a_point() {
        let p = pad_bounds(rect(3.0, 4.0, 3.0, 4.0), 0.12);
        assert_eq!(p, rect(3.0, 4.0, 3.0, 4.0));
    }
}
