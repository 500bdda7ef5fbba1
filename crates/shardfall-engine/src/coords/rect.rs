use super::Vec2;

/// Axis-aligned rectangle in canvas pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle anchored at the origin covering a `width x height` surface.
    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    #[inline]
    fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }

    /// Pixel index ranges `(x0..x1, y0..y1)` whose centers fall inside this
    /// rect, clipped to a `width x height` surface.
    ///
    /// Returns `None` when no pixel center is covered.
    pub fn pixel_span(
        self,
        width: u32,
        height: u32,
    ) -> Option<(core::ops::Range<usize>, core::ops::Range<usize>)> {
        let r = self.intersect(Rect::from_size(width, height))?;
        let max = r.max();

        let x0 = (r.origin.x - 0.5).ceil().max(0.0) as usize;
        let y0 = (r.origin.y - 0.5).ceil().max(0.0) as usize;
        let x1 = ((max.x - 0.5).ceil().max(0.0) as usize).min(width as usize);
        let y1 = ((max.y - 0.5).ceil().max(0.0) as usize).min(height as usize);

        if x0 >= x1 || y0 >= y1 {
            None
        } else {
            Some((x0..x1, y0..y1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_extent() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    // ── pixel_span ────────────────────────────────────────────────────────

    #[test]
    fn pixel_span_full_surface() {
        let (xs, ys) = Rect::from_size(8, 4).pixel_span(8, 4).unwrap();
        assert_eq!(xs, 0..8);
        assert_eq!(ys, 0..4);
    }

    #[test]
    fn pixel_span_is_clipped_to_surface() {
        let (xs, ys) = r(-5.0, 2.0, 100.0, 100.0).pixel_span(8, 4).unwrap();
        assert_eq!(xs, 0..8);
        assert_eq!(ys, 2..4);
    }

    #[test]
    fn pixel_span_uses_pixel_centers() {
        // Covers the centers 1.5 and 2.5 only.
        let (xs, _) = r(1.2, 0.0, 1.6, 1.0).pixel_span(8, 4).unwrap();
        assert_eq!(xs, 1..3);
    }

    #[test]
    fn pixel_span_outside_is_none() {
        assert!(r(20.0, 20.0, 5.0, 5.0).pixel_span(8, 4).is_none());
        assert!(r(1.1, 0.0, 0.2, 1.0).pixel_span(8, 4).is_none());
    }
}
