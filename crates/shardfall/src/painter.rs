//! Paint-once triangle renderer.

use shardfall_engine::canvas::Canvas;
use shardfall_engine::coords::Vec2;

use crate::buffer::ShapeBuffer;
use crate::config::{LINE_WIDTH, OVERSCAN};
use crate::shapes::{Line, Point, Triangle};

/// Maps normalized shapes onto a canvas and paints them.
///
/// The unit square plus `overscan` on every side spans the whole surface, so
/// shapes near the edges can run past the visible area.
#[derive(Debug, Copy, Clone)]
pub struct Renderer {
    pub line_width: f32,
    pub overscan: f64,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            line_width: LINE_WIDTH,
            overscan: OVERSCAN,
        }
    }
}

impl Renderer {
    /// Converts a normalized point to surface pixels.
    pub fn to_surface(&self, p: Point, width: u32, height: u32) -> Vec2 {
        let span = 1.0 + 2.0 * self.overscan;
        let x = (-self.overscan + span * p.x) * width as f64;
        let y = (-self.overscan + span * p.y) * height as f64;
        Vec2::new(x as f32, y as f32)
    }

    /// Fills one triangle with its color.
    pub fn draw_triangle<C>(&self, triangle: &Triangle, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        let (w, h) = (canvas.width(), canvas.height());
        let [p1, p2, p3] = triangle.vertices().map(|p| self.to_surface(p, w, h));

        canvas.begin_path();
        canvas.move_to(p1);
        canvas.line_to(p2);
        canvas.line_to(p3);
        canvas.close_path();
        canvas.fill(triangle.color.to_color());
    }

    /// Strokes a single segment. Lines are never buffered.
    pub fn draw_line<C>(&self, line: &Line, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        let (w, h) = (canvas.width(), canvas.height());
        let a = self.to_surface(line.p1, w, h);
        let b = self.to_surface(line.p2, w, h);

        canvas.begin_path();
        canvas.move_to(a);
        canvas.line_to(b);
        canvas.stroke(line.color.to_color(), self.line_width);
    }

    /// Paints every unpainted shape in `buffer`, oldest first, and marks it
    /// painted. A second call without an insert or reset paints nothing.
    pub fn draw_unpainted<C>(&self, buffer: &mut ShapeBuffer, canvas: &mut C) -> usize
    where
        C: Canvas + ?Sized,
    {
        buffer.paint_pending(|_, triangle| self.draw_triangle(triangle, canvas))
    }

    /// Forgets what has been painted and paints the whole buffer again.
    pub fn repaint_all<C>(&self, buffer: &mut ShapeBuffer, canvas: &mut C) -> usize
    where
        C: Canvas + ?Sized,
    {
        buffer.reset_all_unpainted();
        self.draw_unpainted(buffer, canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardfall_engine::canvas::{CanvasOp, PixelCanvas, Recorder};
    use shardfall_engine::paint::Color;

    use crate::shapes::Rgba;

    const RED: Rgba = Rgba { r: 255, g: 0, b: 0, a: 1.0 };

    fn tri(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> Triangle {
        Triangle {
            p1: Point::new(p1.0, p1.1),
            p2: Point::new(p2.0, p2.1),
            p3: Point::new(p3.0, p3.1),
            color: RED,
        }
    }

    fn filled(n: usize) -> ShapeBuffer {
        let mut buf = ShapeBuffer::new(8);
        for i in 0..n {
            let x = i as f64 * 0.1;
            buf.insert(tri((x, 0.2), (x + 0.1, 0.2), (x, 0.3)));
        }
        buf
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn unit_square_is_overscanned() {
        let r = Renderer::default();
        assert_eq!(r.to_surface(Point::new(0.0, 0.0), 1000, 500), Vec2::new(-200.0, -100.0));
        assert_eq!(r.to_surface(Point::new(1.0, 1.0), 1000, 500), Vec2::new(1200.0, 600.0));
        assert_eq!(r.to_surface(Point::new(0.5, 0.5), 1000, 500), Vec2::new(500.0, 250.0));
    }

    #[test]
    fn triangle_is_a_closed_filled_path() {
        let mut rec = Recorder::new(100, 100);
        let t = tri((0.5, 0.5), (1.0, 0.5), (0.5, 1.0));
        Renderer::default().draw_triangle(&t, &mut rec);

        assert_eq!(
            rec.ops(),
            &[
                CanvasOp::BeginPath,
                CanvasOp::MoveTo(Vec2::new(50.0, 50.0)),
                CanvasOp::LineTo(Vec2::new(120.0, 50.0)),
                CanvasOp::LineTo(Vec2::new(50.0, 120.0)),
                CanvasOp::ClosePath,
                CanvasOp::Fill(RED.to_color()),
            ]
        );
    }

    #[test]
    fn line_is_stroked_at_fixed_width() {
        let mut rec = Recorder::new(10, 10);
        let line = Line {
            p1: Point::new(0.5, 0.0),
            p2: Point::new(0.5, 1.0),
            color: RED,
        };
        Renderer::default().draw_line(&line, &mut rec);

        assert_eq!(rec.fill_count(), 0);
        assert_eq!(rec.ops().last(), Some(&CanvasOp::Stroke { color: RED.to_color(), width: 4.0 }));
    }

    // ── paint-once policy ─────────────────────────────────────────────────

    #[test]
    fn draw_unpainted_is_idempotent() {
        let r = Renderer::default();
        let mut buf = filled(5);
        let mut rec = Recorder::new(64, 64);

        assert_eq!(r.draw_unpainted(&mut buf, &mut rec), 5);
        assert_eq!(rec.fill_count(), 5);

        rec.take_ops();
        assert_eq!(r.draw_unpainted(&mut buf, &mut rec), 0);
        assert!(rec.ops().is_empty());
    }

    #[test]
    fn only_new_shapes_are_painted_after_insert() {
        let r = Renderer::default();
        let mut buf = filled(3);
        let mut rec = Recorder::new(64, 64);
        r.draw_unpainted(&mut buf, &mut rec);
        rec.take_ops();

        buf.insert(tri((0.0, 0.0), (0.1, 0.0), (0.0, 0.1)));
        assert_eq!(r.draw_unpainted(&mut buf, &mut rec), 1);
        assert_eq!(rec.paint_count(), 1);
    }

    #[test]
    fn reset_repaints_every_shape_exactly_once() {
        let r = Renderer::default();
        let mut buf = filled(6);
        let mut rec = Recorder::new(64, 64);
        r.draw_unpainted(&mut buf, &mut rec);
        let first_pass = rec.take_ops();

        assert_eq!(r.repaint_all(&mut buf, &mut rec), 6);
        assert_eq!(rec.take_ops(), first_pass);
        assert_eq!(r.draw_unpainted(&mut buf, &mut rec), 0);
    }

    #[test]
    fn paints_onto_a_pixel_canvas() {
        let r = Renderer { overscan: 0.0, ..Renderer::default() };
        let mut canvas = PixelCanvas::new(20, 20, Color::WHITE);
        let mut buf = ShapeBuffer::new(1);
        buf.insert(tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)));

        r.draw_unpainted(&mut buf, &mut canvas);
        assert_eq!(canvas.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(18, 18), Some([255, 255, 255, 255]));
    }
}
