use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::Canvas;

/// A single recorded canvas primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    ClearRect(Rect),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    Fill(Color),
    Stroke { color: Color, width: f32 },
}

/// Canvas that records primitives instead of rasterizing them.
///
/// Useful wherever paint calls need to be counted or inspected without a
/// window, e.g. checking that a redraw policy issues no redundant fills.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: u32,
    height: u32,
    ops: Vec<CanvasOp>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Changes the reported size without recording anything.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Drains and returns every op recorded so far.
    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn fill_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, CanvasOp::Fill(_))).count()
    }

    pub fn stroke_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, CanvasOp::Stroke { .. })).count()
    }

    /// Number of paint operations (fills + strokes).
    pub fn paint_count(&self) -> usize {
        self.fill_count() + self.stroke_count()
    }
}

impl Canvas for Recorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(CanvasOp::ClearRect(rect));
    }

    fn begin_path(&mut self) {
        self.ops.push(CanvasOp::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.ops.push(CanvasOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.ops.push(CanvasOp::LineTo(p));
    }

    fn close_path(&mut self) {
        self.ops.push(CanvasOp::ClosePath);
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(CanvasOp::Fill(color));
    }

    fn stroke(&mut self, color: Color, width: f32) {
        self.ops.push(CanvasOp::Stroke { color, width });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut rec = Recorder::new(10, 20);
        rec.begin_path();
        rec.move_to(Vec2::new(1.0, 2.0));
        rec.line_to(Vec2::new(3.0, 4.0));
        rec.stroke(Color::BLACK, 4.0);
        rec.fill(Color::WHITE);

        assert_eq!(
            rec.ops(),
            &[
                CanvasOp::BeginPath,
                CanvasOp::MoveTo(Vec2::new(1.0, 2.0)),
                CanvasOp::LineTo(Vec2::new(3.0, 4.0)),
                CanvasOp::Stroke { color: Color::BLACK, width: 4.0 },
                CanvasOp::Fill(Color::WHITE),
            ]
        );
        assert_eq!((rec.fill_count(), rec.stroke_count(), rec.paint_count()), (1, 1, 2));
    }

    #[test]
    fn clear_covers_reported_size() {
        let mut rec = Recorder::new(10, 20);
        rec.clear();
        assert_eq!(rec.take_ops(), vec![CanvasOp::ClearRect(Rect::new(0.0, 0.0, 10.0, 20.0))]);
        assert!(rec.ops().is_empty());
    }
}
