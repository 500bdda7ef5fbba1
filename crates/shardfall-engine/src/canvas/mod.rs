//! Immediate-mode 2D drawing surface.
//!
//! `Canvas` is the small path/fill/stroke contract the generator paints
//! through. Two implementations live here:
//! - `PixelCanvas`: persistent software raster presented by `render::CanvasBlitter`
//! - `Recorder`: logs primitives as `CanvasOp`s for inspection
//!
//! Coordinates are canvas pixels, origin top-left, +Y down.

mod path;
mod pixel;
mod raster;
mod record;

pub use pixel::PixelCanvas;
pub use record::{CanvasOp, Recorder};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Immediate-mode drawing surface with a single current path.
pub trait Canvas {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Resets the pixels under `rect` to the surface's cleared state.
    fn clear_rect(&mut self, rect: Rect);

    /// Discards the current path.
    fn begin_path(&mut self);

    /// Starts a new subpath at `p`.
    fn move_to(&mut self, p: Vec2);

    /// Appends a straight segment to the current subpath.
    fn line_to(&mut self, p: Vec2);

    /// Closes the current subpath back to its first point.
    fn close_path(&mut self);

    /// Fills the current path (nonzero winding) with `color`.
    fn fill(&mut self, color: Color);

    /// Strokes the current path with `color` and a line `width` in pixels.
    fn stroke(&mut self, color: Color, width: f32);

    /// Clears the whole surface.
    fn clear(&mut self) {
        let all = Rect::from_size(self.width(), self.height());
        self.clear_rect(all);
    }
}
