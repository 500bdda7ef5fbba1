use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::raster::{fill_nonzero, stroke_outline};
use super::Canvas;
use super::path::Path;

/// Persistent software canvas.
///
/// Pixels are opaque RGBA8 composited over a background color. Nothing is
/// ever cleared implicitly: paint accumulates until `clear_rect` or `resize`.
///
/// Invariant:
/// - `pixels.len() == width * height`
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    background: Color,
    pixels: Vec<[u8; 4]>,
    path: Path,

    /// Set by every mutation; consumed by the presenter.
    dirty: bool,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let fill = background.to_opaque_rgba8();
        Self {
            width,
            height,
            background,
            pixels: vec![fill; width as usize * height as usize],
            path: Path::new(),
            dirty: true,
        }
    }

    /// Resizes the surface. As with a 2D canvas, resizing discards all
    /// contents, even when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        let fill = self.background.to_opaque_rgba8();
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, fill);
        self.path.clear();
        self.dirty = true;
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Row-major RGBA8 pixels.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Row-major RGBA8 pixels as raw bytes, ready for texture upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Returns whether the canvas changed since the last call and resets the flag.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn composite(&mut self, edges: &[(Vec2, Vec2)], color: Color) {
        let color = color.clamped();
        if edges.is_empty() || color.a <= 0.0 {
            return;
        }

        let stride = self.width as usize;
        let pixels = &mut self.pixels;
        let mut touched = false;
        fill_nonzero(edges, self.width, self.height, |x, y| {
            let px = &mut pixels[y * stride + x];
            *px = color.blend_over(*px);
            touched = true;
        });

        self.dirty |= touched;
    }
}

impl Canvas for PixelCanvas {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        let Some((xs, ys)) = rect.pixel_span(self.width, self.height) else { return };

        let fill = self.background.to_opaque_rgba8();
        let stride = self.width as usize;
        for y in ys {
            self.pixels[y * stride + xs.start..y * stride + xs.end].fill(fill);
        }
        self.dirty = true;
    }

    #[inline]
    fn begin_path(&mut self) {
        self.path.clear();
    }

    #[inline]
    fn move_to(&mut self, p: Vec2) {
        self.path.move_to(p);
    }

    #[inline]
    fn line_to(&mut self, p: Vec2) {
        self.path.line_to(p);
    }

    #[inline]
    fn close_path(&mut self) {
        self.path.close();
    }

    fn fill(&mut self, color: Color) {
        let edges = self.path.fill_edges();
        self.composite(&edges, color);
    }

    fn stroke(&mut self, color: Color, width: f32) {
        let outline = stroke_outline(&self.path.stroke_segments(), width);
        self.composite(&outline, color);
    }
}
