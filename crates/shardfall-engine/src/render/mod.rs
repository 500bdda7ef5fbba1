//! GPU presentation.
//!
//! The canvas is rasterized on the CPU; this module only moves its pixels to
//! the screen. Each renderer owns its GPU resources (pipelines, textures).

mod blit;
mod ctx;

pub use blit::CanvasBlitter;
pub use ctx::{RenderCtx, RenderTarget};
