//! Paint model shared between the canvas and the generator.
//!
//! Scope: color representation (premultiplied alpha). Geometry types remain
//! in `coords`.

pub mod color;

pub use color::Color;
