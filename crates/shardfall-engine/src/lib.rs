//! Shardfall engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the software canvas
//! used by the generator crate.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod canvas;
pub mod render;
pub mod paint;
