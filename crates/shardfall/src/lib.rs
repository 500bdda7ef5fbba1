//! Shardfall: an endless drift of randomly generated, color-biased triangles.
//!
//! The generator core (`bias`, `sampler`, `buffer`, `painter`, `controller`,
//! `scheduler`) is host independent and paints through
//! [`shardfall_engine::canvas::Canvas`]. `app` binds it to the engine runtime.

pub mod app;
pub mod bias;
pub mod buffer;
pub mod commands;
pub mod config;
pub mod controller;
pub mod painter;
pub mod sampler;
pub mod scheduler;
pub mod shapes;

pub use app::ShardfallApp;
pub use config::Config;
