//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform` translates window-system events into `InputEvent`s.

mod frame;
pub(crate) mod platform;
mod types;

pub use frame::InputFrame;
pub use types::{InputEvent, Key, KeyPress, KeyState};
