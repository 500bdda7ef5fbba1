//! Time subsystem.
//!
//! Testable timing utilities, decoupled from the runtime:
//! - `Ticker`: fixed-rate logical ticks drained from the frame loop
//! - `Debounce`: coalesces bursts of events into one trailing firing
//!
//! Both take the current `Instant` as an argument so behavior can be tested
//! without sleeping.

mod debounce;
mod ticker;

pub use debounce::Debounce;
pub use ticker::Ticker;
