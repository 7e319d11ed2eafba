//! User-input readers.
//!
//! The rotary encoder is decoded in interrupt context and drained by the
//! main loop; the push-button is polled with a debounce timer because
//! button edges are rare and tolerate tens of milliseconds of latency.

pub mod encoder;
pub mod button;

pub use button::{ButtonDebouncer, ButtonEvent};
pub use encoder::QuadratureDecoder;
