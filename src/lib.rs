//! # party-node
//!
//! `no_std`, zero-allocation real-time core for a party sensor node: an
//! ESP32-class board with an I²S microphone, a PIR motion sensor, a rotary
//! encoder with push-button, and an addressable LED ring. This crate is the
//! on-device signal-processing and animation engine; networking, OTA and the
//! surrounding hub services live outside it and only exchange plain data
//! structures with it.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Config | [`constants`] | Compile-time tuning constants |
//! | DSP | [`dsp`] | Second-order recursive (biquad) band filters |
//! | Analysis | [`audio`] | Windowed audio feature extraction with smoothing |
//! | Animation | [`ring`] | Mode state machine and per-pixel ring renderers |
//! | Input | [`input`] | ISR-side quadrature decoding, button debouncing |
//! | Loop | [`node`] | Tick scheduling and cross-component data exchange |
//!
//! ## Quick start
//!
//! ```ignore
//! use party_node::{QuadratureDecoder, SensorNode, TickInput};
//!
//! static ENCODER: QuadratureDecoder = QuadratureDecoder::new(true, true);
//!
//! // In the encoder edge ISR:
//! ENCODER.on_edge(read_pin_a(), read_pin_b());
//!
//! // In the platform main loop:
//! let mut node = SensorNode::new();
//! loop {
//!     let out = node.tick(
//!         millis(),
//!         TickInput { button_pressed: read_button(), motion_activity: pir_activity() },
//!         &mut i2s_source,
//!         &ENCODER,
//!     );
//!     led_driver.show(&node.ring().pixels);
//!     publisher.publish(out);
//! }
//! ```
//!
//! ## Real-time contract
//!
//! - No allocation, no blocking I/O, no logging anywhere in the core.
//! - Every public operation is total: out-of-range inputs are clamped and a
//!   short audio read degrades to "no update", never an error.
//! - The only state shared with interrupt context is the encoder's pending
//!   delta, drained with a single atomic swap.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod constants;
pub mod dsp;
pub mod audio;
pub mod ring;
pub mod input;
pub mod node;

pub use audio::{AudioFeatureFrame, AudioSource, FeatureExtractor};
pub use input::{ButtonDebouncer, ButtonEvent, QuadratureDecoder};
pub use node::{EncoderReport, SensorNode, TickInput, TickOutput};
pub use ring::{RingEngine, RingMode, RingState};
