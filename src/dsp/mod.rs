//! DSP building blocks for the feature extractor.

pub mod biquad;

pub use biquad::Biquad;
