//! LED ring animation.
//!
//! | Part | Purpose |
//! |------|---------|
//! | [`color`] | Hue/value → RGB conversion and brightness scaling |
//! | [`modes`] | Visualization modes and their pure per-pixel renderers |
//! | [`engine`] | Stateful engine: mode machine, phase clock, pixel buffer |

pub mod color;
pub mod modes;
pub mod engine;

pub use engine::{RingEngine, RingState};
pub use modes::RingMode;
