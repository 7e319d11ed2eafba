//! Second-order recursive (biquad) filter, direct form I.
//!
//! Coefficients come from the standard RBJ audio-EQ cookbook formulas.
//! The filter keeps its last two inputs and outputs so filtering is
//! continuous across window boundaries; state is zeroed only at
//! construction.

use libm::{cosf, sinf};

/// One second-order recursive filter section.
///
/// `process()` runs one sample through
/// `y = b0*x + b1*x1 + b2*x2 - a1*y1 - a2*y2` and shifts the state.
pub struct Biquad {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    /// Previous two inputs.
    x1: f32,
    x2: f32,
    /// Previous two outputs.
    y1: f32,
    y2: f32,
}

impl Biquad {
    fn from_unnormalized(b0: f32, b1: f32, b2: f32, a0: f32, a1: f32, a2: f32) -> Self {
        Biquad {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Low-pass with cutoff `f0` Hz and quality factor `q`.
    pub fn lowpass(sample_rate: f32, f0: f32, q: f32) -> Self {
        let w0 = 2.0 * core::f32::consts::PI * f0 / sample_rate;
        let cos_w0 = cosf(w0);
        let alpha = sinf(w0) / (2.0 * q);
        Self::from_unnormalized(
            (1.0 - cos_w0) / 2.0,
            1.0 - cos_w0,
            (1.0 - cos_w0) / 2.0,
            1.0 + alpha,
            -2.0 * cos_w0,
            1.0 - alpha,
        )
    }

    /// High-pass with cutoff `f0` Hz and quality factor `q`.
    pub fn highpass(sample_rate: f32, f0: f32, q: f32) -> Self {
        let w0 = 2.0 * core::f32::consts::PI * f0 / sample_rate;
        let cos_w0 = cosf(w0);
        let alpha = sinf(w0) / (2.0 * q);
        Self::from_unnormalized(
            (1.0 + cos_w0) / 2.0,
            -(1.0 + cos_w0),
            (1.0 + cos_w0) / 2.0,
            1.0 + alpha,
            -2.0 * cos_w0,
            1.0 - alpha,
        )
    }

    /// Band-pass with constant 0 dB peak gain at center `f0` Hz.
    pub fn bandpass(sample_rate: f32, f0: f32, q: f32) -> Self {
        let w0 = 2.0 * core::f32::consts::PI * f0 / sample_rate;
        let cos_w0 = cosf(w0);
        let alpha = sinf(w0) / (2.0 * q);
        Self::from_unnormalized(
            alpha,
            0.0,
            -alpha,
            1.0 + alpha,
            -2.0 * cos_w0,
            1.0 - alpha,
        )
    }

    /// Run one sample through the filter.
    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }
}
