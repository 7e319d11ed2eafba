//! Visualization modes and their per-pixel renderers.
//!
//! Every renderer is a pure, total function of
//! `(phase, pixel_index, pixel_count, loudness, activity)` so each mode
//! can be tested in isolation without constructing the engine. Arguments
//! a mode ignores are part of the signature anyway to keep dispatch
//! uniform.

use libm::{floorf, sinf};
use smart_leds::RGB8;

use crate::constants::AUDIO_REACTIVE_GAIN;
use super::color::{clamp01, hue_deg_to_rgb, scale};

/// Ring visualization mode. Discriminants are the published wire ordinals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RingMode {
    Off = 0,
    IdleBreathing = 1,
    AudioReactive = 2,
    Rainbow = 3,
    Aurora = 4,
    OccupancyPulse = 5,
}

impl RingMode {
    /// The mode a button press advances to. `Off` is not part of the
    /// cycle; it maps to itself and is only left via an explicit command.
    pub fn next_in_cycle(self) -> RingMode {
        match self {
            RingMode::Off => RingMode::Off,
            RingMode::IdleBreathing => RingMode::AudioReactive,
            RingMode::AudioReactive => RingMode::Rainbow,
            RingMode::Rainbow => RingMode::Aurora,
            RingMode::Aurora => RingMode::OccupancyPulse,
            RingMode::OccupancyPulse => RingMode::IdleBreathing,
        }
    }

    /// Wire ordinal for publishing.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Single warm hue; intensity is a squared half-sine of the phase for a
/// slower perceptual ramp at the dim end. Ignores audio and motion.
pub fn idle_breathing(
    phase: f32,
    _idx: usize,
    _count: usize,
    _loudness: f32,
    _activity: f32,
) -> RGB8 {
    let wave = (sinf(phase) + 1.0) * 0.5;
    scale(RGB8::new(255, 140, 40), wave * wave)
}

/// Loudness through a fixed aggressive gain, quantized into five hue
/// bands along a blue (quiet) → red (loud) ramp. Same color on every
/// pixel; intensity follows the gained level.
pub fn audio_reactive(
    _phase: f32,
    _idx: usize,
    _count: usize,
    loudness: f32,
    _activity: f32,
) -> RGB8 {
    let level = clamp01(loudness * AUDIO_REACTIVE_GAIN);
    let band = {
        let b = floorf(level * 5.0) as i32;
        if b > 4 {
            4
        } else if b < 0 {
            0
        } else {
            b
        }
    };
    let hue = 240.0 - band as f32 * 60.0;
    hue_deg_to_rgb(hue, level)
}

/// Rotating rainbow: phase-rotated hue plus a fixed per-pixel angular
/// offset of `360° / count × idx`. Independent of audio and motion.
pub fn rainbow(phase: f32, idx: usize, count: usize, _loudness: f32, _activity: f32) -> RGB8 {
    let deg = phase * (360.0 / core::f32::consts::TAU);
    let offset = if count == 0 {
        0.0
    } else {
        360.0 * idx as f32 / count as f32
    };
    hue_deg_to_rgb(deg + offset, 1.0)
}

/// Two offset sine waves per pixel, summed and rescaled to [0, 1], mapped
/// onto a narrow green→cyan hue band. Ambient, non-reactive.
pub fn aurora(phase: f32, idx: usize, _count: usize, _loudness: f32, _activity: f32) -> RGB8 {
    let i = idx as f32;
    let wave = (sinf(phase + i * 0.3) + sinf(phase * 1.7 + i * 0.5)) * 0.25 + 0.5;
    let hue = 120.0 + 60.0 * wave;
    hue_deg_to_rgb(hue, 0.4 + 0.6 * wave)
}

/// Motion-driven pulse: intensity is activity times a tripled-rate
/// half-sine of the phase, on a fixed green-biased color. Ignores audio.
pub fn occupancy_pulse(
    phase: f32,
    _idx: usize,
    _count: usize,
    _loudness: f32,
    activity: f32,
) -> RGB8 {
    let pulse = (sinf(3.0 * phase) + 1.0) * 0.5;
    scale(RGB8::new(30, 255, 80), clamp01(activity) * pulse)
}
