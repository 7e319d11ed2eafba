//! Stateful ring animation engine.
//!
//! Owns the per-pixel buffer and the animation clock. Each render pass
//! advances the phase by elapsed wall-time × speed and dispatches to the
//! pure renderers in [`modes`](super::modes); every pixel is rewritten
//! every pass, so no pixel is ever stale from a previous mode.

use smart_leds::RGB8;

use crate::constants::{DEFAULT_BRIGHTNESS, RING_PIXELS, SPEED_MAX, SPEED_MIN, SPEED_STEP};
use super::color::{clamp01, scale};
use super::modes::{self, RingMode};

const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Renderable and publishable ring state.
#[derive(Clone, Copy, Debug)]
pub struct RingState {
    pub mode: RingMode,
    /// Global intensity in [0, 1], applied after the mode renderer.
    pub brightness: f32,
    /// Animation rate multiplier, clamped to [`SPEED_MIN`], [`SPEED_MAX`].
    pub speed: f32,
    /// Animation clock; advances by `elapsed × speed`, reset on mode change.
    pub phase: f32,
    /// One entry per physical LED, fully rewritten every render pass.
    pub pixels: [RGB8; RING_PIXELS],
}

/// The animation engine. See the module docs for the render contract.
pub struct RingEngine {
    state: RingState,
}

impl RingEngine {
    /// Boot state: breathing at default brightness, speed 1.0, phase 0.
    ///
    /// Breathing is the initial mode so the ring shows visible life
    /// immediately, before any audio or motion arrives.
    pub const fn new() -> Self {
        RingEngine {
            state: RingState {
                mode: RingMode::IdleBreathing,
                brightness: DEFAULT_BRIGHTNESS,
                speed: 1.0,
                phase: 0.0,
                pixels: [BLACK; RING_PIXELS],
            },
        }
    }

    /// Render one frame.
    ///
    /// `elapsed_s` is wall-time since the previous render; `loudness` and
    /// `activity` are the latest feature values. While off, the buffer is
    /// cleared and the clock does not advance.
    pub fn render(&mut self, elapsed_s: f32, loudness: f32, activity: f32) -> &RingState {
        if self.state.mode == RingMode::Off {
            self.state.pixels = [BLACK; RING_PIXELS];
            return &self.state;
        }

        self.state.phase += elapsed_s * self.state.speed;

        let renderer: fn(f32, usize, usize, f32, f32) -> RGB8 = match self.state.mode {
            RingMode::Off => unreachable!(),
            RingMode::IdleBreathing => modes::idle_breathing,
            RingMode::AudioReactive => modes::audio_reactive,
            RingMode::Rainbow => modes::rainbow,
            RingMode::Aurora => modes::aurora,
            RingMode::OccupancyPulse => modes::occupancy_pulse,
        };

        let phase = self.state.phase;
        let brightness = self.state.brightness;
        for (i, px) in self.state.pixels.iter_mut().enumerate() {
            *px = scale(renderer(phase, i, RING_PIXELS, loudness, activity), brightness);
        }
        &self.state
    }

    /// Advance to the next mode in the button cycle and restart the
    /// animation clock. Ignored while off (the cycle never includes Off).
    pub fn on_button_press(&mut self) {
        if self.state.mode == RingMode::Off {
            return;
        }
        self.state.mode = self.state.mode.next_in_cycle();
        self.state.phase = 0.0;
    }

    /// Apply accumulated encoder rotation to the speed multiplier.
    /// The result is clamped, never rejected.
    pub fn on_encoder_delta(&mut self, delta: i32) {
        let speed = self.state.speed + delta as f32 * SPEED_STEP;
        self.state.speed = if speed < SPEED_MIN {
            SPEED_MIN
        } else if speed > SPEED_MAX {
            SPEED_MAX
        } else {
            speed
        };
    }

    /// External on/off command. `on = false` suspends rendering; `on = true`
    /// sets brightness and, only if currently off, restarts in breathing.
    pub fn set_on_off(&mut self, on: bool, brightness: f32) {
        if on {
            self.state.brightness = clamp01(brightness);
            if self.state.mode == RingMode::Off {
                self.state.mode = RingMode::IdleBreathing;
                self.state.phase = 0.0;
            }
        } else if self.state.mode != RingMode::Off {
            self.state.mode = RingMode::Off;
            self.state.phase = 0.0;
        }
    }

    /// Current state, for publishing or driving the physical LEDs.
    pub fn state(&self) -> &RingState {
        &self.state
    }

    pub fn mode(&self) -> RingMode {
        self.state.mode
    }

    pub fn speed(&self) -> f32 {
        self.state.speed
    }

    pub fn phase(&self) -> f32 {
        self.state.phase
    }
}
