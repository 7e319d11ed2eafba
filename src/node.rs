//! Per-node control loop: cadence gating and cross-component exchange.
//!
//! The platform layer calls [`SensorNode::tick`] once per pass through its
//! main loop. Within one tick the order is fixed: encoder rotation is
//! drained first, then button edges, then (on their own cadences) the
//! feature window and the render pass — so rotation and presses are
//! reflected in the very next rendered frame, never delayed by more than
//! one tick.
//!
//! Cadences: features ~10 Hz, render ~50 Hz, publishing ~5 Hz, heartbeat
//! every 5 s. All timestamps are wrapping `millis()` values.

use crate::audio::{AudioFeatureFrame, AudioSource, FeatureExtractor};
use crate::constants::{
    ENCODER_REFRESH_MS, FEATURE_INTERVAL_MS, HEARTBEAT_INTERVAL_MS, PUBLISH_INTERVAL_MS,
    RENDER_INTERVAL_MS,
};
use crate::input::{ButtonDebouncer, ButtonEvent, QuadratureDecoder};
use crate::ring::{RingEngine, RingState};

/// Sensor levels sampled by the platform layer for one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickInput {
    /// Polarity-resolved button level (true = pressed).
    pub button_pressed: bool,
    /// Recent-motion intensity in [0, 1] from the motion component;
    /// the core just reads the latest value, staleness is upstream's
    /// concern.
    pub motion_activity: f32,
}

/// Encoder snapshot published at the slow cadence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderReport {
    /// Cumulative position since boot.
    pub position: i32,
    /// Rotation accumulated since the previous report.
    pub delta: i32,
}

/// Everything the network layer should publish after one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickOutput {
    pub features: Option<AudioFeatureFrame>,
    pub ring: Option<RingState>,
    pub encoder: Option<EncoderReport>,
    pub button: Option<ButtonEvent>,
    pub heartbeat: bool,
}

/// One sensor node's real-time core: feature extractor, animation engine,
/// input readers and the tick scheduler that binds them.
pub struct SensorNode {
    extractor: FeatureExtractor,
    engine: RingEngine,
    button: ButtonDebouncer,
    last_feature_ms: u32,
    last_render_ms: u32,
    last_publish_ms: u32,
    last_encoder_report_ms: u32,
    last_heartbeat_ms: u32,
    /// Rotation accumulated for the next encoder report.
    report_delta: i32,
}

impl SensorNode {
    pub fn new() -> Self {
        SensorNode {
            extractor: FeatureExtractor::new(),
            engine: RingEngine::new(),
            button: ButtonDebouncer::new(false),
            last_feature_ms: 0,
            last_render_ms: 0,
            last_publish_ms: 0,
            last_encoder_report_ms: 0,
            last_heartbeat_ms: 0,
            report_delta: 0,
        }
    }

    /// Run one pass of the control loop.
    pub fn tick<S: AudioSource>(
        &mut self,
        now_ms: u32,
        input: TickInput,
        source: &mut S,
        encoder: &QuadratureDecoder,
    ) -> TickOutput {
        let mut out = TickOutput::default();

        // Rotation first: the loop's single critical section.
        let delta = encoder.drain_delta();
        if delta != 0 {
            self.engine.on_encoder_delta(delta);
            self.report_delta += delta;
        }

        // Button edges before the render that consumes the mode.
        if let Some(event) = self.button.sample(input.button_pressed, now_ms) {
            if event == ButtonEvent::Press {
                self.engine.on_button_press();
            }
            out.button = Some(event);
        }

        // Feature window on its own, slower cadence.
        if now_ms.wrapping_sub(self.last_feature_ms) >= FEATURE_INTERVAL_MS {
            self.last_feature_ms = now_ms;
            self.extractor.compute_frame(source);
        }

        // Render after all of this tick's input has been applied.
        let render_elapsed = now_ms.wrapping_sub(self.last_render_ms);
        if render_elapsed >= RENDER_INTERVAL_MS {
            self.last_render_ms = now_ms;
            let loudness = self.extractor.frame().loudness;
            self.engine
                .render(render_elapsed as f32 / 1000.0, loudness, input.motion_activity);
        }

        // Publish cadence: features and ring state every interval, the
        // encoder report when it moved or on the slow refresh.
        if now_ms.wrapping_sub(self.last_publish_ms) >= PUBLISH_INTERVAL_MS {
            self.last_publish_ms = now_ms;
            out.features = Some(self.extractor.frame());
            out.ring = Some(*self.engine.state());

            let refresh_due =
                now_ms.wrapping_sub(self.last_encoder_report_ms) >= ENCODER_REFRESH_MS;
            if self.report_delta != 0 || refresh_due {
                out.encoder = Some(EncoderReport {
                    position: encoder.position(),
                    delta: self.report_delta,
                });
                self.report_delta = 0;
                self.last_encoder_report_ms = now_ms;
            }
        }

        if now_ms.wrapping_sub(self.last_heartbeat_ms) >= HEARTBEAT_INTERVAL_MS {
            self.last_heartbeat_ms = now_ms;
            out.heartbeat = true;
        }

        out
    }

    /// Apply an asynchronous `{on, brightness}` command from the network
    /// layer. Takes effect immediately, outside the tick cadences.
    pub fn apply_ring_command(&mut self, on: bool, brightness: f32) {
        self.engine.set_on_off(on, brightness);
    }

    /// Current ring state, for driving the physical LEDs every frame.
    pub fn ring(&self) -> &RingState {
        self.engine.state()
    }

    /// Latest smoothed audio features.
    pub fn features(&self) -> AudioFeatureFrame {
        self.extractor.frame()
    }

    pub fn engine(&self) -> &RingEngine {
        &self.engine
    }
}
