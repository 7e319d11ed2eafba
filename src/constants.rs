/// Audio sample rate in Hz (I²S microphone clock).
pub const AUDIO_SAMPLE_RATE: f32 = 16_000.0;

/// Samples per feature window (64 ms of audio at 16 kHz).
pub const FEATURE_WINDOW_SAMPLES: usize = 1024;

/// Exponential blend weight applied to each new feature value.
/// `smoothed = (1 - w) * smoothed + w * new`.
pub const FEATURE_SMOOTHING: f32 = 0.15;

/// Lower crossover of the three-band spectral split, in Hz.
pub const BAND_SPLIT_LOW_HZ: f32 = 300.0;

/// Upper crossover of the three-band spectral split, in Hz.
pub const BAND_SPLIT_HIGH_HZ: f32 = 3_000.0;

/// Number of LEDs on the ring.
pub const RING_PIXELS: usize = 24;

/// Lower bound of the animation speed multiplier.
pub const SPEED_MIN: f32 = 0.1;

/// Upper bound of the animation speed multiplier.
pub const SPEED_MAX: f32 = 5.0;

/// Speed change per encoder detent.
pub const SPEED_STEP: f32 = 0.1;

/// Ring brightness at boot.
pub const DEFAULT_BRIGHTNESS: f32 = 0.6;

/// Linear gain applied to loudness in the audio-reactive mode.
pub const AUDIO_REACTIVE_GAIN: f32 = 8.0;

/// Minimum interval between accepted button edges, in ms.
pub const BUTTON_DEBOUNCE_MS: u32 = 25;

/// Audio feature extraction cadence (~10 Hz), in ms.
pub const FEATURE_INTERVAL_MS: u32 = 100;

/// Ring render cadence (~50 Hz), in ms.
pub const RENDER_INTERVAL_MS: u32 = 20;

/// Publish cadence for features, ring state and encoder reports (~5 Hz), in ms.
pub const PUBLISH_INTERVAL_MS: u32 = 200;

/// Interval after which an encoder report is published even without
/// rotation, in ms.
pub const ENCODER_REFRESH_MS: u32 = 1_000;

/// Heartbeat cadence, in ms.
pub const HEARTBEAT_INTERVAL_MS: u32 = 5_000;
