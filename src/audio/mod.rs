//! Streaming audio feature extraction.
//!
//! Turns the raw I²S microphone stream into five smoothed scalar
//! descriptors once per fixed window: RMS loudness, zero-crossing rate,
//! and low/mid/high spectral band energy. Band energies are not
//! normalized against each other; consumers look at relative change over
//! time, not cross-band calibration.
//!
//! A short or empty read leaves the previous frame in place — the
//! extractor degrades to stale data, it never errors.

use libm::sqrtf;

use crate::constants::{
    AUDIO_SAMPLE_RATE, BAND_SPLIT_HIGH_HZ, BAND_SPLIT_LOW_HZ, FEATURE_SMOOTHING,
    FEATURE_WINDOW_SAMPLES,
};
use crate::dsp::Biquad;

/// Scale of one 24-bit sample after shifting off the low byte (2^23).
/// The I²S RX path delivers 24-bit samples left-justified in 32 bits.
const SAMPLE_SCALE: f32 = 8_388_608.0;

/// Non-blocking source of raw mono I²S frames.
///
/// `read` must return immediately with whatever samples are buffered;
/// 0 is a valid result and means "no update this window".
pub trait AudioSource {
    /// Read up to `buf.len()` frames into `buf`, returning the count read.
    fn read(&mut self, buf: &mut [i32]) -> usize;
}

/// Smoothed per-window audio descriptors.
///
/// Every field is exponentially smoothed, so consecutive frames change
/// gradually; there is no history, only the current smoothed value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioFeatureFrame {
    /// Smoothed RMS amplitude, unitless, roughly 0.0–1.0.
    pub loudness: f32,
    /// Fraction of adjacent sample pairs that change sign, in [0, 1].
    pub zero_crossing_rate: f32,
    /// Energy below the low crossover.
    pub low_energy: f32,
    /// Energy between the crossovers.
    pub mid_energy: f32,
    /// Energy above the high crossover.
    pub high_energy: f32,
}

/// Windowed feature extractor with persistent filter and smoothing state.
pub struct FeatureExtractor {
    window: [i32; FEATURE_WINDOW_SAMPLES],
    low: Biquad,
    mid: Biquad,
    high: Biquad,
    /// Last normalized sample of the previous window, so zero-crossing
    /// counting is continuous across window boundaries.
    prev_sample: f32,
    frame: AudioFeatureFrame,
}

impl FeatureExtractor {
    /// Create an extractor with zeroed filter and smoothing state.
    pub fn new() -> Self {
        let center = sqrtf(BAND_SPLIT_LOW_HZ * BAND_SPLIT_HIGH_HZ);
        let band_q = center / (BAND_SPLIT_HIGH_HZ - BAND_SPLIT_LOW_HZ);
        FeatureExtractor {
            window: [0; FEATURE_WINDOW_SAMPLES],
            low: Biquad::lowpass(AUDIO_SAMPLE_RATE, BAND_SPLIT_LOW_HZ, 0.707),
            mid: Biquad::bandpass(AUDIO_SAMPLE_RATE, center, band_q),
            high: Biquad::highpass(AUDIO_SAMPLE_RATE, BAND_SPLIT_HIGH_HZ, 0.707),
            prev_sample: 0.0,
            frame: AudioFeatureFrame::default(),
        }
    }

    /// Pull one window from `source` and recompute the feature frame.
    ///
    /// Returns the current frame either way: on a short or empty read the
    /// previous frame comes back unchanged and no state is touched.
    pub fn compute_frame<S: AudioSource>(&mut self, source: &mut S) -> AudioFeatureFrame {
        let n = source.read(&mut self.window);
        if n < FEATURE_WINDOW_SAMPLES {
            return self.frame;
        }
        self.process_window();
        self.frame
    }

    /// The most recent feature frame, without pulling new samples.
    pub fn frame(&self) -> AudioFeatureFrame {
        self.frame
    }

    fn process_window(&mut self) {
        let mut sum_sq = 0.0f32;
        let mut low_sq = 0.0f32;
        let mut mid_sq = 0.0f32;
        let mut high_sq = 0.0f32;
        let mut crossings = 0u32;
        let mut prev = self.prev_sample;

        for i in 0..FEATURE_WINDOW_SAMPLES {
            // 24-bit left-justified: drop the low byte, normalize to [-1, 1].
            let s = ((self.window[i] >> 8) as f32) / SAMPLE_SCALE;

            sum_sq += s * s;
            if (s < 0.0) != (prev < 0.0) {
                crossings += 1;
            }
            prev = s;

            let l = self.low.process(s);
            let m = self.mid.process(s);
            let h = self.high.process(s);
            low_sq += l * l;
            mid_sq += m * m;
            high_sq += h * h;
        }
        self.prev_sample = prev;

        let n = FEATURE_WINDOW_SAMPLES as f32;
        let f = &mut self.frame;
        f.loudness = blend(f.loudness, sqrtf(sum_sq / n));
        f.zero_crossing_rate = blend(f.zero_crossing_rate, crossings as f32 / n);
        f.low_energy = blend(f.low_energy, sqrtf(low_sq / n));
        f.mid_energy = blend(f.mid_energy, sqrtf(mid_sq / n));
        f.high_energy = blend(f.high_energy, sqrtf(high_sq / n));
    }
}

#[inline]
fn blend(smoothed: f32, new: f32) -> f32 {
    (1.0 - FEATURE_SMOOTHING) * smoothed + FEATURE_SMOOTHING * new
}

#[cfg(test)]
mod tests {
    use super::*;
    use libm::sinf;

    /// Pack a normalized sample the way the I²S RX path delivers it.
    fn raw(s: f32) -> i32 {
        ((s * 8_388_607.0) as i32) << 8
    }

    /// Continuous sine generator; each read continues the phase.
    struct SineSource {
        freq: f32,
        amplitude: f32,
        n: u64,
    }

    impl SineSource {
        fn new(freq: f32, amplitude: f32) -> Self {
            SineSource { freq, amplitude, n: 0 }
        }
    }

    impl AudioSource for SineSource {
        fn read(&mut self, buf: &mut [i32]) -> usize {
            for v in buf.iter_mut() {
                let t = self.n as f32 / AUDIO_SAMPLE_RATE;
                *v = raw(self.amplitude * sinf(2.0 * core::f32::consts::PI * self.freq * t));
                self.n += 1;
            }
            buf.len()
        }
    }

    /// Replays the same window every read (phase restarts each window).
    struct RepeatingSource {
        freq: f32,
        amplitude: f32,
    }

    impl AudioSource for RepeatingSource {
        fn read(&mut self, buf: &mut [i32]) -> usize {
            for (i, v) in buf.iter_mut().enumerate() {
                let t = i as f32 / AUDIO_SAMPLE_RATE;
                *v = raw(self.amplitude * sinf(2.0 * core::f32::consts::PI * self.freq * t));
            }
            buf.len()
        }
    }

    struct SilenceSource;

    impl AudioSource for SilenceSource {
        fn read(&mut self, buf: &mut [i32]) -> usize {
            buf.fill(0);
            buf.len()
        }
    }

    /// Always returns fewer samples than one window.
    struct ShortSource;

    impl AudioSource for ShortSource {
        fn read(&mut self, buf: &mut [i32]) -> usize {
            buf.len() / 4
        }
    }

    #[test]
    fn silence_yields_zero_features() {
        let mut ex = FeatureExtractor::new();
        let frame = ex.compute_frame(&mut SilenceSource);
        assert_eq!(frame.loudness, 0.0);
        assert_eq!(frame.zero_crossing_rate, 0.0);
        assert_eq!(frame.low_energy, 0.0);
    }

    #[test]
    fn loudness_converges_to_sine_rms() {
        // 1 kHz at 16 kHz: exactly 64 cycles per window, so every window
        // has identical instantaneous RMS = amplitude / sqrt(2).
        let mut ex = FeatureExtractor::new();
        let mut src = SineSource::new(1000.0, 0.5);
        let expected = 0.5 / core::f32::consts::SQRT_2;

        let mut last = 0.0;
        for _ in 0..40 {
            let frame = ex.compute_frame(&mut src);
            assert!(
                frame.loudness >= last - 1e-6,
                "smoothed loudness should rise monotonically toward the target"
            );
            last = frame.loudness;
        }
        assert!(
            (last - expected).abs() / expected < 0.01,
            "after 40 windows loudness {} should be within 1% of {}",
            last,
            expected
        );
    }

    #[test]
    fn zero_crossing_rate_stays_in_bounds() {
        for freq in [125.0, 1000.0, 5000.0] {
            let mut ex = FeatureExtractor::new();
            let mut src = SineSource::new(freq, 0.5);
            for _ in 0..10 {
                let frame = ex.compute_frame(&mut src);
                assert!(frame.zero_crossing_rate >= 0.0);
                assert!(frame.zero_crossing_rate <= 1.0);
            }
        }
    }

    #[test]
    fn zero_crossing_rate_tracks_frequency() {
        // A sine at f crosses zero 2f times per second: zcr ≈ 2f / fs.
        let mut ex = FeatureExtractor::new();
        let mut src = SineSource::new(1000.0, 0.5);
        let mut frame = AudioFeatureFrame::default();
        for _ in 0..40 {
            frame = ex.compute_frame(&mut src);
        }
        let expected = 2.0 * 1000.0 / AUDIO_SAMPLE_RATE;
        assert!(
            (frame.zero_crossing_rate - expected).abs() < 0.01,
            "zcr {} should be near {}",
            frame.zero_crossing_rate,
            expected
        );
    }

    #[test]
    fn filter_state_carries_across_windows() {
        // Same block twice: if filter state were reset per window, both
        // calls would produce identical band energies.
        let mut ex = FeatureExtractor::new();
        let mut src = RepeatingSource { freq: 1000.0, amplitude: 0.5 };
        let first = ex.compute_frame(&mut src);
        let second = ex.compute_frame(&mut src);
        assert_ne!(first.mid_energy, second.mid_energy);
        assert_ne!(first.low_energy, second.low_energy);
    }

    #[test]
    fn short_read_returns_previous_frame() {
        let mut ex = FeatureExtractor::new();
        let mut src = SineSource::new(1000.0, 0.5);
        let before = ex.compute_frame(&mut src);

        let stale = ex.compute_frame(&mut ShortSource);
        assert_eq!(stale, before);
        assert_eq!(ex.frame(), before);
    }

    #[test]
    fn band_energies_follow_spectral_content() {
        let mut low_ex = FeatureExtractor::new();
        let mut low_src = SineSource::new(125.0, 0.5);
        let mut high_ex = FeatureExtractor::new();
        let mut high_src = SineSource::new(5000.0, 0.5);
        let mut mid_ex = FeatureExtractor::new();
        let mut mid_src = SineSource::new(1000.0, 0.5);

        let mut low_frame = AudioFeatureFrame::default();
        let mut high_frame = AudioFeatureFrame::default();
        let mut mid_frame = AudioFeatureFrame::default();
        for _ in 0..40 {
            low_frame = low_ex.compute_frame(&mut low_src);
            high_frame = high_ex.compute_frame(&mut high_src);
            mid_frame = mid_ex.compute_frame(&mut mid_src);
        }

        assert!(
            low_frame.low_energy > low_frame.high_energy,
            "125 Hz: low {} should beat high {}",
            low_frame.low_energy,
            low_frame.high_energy
        );
        assert!(
            high_frame.high_energy > high_frame.low_energy,
            "5 kHz: high {} should beat low {}",
            high_frame.high_energy,
            high_frame.low_energy
        );
        assert!(
            mid_frame.mid_energy > mid_frame.low_energy,
            "1 kHz: mid {} should beat low {}",
            mid_frame.mid_energy,
            mid_frame.low_energy
        );
        assert!(
            mid_frame.mid_energy > mid_frame.high_energy,
            "1 kHz: mid {} should beat high {}",
            mid_frame.mid_energy,
            mid_frame.high_energy
        );
    }
}
