//! Quadrature rotary-encoder decoder.
//!
//! [`on_edge()`](QuadratureDecoder::on_edge) is the interrupt entry point:
//! it runs in O(1) with no allocation, no logging and no blocking calls.
//! Position and pending delta are atomics, so the main loop drains
//! rotation with a single atomic swap instead of masking interrupts.
//!
//! # Safety Contract
//!
//! - Only ONE context may call [`on_edge()`](QuadratureDecoder::on_edge)
//!   (the encoder edge interrupt; both pins share it).
//! - Only ONE context may call [`drain_delta()`](QuadratureDecoder::drain_delta)
//!   (the main loop).
//! - These may run concurrently; every transition recorded before a drain
//!   began is counted exactly once, in that drain or a later one.

use core::sync::atomic::{AtomicI32, AtomicU8, Ordering};

/// Transition table indexed by `(previous_state << 2) | current_state`,
/// where a state is `(pin_a << 1) | pin_b`. Invalid transitions (skipped
/// states, contact bounce) decode to 0.
const TRANSITIONS: [i8; 16] = [
    0, -1, 1, 0,
    1, 0, 0, -1,
    -1, 0, 0, 1,
    0, 1, -1, 0,
];

/// Interrupt-fed quadrature decoder with atomically drained rotation.
pub struct QuadratureDecoder {
    /// Cumulative position since startup.
    position: AtomicI32,
    /// Unconsumed rotation since the last drain.
    pending: AtomicI32,
    /// Last observed pin state; touched only by the producer side.
    prev: AtomicU8,
}

impl QuadratureDecoder {
    /// Create a decoder seeded with the resting level of both pins.
    pub const fn new(pin_a: bool, pin_b: bool) -> Self {
        QuadratureDecoder {
            position: AtomicI32::new(0),
            pending: AtomicI32::new(0),
            prev: AtomicU8::new(encode(pin_a, pin_b)),
        }
    }

    /// Decode one pin edge. Interrupt context; O(1), lock-free.
    pub fn on_edge(&self, pin_a: bool, pin_b: bool) {
        let state = encode(pin_a, pin_b);
        // Producer-private; Relaxed is enough.
        let prev = self.prev.load(Ordering::Relaxed);
        let step = TRANSITIONS[((prev << 2) | state) as usize] as i32;
        if step != 0 {
            self.position.fetch_add(step, Ordering::Relaxed);
            // Release pairs with the AcqRel swap in drain_delta.
            self.pending.fetch_add(step, Ordering::Release);
        }
        self.prev.store(state, Ordering::Relaxed);
    }

    /// Drain rotation accumulated since the last drain (main-loop side).
    ///
    /// The swap-to-zero is the sole mutual-exclusion point between the
    /// interrupt and the main loop.
    pub fn drain_delta(&self) -> i32 {
        self.pending.swap(0, Ordering::AcqRel)
    }

    /// Cumulative position since startup. Not consumed by reading.
    pub fn position(&self) -> i32 {
        self.position.load(Ordering::Relaxed)
    }
}

#[inline]
const fn encode(a: bool, b: bool) -> u8 {
    ((a as u8) << 1) | (b as u8)
}
