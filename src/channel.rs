//! Lock-free handoff of sensor samples from interrupt context.

use core::sync::atomic::{AtomicBool, AtomicI16, Ordering};

/// Single-slot mailbox carrying raw samples from a capture-complete
/// interrupt to the control loop.
///
/// One producer (the interrupt handler) calls [`deliver`](Self::deliver),
/// one consumer (the loop) calls [`take`](Self::take). The slot holds the
/// most recent sample only: a new delivery overwrites an unconsumed one, so
/// the consumer always sees the freshest reading and never a torn or stale
/// mix of two.
///
/// Everything is plain atomic loads and stores, no read-modify-write, so
/// the channel works on cores without compare-and-swap. The producer writes
/// the value before raising the ready flag with release ordering; the
/// consumer's acquire load of the flag therefore guarantees the value it
/// then reads is at least as fresh as that delivery.
///
/// All methods take `&self`, so a channel can live in a `static` shared
/// between the handler and the loop:
///
/// ```rust
/// use thermo_glow::SampleChannel;
///
/// static SAMPLES: SampleChannel = SampleChannel::new();
///
/// // interrupt handler on the sensor's capture-complete line
/// fn on_capture_complete(raw: i16) {
///     SAMPLES.deliver(raw);
/// }
///
/// on_capture_complete(341);
/// assert_eq!(SAMPLES.take(), Some(341));
/// assert_eq!(SAMPLES.take(), None);
/// ```
#[derive(Debug)]
pub struct SampleChannel {
    value: AtomicI16,
    ready: AtomicBool,
}

impl SampleChannel {
    /// Creates an empty channel.
    pub const fn new() -> Self {
        Self {
            value: AtomicI16::new(0),
            ready: AtomicBool::new(false),
        }
    }

    /// Publishes a sample, replacing any unconsumed one.
    ///
    /// Safe to call from interrupt context.
    pub fn deliver(&self, sample: i16) {
        self.value.store(sample, Ordering::Relaxed);
        self.ready.store(true, Ordering::Release);
    }

    /// Takes the pending sample, if any, and clears the slot.
    pub fn take(&self) -> Option<i16> {
        if !self.ready.load(Ordering::Acquire) {
            return None;
        }

        let sample = self.value.load(Ordering::Relaxed);
        self.ready.store(false, Ordering::Release);
        Some(sample)
    }

    /// Whether a sample is waiting.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Spins until a sample arrives and takes it.
    ///
    /// Only useful when deliveries are known to be coming; prefer
    /// [`take`](Self::take) inside a tick loop.
    pub fn take_blocking(&self) -> i16 {
        loop {
            if let Some(sample) = self.take() {
                return sample;
            }
            core::hint::spin_loop();
        }
    }
}

impl Default for SampleChannel {
    fn default() -> Self {
        Self::new()
    }
}
