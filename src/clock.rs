//! Clock Module
//!
//! Time source abstraction used to compute and evaluate entry expiry.
//! The cache never reads the system time directly; it goes through a
//! `Clock` so tests can drive expiry deterministically.

use std::sync::atomic::{AtomicU64, Ordering};

// == Clock Trait ==
/// A source of the current time in Unix milliseconds.
///
/// Implementations must be safe to read from multiple threads and must
/// return monotonically non-decreasing values.
pub trait Clock: Send + Sync {
    /// Returns the current time as milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

// == System Clock ==
/// Production clock backed by the wall-clock UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        chrono::Utc::now().timestamp_millis() as u64
    }
}

// == Manual Clock ==
/// Controllable clock for tests.
///
/// Starts at zero (or a chosen instant) and only moves when told to, so
/// expiry behavior can be exercised without real delays.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    // == Constructor ==
    /// Creates a clock frozen at the given instant.
    pub fn new(start_millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(start_millis),
        }
    }

    // == Set ==
    /// Jumps the clock to an absolute instant.
    ///
    /// Callers are expected to only move the clock forward; moving it
    /// backwards breaks the monotonicity contract of `Clock`.
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    // == Advance ==
    /// Moves the clock forward by the given number of milliseconds.
    pub fn advance(&self, delta_millis: u64) {
        self.millis.fetch_add(delta_millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}
