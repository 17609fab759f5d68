//! Millisecond busy-wait delay
//!
//! A calibrated spin loop. There is no timer behind it, so accuracy is only
//! as good as [`DelayConfig::iterations_per_ms`] and interrupts stretch it.

use core::hint;

use embedded_hal::delay::DelayNs;

use crate::config::DelayConfig;

const NS_PER_MS: u64 = 1_000_000;

/// Blocking busy-wait delay
#[derive(Debug, Clone)]
pub struct BusyDelay {
    config: DelayConfig,
}

impl Default for BusyDelay {
    fn default() -> Self {
        Self::new(DelayConfig::default())
    }
}

impl BusyDelay {
    /// Create a delay with the given calibration
    pub fn new(config: DelayConfig) -> Self {
        debug!(
            "delay: {} Hz, {} iterations/ms",
            config.cpu_hz, config.iterations_per_ms
        );
        Self { config }
    }

    /// Create a delay calibrated for a CPU clock
    ///
    /// See [`DelayConfig::for_clock`].
    pub fn for_clock(cpu_hz: u32) -> Self {
        Self::new(DelayConfig::for_clock(cpu_hz))
    }

    /// Calibration in use
    pub fn config(&self) -> &DelayConfig {
        &self.config
    }

    /// Block for approximately `ms` milliseconds
    ///
    /// Returns immediately for `ms == 0`.
    pub fn delay_ms(&mut self, ms: u32) {
        trace!("delay_ms({})", ms);
        for _ in 0..ms {
            spin(self.config.iterations_per_ms);
        }
    }

    /// Spin-loop iterations for a nanosecond delay
    ///
    /// Rounded up, so any non-zero request spins at least once.
    pub fn iterations_for_ns(&self, ns: u32) -> u64 {
        let total = ns as u64 * self.config.iterations_per_ms as u64;
        total.div_ceil(NS_PER_MS)
    }
}

/// Spin for `iterations` loop passes
///
/// `black_box` stops the optimizer from collapsing the loop.
fn spin(iterations: u32) {
    for i in 0..iterations {
        hint::black_box(i);
        hint::spin_loop();
    }
}

impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut remaining = self.iterations_for_ns(ns);
        while remaining > 0 {
            let chunk = remaining.min(u32::MAX as u64) as u32;
            spin(chunk);
            remaining -= chunk as u64;
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        BusyDelay::delay_ms(self, ms);
    }
}
