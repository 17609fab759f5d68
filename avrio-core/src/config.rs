//! Configuration types
//!
//! Build-time tuning for the board. Defaults match a 16 MHz ATmega328P.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default CPU clock (16 MHz)
pub const DEFAULT_CPU_HZ: u32 = 16_000_000;

/// Default busy-loop iterations per millisecond at 16 MHz
///
/// Rough figure; calibrate against a scope or the disassembly.
pub const DEFAULT_ITERATIONS_PER_MS: u32 = 1000;

/// Busy-wait delay calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DelayConfig {
    /// CPU clock in Hz
    pub cpu_hz: u32,
    /// Spin-loop iterations that take one millisecond
    pub iterations_per_ms: u32,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self::for_clock(DEFAULT_CPU_HZ)
    }
}

impl DelayConfig {
    /// Create a config with an explicit calibration
    pub const fn new(cpu_hz: u32, iterations_per_ms: u32) -> Self {
        Self {
            cpu_hz,
            iterations_per_ms,
        }
    }

    /// Scale the default calibration to another clock
    ///
    /// Assumes the loop cost in cycles is the same as at 16 MHz. Never
    /// returns zero iterations for a non-zero clock.
    pub const fn for_clock(cpu_hz: u32) -> Self {
        let scaled =
            (cpu_hz as u64 * DEFAULT_ITERATIONS_PER_MS as u64) / DEFAULT_CPU_HZ as u64;
        let iterations_per_ms = if scaled == 0 && cpu_hz != 0 {
            1
        } else if scaled > u32::MAX as u64 {
            u32::MAX
        } else {
            scaled as u32
        };
        Self {
            cpu_hz,
            iterations_per_ms,
        }
    }
}
