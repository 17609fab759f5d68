//! ATmega328P-specific HAL for avrio
//!
//! Provides the real [`RegisterBlock`] for the ATmega328P: every modeled
//! register is accessed with a single volatile load or store at its
//! data-space address.
//!
//! # Usage
//!
//! ```ignore
//! use avrio_core::{Direction, Gpio, Level, Pin, Port};
//! use avrio_hal_atmega328p::Atmega328p;
//!
//! let regs = Atmega328p::take().unwrap();
//! let mut gpio = Gpio::new(regs);
//! gpio.init(Port::B, Pin::P5, Direction::Output);
//! gpio.write(Port::B, Pin::P5, Level::High);
//! ```

#![no_std]

pub mod addr;

use core::ptr;

use avrio_hal::{Register, RegisterBlock, SregInterrupts};
use portable_atomic::{AtomicBool, Ordering};

static TAKEN: AtomicBool = AtomicBool::new(false);

/// The ATmega328P I/O register file
///
/// Zero-sized; there is exactly one register file per chip, so [`take`]
/// hands out at most one instance.
///
/// [`take`]: Atmega328p::take
#[derive(Debug)]
pub struct Atmega328p {
    _private: (),
}

/// Global interrupt control through the real SREG
pub type Interrupts = SregInterrupts<Atmega328p>;

impl Atmega328p {
    /// Claim the register file
    ///
    /// Returns `Some` on the first call and `None` on every call after.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Self { _private: () })
        }
    }

    /// Get the register file without claiming it
    ///
    /// # Safety
    ///
    /// The caller must make sure no other handle performs conflicting
    /// read-modify-write sequences on the same registers.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl RegisterBlock for Atmega328p {
    fn read(&self, reg: Register) -> u8 {
        let addr = addr::of(reg) as *const u8;
        // SAFETY: `addr::of` only yields ATmega328P I/O register addresses,
        // which are always mapped and byte-addressable.
        unsafe { ptr::read_volatile(addr) }
    }

    fn write(&mut self, reg: Register, value: u8) {
        let addr = addr::of(reg) as *mut u8;
        // SAFETY: as above; `&mut self` serialises access through this handle.
        unsafe { ptr::write_volatile(addr, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_once() {
        let first = Atmega328p::take();
        assert!(first.is_some());
        assert!(Atmega328p::take().is_none());
        assert!(Atmega328p::take().is_none());
    }
}
