//! Board-agnostic GPIO driver for AVR microcontrollers
//!
//! This crate contains everything that does not depend on whether the
//! registers are real silicon or host memory:
//!
//! - Port and pin model (closed set of ports B, C, D)
//! - GPIO driver over any [`RegisterBlock`](avrio_hal::RegisterBlock)
//! - C-style raw entry points with fail-safe selector handling
//! - Millisecond busy-wait delay
//! - Configuration types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod log;

pub mod config;
pub mod delay;
pub mod gpio;
pub mod port;
pub mod raw;

pub use avrio_hal::{Direction, Level};
pub use config::DelayConfig;
pub use delay::BusyDelay;
pub use gpio::{Gpio, GpioPin};
pub use port::{GpioError, Pin, PinId, Port};
