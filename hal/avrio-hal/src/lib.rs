//! avrio Hardware Abstraction Layer
//!
//! This crate defines the seams between the GPIO driver and whatever stands
//! behind the memory-mapped I/O space: the real ATmega328P register file on
//! the target, or host-resident storage in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  avrio-core (GPIO driver, delay)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  avrio-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  avrio-hal-   │       │  avrio-mock   │
//! │  atmega328p   │       │   (host)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`register::RegisterBlock`] - Byte access to the modeled I/O registers
//! - [`interrupt::InterruptControl`] - Global interrupt enable/disable
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod interrupt;
pub mod register;

// Re-export key traits at crate root for convenience
pub use gpio::{ConfigurablePin, Direction, InputPin, IoPin, Level, OutputPin};
pub use interrupt::{InterruptControl, SregInterrupts};
pub use register::{Register, Register16, RegisterBlock};
