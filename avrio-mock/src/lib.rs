//! Host-side register mock and test harness
//!
//! Lets driver code that talks to [`RegisterBlock`](avrio_hal::RegisterBlock)
//! run on a development machine:
//!
//! - [`MockRegisters`] - plain storage for every modeled register, with
//!   [`reset`](MockRegisters::reset) back to the power-on baseline
//! - [`NoInterrupts`] - interrupt control that does nothing
//! - [`harness`] - a small suite runner that resets the registers before
//!   each case and reports failures in hex
//!
//! Each `MockRegisters` value is an independent register file, so tests
//! can run in parallel without sharing state.

pub mod harness;
pub mod interrupt;
pub mod registers;

pub use harness::{Failure, Suite, Summary, TestResult};
pub use interrupt::NoInterrupts;
pub use registers::{MockRegisters, Snapshot};
