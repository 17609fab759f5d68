//! Global interrupt control
//!
//! The GPIO driver never touches interrupts, but code built on top of it
//! (critical sections around multi-register updates, EEPROM write timing)
//! does. This trait lets that code run unchanged on the target and on the
//! host, where a no-op implementation is substituted.

use core::sync::atomic::{compiler_fence, Ordering};

use crate::register::{bits, Register, RegisterBlock};

/// Global interrupt enable/disable capability
pub trait InterruptControl {
    /// Disable interrupts globally (`cli`)
    fn disable(&mut self);

    /// Enable interrupts globally (`sei`)
    fn enable(&mut self);

    /// Check whether interrupts are currently enabled
    fn is_enabled(&self) -> bool;

    /// Run `f` with interrupts disabled, then restore the previous state
    ///
    /// Interrupts are only re-enabled if they were enabled on entry, so
    /// nested calls behave. Compiler fences after `disable` and before
    /// `enable` keep the closure's memory accesses inside the section.
    fn free<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
        Self: Sized,
    {
        let was_enabled = self.is_enabled();
        self.disable();
        compiler_fence(Ordering::SeqCst);
        let result = f();
        compiler_fence(Ordering::SeqCst);
        if was_enabled {
            self.enable();
        }
        result
    }
}

/// Interrupt control through the I bit of SREG
///
/// Writing SREG bit 7 has the same effect as `cli`/`sei`. Backed by a real
/// register block this controls the CPU; backed by a mock it just records
/// the flag.
///
/// The SREG accesses are volatile but not compiler barriers on their own.
/// Use [`InterruptControl::free`] for critical sections: it fences both
/// edges so accesses in the closure cannot move outside them.
pub struct SregInterrupts<R> {
    regs: R,
}

impl<R: RegisterBlock> SregInterrupts<R> {
    /// Create interrupt control over the given register block
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Give back the register block
    pub fn release(self) -> R {
        self.regs
    }
}

impl<R: RegisterBlock> InterruptControl for SregInterrupts<R> {
    fn disable(&mut self) {
        self.regs.clear_bits(Register::Sreg, 1 << bits::SREG_I);
    }

    fn enable(&mut self) {
        self.regs.set_bits(Register::Sreg, 1 << bits::SREG_I);
    }

    fn is_enabled(&self) -> bool {
        self.regs.bits_set(Register::Sreg, 1 << bits::SREG_I)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    struct Sreg(u8);

    impl RegisterBlock for Sreg {
        fn read(&self, reg: Register) -> u8 {
            assert_eq!(reg, Register::Sreg);
            self.0
        }

        fn write(&mut self, reg: Register, value: u8) {
            assert_eq!(reg, Register::Sreg);
            self.0 = value;
        }
    }

    #[test]
    fn test_enable_disable() {
        let mut irq = SregInterrupts::new(Sreg(0x03));
        assert!(!irq.is_enabled());

        irq.enable();
        assert!(irq.is_enabled());
        // Other SREG flags preserved
        assert_eq!(irq.regs.0, 0x83);

        irq.disable();
        assert!(!irq.is_enabled());
        assert_eq!(irq.release().0, 0x03);
    }

    #[test]
    fn test_free_restores_enabled() {
        let mut irq = SregInterrupts::new(Sreg(0x80));
        let seen = irq.free(|| 42);
        assert_eq!(seen, 42);
        assert!(irq.is_enabled());
    }

    #[test]
    fn test_free_keeps_disabled() {
        let mut irq = SregInterrupts::new(Sreg(0x00));
        irq.free(|| ());
        assert!(!irq.is_enabled());
    }

    /// SREG shared with the closure under test
    struct SharedSreg<'a>(&'a Cell<u8>);

    impl RegisterBlock for SharedSreg<'_> {
        fn read(&self, reg: Register) -> u8 {
            assert_eq!(reg, Register::Sreg);
            self.0.get()
        }

        fn write(&mut self, reg: Register, value: u8) {
            assert_eq!(reg, Register::Sreg);
            self.0.set(value);
        }
    }

    #[test]
    fn test_free_runs_closure_with_interrupts_disabled() {
        let sreg = Cell::new(0x81);
        let mut irq = SregInterrupts::new(SharedSreg(&sreg));

        let inside = irq.free(|| sreg.get());
        assert_eq!(inside, 0x01);
        assert_eq!(sreg.get(), 0x81);

        // Nested section leaves the outer one disabled
        let nested = irq.free(|| {
            let mut inner = SregInterrupts::new(SharedSreg(&sreg));
            inner.free(|| ());
            sreg.get()
        });
        assert_eq!(nested, 0x01);
        assert_eq!(sreg.get(), 0x81);
    }
}
