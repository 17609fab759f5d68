//! No-op interrupt control for host builds
//!
//! There is no interrupt controller on the host. Code that brackets
//! register updates with `disable`/`enable` still runs; the calls just do
//! nothing. Use [`SregInterrupts`](avrio_hal::SregInterrupts) over a
//! [`MockRegisters`](crate::MockRegisters) instead when a test needs to
//! observe the I flag.

use avrio_hal::InterruptControl;

/// Interrupt control that ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterrupts;

impl InterruptControl for NoInterrupts {
    fn disable(&mut self) {}

    fn enable(&mut self) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockRegisters;
    use avrio_hal::{Register, SregInterrupts};

    #[test]
    fn test_noop() {
        let mut irq = NoInterrupts;
        irq.enable();
        assert!(!irq.is_enabled());
        assert_eq!(irq.free(|| 7), 7);
    }

    #[test]
    fn test_sreg_interrupts_over_mock() {
        let mut regs = MockRegisters::new();
        {
            let mut irq = SregInterrupts::new(&mut regs);
            irq.enable();
            irq.free(|| ());
            assert!(irq.is_enabled());
        }
        assert_eq!(regs.get(Register::Sreg), 0x80);

        // Interrupt control never touches GPIO state
        assert_eq!(
            regs.snapshot().diff(&MockRegisters::new().snapshot()).count(),
            1
        );
    }
}
