//! GPIO driver self-test
//!
//! Runs the register-level driver checks against the host mock and prints
//! a PASSED/FAILED line per case. Exits non-zero if anything failed.

use std::io;
use std::process::ExitCode;

use avrio_core::{Direction, Level, Pin, Port};
use avrio_hal::Register;
use avrio_mock::{check_eq, run_test, MockRegisters, Suite, TestResult};

fn test_gpio_init_output(regs: &mut MockRegisters) -> TestResult {
    regs.gpio().init(Port::B, Pin::P5, Direction::Output);
    check_eq!(Pin::P5.mask(), regs.ddr(Port::B) & Pin::P5.mask());
    Ok(())
}

fn test_gpio_init_input(regs: &mut MockRegisters) -> TestResult {
    // Start as output so the change is visible
    regs.set(Register::Ddrb, Pin::P5.mask());
    regs.gpio().init(Port::B, Pin::P5, Direction::Input);
    check_eq!(0u8, regs.ddr(Port::B) & Pin::P5.mask());
    Ok(())
}

fn test_gpio_write_high(regs: &mut MockRegisters) -> TestResult {
    regs.gpio().write(Port::B, Pin::P5, Level::High);
    check_eq!(Pin::P5.mask(), regs.port(Port::B) & Pin::P5.mask());
    Ok(())
}

fn test_gpio_write_low(regs: &mut MockRegisters) -> TestResult {
    regs.set(Register::Portb, Pin::P5.mask());
    regs.gpio().write(Port::B, Pin::P5, Level::Low);
    check_eq!(0u8, regs.port(Port::B) & Pin::P5.mask());
    Ok(())
}

fn test_gpio_read(regs: &mut MockRegisters) -> TestResult {
    regs.drive_input(Port::B, Pin::P3.mask());
    check_eq!(Level::High, regs.gpio().read(Port::B, Pin::P3));

    regs.drive_input(Port::B, 0);
    check_eq!(Level::Low, regs.gpio().read(Port::B, Pin::P3));
    Ok(())
}

fn test_gpio_toggle(regs: &mut MockRegisters) -> TestResult {
    regs.gpio().toggle(Port::B, Pin::P4);
    check_eq!(Pin::P4.mask(), regs.port(Port::B));
    regs.gpio().toggle(Port::B, Pin::P4);
    check_eq!(0u8, regs.port(Port::B));
    Ok(())
}

fn test_gpio_unknown_port(regs: &mut MockRegisters) -> TestResult {
    regs.drive_input(Port::B, 0xFF);
    let before = regs.snapshot();

    check_eq!(Level::Low, regs.gpio().read_raw(3, 3));
    regs.gpio().init_raw(3, 3, Direction::Output);
    regs.gpio().write_raw(3, 3, Level::High);

    check_eq!(0usize, before.diff(&regs.snapshot()).count());
    Ok(())
}

fn main() -> io::Result<ExitCode> {
    let mut suite = Suite::stdout("GPIO Driver Unit Tests")?;

    run_test!(suite, test_gpio_init_output)?;
    run_test!(suite, test_gpio_init_input)?;
    run_test!(suite, test_gpio_write_high)?;
    run_test!(suite, test_gpio_write_low)?;
    run_test!(suite, test_gpio_read)?;
    run_test!(suite, test_gpio_toggle)?;
    run_test!(suite, test_gpio_unknown_port)?;

    let (summary, _) = suite.finish()?;
    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
