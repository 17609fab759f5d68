//! GPIO driver against the mock register file

use avrio_core::{Direction, Gpio, Level, Pin, Port};
use avrio_hal::{Register, RegisterBlock};
use avrio_mock::MockRegisters;
use proptest::prelude::*;

fn port_strategy() -> impl Strategy<Value = Port> {
    prop_oneof![Just(Port::B), Just(Port::C), Just(Port::D)]
}

fn pin_strategy() -> impl Strategy<Value = Pin> {
    (0..=Pin::MAX).prop_filter_map("pin index", Pin::new)
}

fn registers_strategy() -> impl Strategy<Value = MockRegisters> {
    prop::array::uniform26(any::<u8>()).prop_map(|values| {
        let mut regs = MockRegisters::new();
        for (reg, value) in Register::ALL.iter().zip(values) {
            regs.set(*reg, value);
        }
        regs
    })
}

/// Registers belonging to ports other than `port`
fn other_port_registers(port: Port) -> impl Iterator<Item = Register> {
    Port::ALL
        .into_iter()
        .filter(move |p| *p != port)
        .flat_map(|p| [p.ddr(), p.port(), p.pin()])
}

#[test]
fn test_init_output_sets_bit_5() {
    let mut regs = MockRegisters::new();
    regs.gpio().init(Port::B, Pin::P5, Direction::Output);
    assert_eq!(regs.ddr(Port::B), 0x20);
}

#[test]
fn test_init_input_clears_bit_5() {
    let mut regs = MockRegisters::new();
    regs.set(Register::Ddrb, 0x20);
    regs.gpio().init(Port::B, Pin::P5, Direction::Input);
    assert_eq!(regs.ddr(Port::B) & 0x20, 0x00);
}

#[test]
fn test_write_high_then_low() {
    let mut regs = MockRegisters::new();
    regs.gpio().write(Port::B, Pin::P5, Level::High);
    assert_eq!(regs.port(Port::B), 0x20);

    regs.gpio().write(Port::B, Pin::P5, Level::Low);
    assert_eq!(regs.port(Port::B) & 0x20, 0x00);
}

#[test]
fn test_read_follows_input_register() {
    let mut regs = MockRegisters::new();
    regs.drive_input(Port::B, 0x08);
    assert_eq!(regs.gpio().read(Port::B, Pin::P3), Level::High);

    regs.drive_input(Port::B, 0x00);
    assert_eq!(regs.gpio().read(Port::B, Pin::P3), Level::Low);
}

#[test]
fn test_read_unknown_port_is_low_and_mutates_nothing() {
    let mut regs = MockRegisters::new();
    for port in Port::ALL {
        regs.drive_input(port, 0xFF);
    }
    let before = regs.snapshot();

    assert_eq!(regs.gpio().read_raw(7, 3), Level::Low);
    assert_eq!(before.diff(&regs.snapshot()).count(), 0);
}

#[test]
fn test_toggle_bit_4_twice() {
    let mut regs = MockRegisters::new();
    regs.gpio().toggle(Port::B, Pin::P4);
    assert_eq!(regs.port(Port::B) & 0x10, 0x10);

    regs.gpio().toggle(Port::B, Pin::P4);
    assert_eq!(regs.port(Port::B) & 0x10, 0x00);
}

#[test]
fn test_init_output_twice_is_idempotent() {
    let mut regs = MockRegisters::new();
    regs.gpio().init(Port::D, Pin::P6, Direction::Output);
    let once = regs.snapshot();
    regs.gpio().init(Port::D, Pin::P6, Direction::Output);
    assert_eq!(regs.snapshot(), once);
}

#[test]
fn test_reset_between_cases() {
    let mut regs = MockRegisters::new();
    {
        let mut gpio = Gpio::new(&mut regs);
        for port in Port::ALL {
            for pin in Pin::ALL {
                gpio.init(port, pin, Direction::Output);
                gpio.write(port, pin, Level::High);
            }
        }
    }
    regs.write_wide(avrio_hal::Register16::Adc, 0x3FF);
    assert!(!regs.snapshot().is_zeroed());

    regs.reset();
    assert!(regs.snapshot().is_zeroed());
}

#[test]
fn test_driver_owning_mock() {
    let mut gpio = Gpio::new(MockRegisters::new());
    gpio.init(Port::C, Pin::P0, Direction::Output);
    gpio.write(Port::C, Pin::P0, Level::High);

    let regs = gpio.release();
    assert_eq!(regs.ddr(Port::C), 0x01);
    assert_eq!(regs.port(Port::C), 0x01);
    assert_eq!(regs.read(Register::Pinc), 0x00);
}

proptest! {
    #[test]
    fn prop_write_never_touches_direction_or_input(
        mut regs in registers_strategy(),
        port in port_strategy(),
        pin in pin_strategy(),
    ) {
        let before = regs.snapshot();
        regs.gpio().write(port, pin, Level::High);

        for p in Port::ALL {
            prop_assert_eq!(regs.ddr(p), before.get(p.ddr()));
            prop_assert_eq!(regs.pin(p), before.get(p.pin()));
        }
    }

    #[test]
    fn prop_operations_isolated_to_one_port(
        mut regs in registers_strategy(),
        port in port_strategy(),
        pin in pin_strategy(),
        op in 0u8..4,
    ) {
        let before = regs.snapshot();
        {
            let mut gpio = regs.gpio();
            match op {
                0 => gpio.init(port, pin, Direction::Output),
                1 => gpio.init(port, pin, Direction::Input),
                2 => gpio.write(port, pin, Level::High),
                _ => gpio.toggle(port, pin),
            }
        }

        for reg in other_port_registers(port) {
            prop_assert_eq!(regs.get(reg), before.get(reg));
        }
        // Non-GPIO registers stay put too
        let changed: Vec<Register> = before.diff(&regs.snapshot()).collect();
        prop_assert!(changed.len() <= 1);
        prop_assert!(changed.iter().all(|r| *r == port.ddr() || *r == port.port()));
    }

    #[test]
    fn prop_toggle_twice_restores(
        mut regs in registers_strategy(),
        port in port_strategy(),
        pin in pin_strategy(),
    ) {
        let before = regs.snapshot();
        regs.gpio().toggle(port, pin);
        regs.gpio().toggle(port, pin);
        prop_assert_eq!(regs.snapshot(), before);
    }

    #[test]
    fn prop_read_reflects_input(port in port_strategy(), pattern: u8) {
        let mut regs = MockRegisters::new();
        regs.drive_input(port, pattern);

        for pin in Pin::ALL {
            let expected = if pattern & (1 << pin.index()) != 0 {
                Level::High
            } else {
                Level::Low
            };
            prop_assert_eq!(regs.gpio().read(port, pin), expected);
        }
    }

    #[test]
    fn prop_unknown_port_is_inert(
        mut regs in registers_strategy(),
        code in 3u8..=u8::MAX,
        pin in 0u8..=7,
    ) {
        let before = regs.snapshot();
        {
            let mut gpio = regs.gpio();
            gpio.init_raw(code, pin, Direction::Output);
            gpio.write_raw(code, pin, Level::High);
            gpio.toggle_raw(code, pin);
            prop_assert_eq!(gpio.read_raw(code, pin), Level::Low);
        }
        prop_assert_eq!(regs.snapshot(), before);
    }

    #[test]
    fn prop_reset_is_complete(mut regs in registers_strategy()) {
        regs.reset();
        for reg in Register::ALL {
            prop_assert_eq!(regs.get(reg), 0);
        }
    }
}
