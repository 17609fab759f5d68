//! Raw-code entry points
//!
//! Firmware ported from C often passes ports and pins around as bare
//! integers. These methods accept such codes and fail safe: an unknown port
//! or out-of-range pin never reaches a register. Writes become no-ops and
//! reads report [`Level::Low`].
//!
//! Raw port codes: `0` = B, `1` = C, `2` = D.

use avrio_hal::{Direction, Level, RegisterBlock};

use crate::gpio::Gpio;
use crate::port::{GpioError, Pin, Port};

fn resolve(port: u8, pin: u8) -> Option<(Port, Pin)> {
    let resolved = Port::try_from(port).and_then(|port| Ok((port, Pin::try_from(pin)?)));
    match resolved {
        Ok(selector) => Some(selector),
        Err(err) => {
            reject(err);
            None
        }
    }
}

fn reject(err: GpioError) {
    warn!("gpio: ignoring selector: {}", err);
}

impl<R: RegisterBlock> Gpio<R> {
    /// [`init`](Gpio::init) with raw port/pin codes
    pub fn init_raw(&mut self, port: u8, pin: u8, direction: Direction) {
        if let Some((port, pin)) = resolve(port, pin) {
            self.init(port, pin, direction);
        }
    }

    /// [`write`](Gpio::write) with raw port/pin codes
    pub fn write_raw(&mut self, port: u8, pin: u8, level: Level) {
        if let Some((port, pin)) = resolve(port, pin) {
            self.write(port, pin, level);
        }
    }

    /// [`read`](Gpio::read) with raw port/pin codes
    ///
    /// Returns `Low` for any selector that does not name a real pin.
    pub fn read_raw(&self, port: u8, pin: u8) -> Level {
        match resolve(port, pin) {
            Some((port, pin)) => self.read(port, pin),
            None => Level::Low,
        }
    }

    /// [`toggle`](Gpio::toggle) with raw port/pin codes
    pub fn toggle_raw(&mut self, port: u8, pin: u8) {
        if let Some((port, pin)) = resolve(port, pin) {
            self.toggle(port, pin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avrio_hal::Register;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Regs([u8; Register::COUNT]);

    impl RegisterBlock for Regs {
        fn read(&self, reg: Register) -> u8 {
            self.0[reg.index()]
        }

        fn write(&mut self, reg: Register, value: u8) {
            self.0[reg.index()] = value;
        }
    }

    #[test]
    fn test_valid_codes_reach_driver() {
        let mut gpio = Gpio::new(Regs([0; Register::COUNT]));

        gpio.init_raw(0, 5, Direction::Output);
        gpio.write_raw(1, 2, Level::High);
        gpio.toggle_raw(2, 7);

        let regs = gpio.registers();
        assert_eq!(regs.read(Register::Ddrb), 0x20);
        assert_eq!(regs.read(Register::Portc), 0x04);
        assert_eq!(regs.read(Register::Portd), 0x80);
    }

    #[test]
    fn test_unknown_port_is_noop() {
        let mut regs = Regs([0; Register::COUNT]);
        for port in Port::ALL {
            regs.write(port.pin(), 0xFF);
        }
        let before = regs.clone();
        let mut gpio = Gpio::new(regs);

        for code in [3u8, 4, 0x7F, 0xFF] {
            gpio.init_raw(code, 3, Direction::Output);
            gpio.write_raw(code, 3, Level::High);
            gpio.toggle_raw(code, 3);
            assert_eq!(gpio.read_raw(code, 3), Level::Low);
        }

        assert_eq!(gpio.registers(), &before);
    }

    #[test]
    fn test_out_of_range_pin_is_noop() {
        let mut regs = Regs([0; Register::COUNT]);
        regs.write(Register::Pinb, 0xFF);
        let before = regs.clone();
        let mut gpio = Gpio::new(regs);

        gpio.init_raw(0, 8, Direction::Output);
        gpio.write_raw(0, 9, Level::High);
        gpio.toggle_raw(0, 200);
        assert_eq!(gpio.read_raw(0, 8), Level::Low);

        assert_eq!(gpio.registers(), &before);
    }

    #[test]
    fn test_read_raw_valid() {
        let mut regs = Regs([0; Register::COUNT]);
        regs.write(Register::Pinb, 0x08);
        let gpio = Gpio::new(regs);

        assert_eq!(gpio.read_raw(0, 3), Level::High);
        assert_eq!(gpio.read_raw(0, 2), Level::Low);
    }
}
