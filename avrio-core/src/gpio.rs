//! GPIO driver
//!
//! Every operation is a single masked set, clear or read on one register
//! byte of one port. The driver holds no state of its own besides the
//! register context, so calls are idempotent (apart from `toggle`) and the
//! register file is always the source of truth.

use core::convert::Infallible;

use avrio_hal::{ConfigurablePin, Direction, InputPin, Level, OutputPin, RegisterBlock};

use crate::port::{Pin, Port};

/// GPIO driver over a register context
///
/// `R` is either an owned register block or `&mut` to one, so tests can
/// keep the mock and inspect it after each driver call.
pub struct Gpio<R> {
    regs: R,
}

impl<R: RegisterBlock> Gpio<R> {
    /// Create a driver over the given registers
    ///
    /// Does not touch any register.
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Configure a pin's data direction
    ///
    /// Sets the `DDRx` bit for `Output`, clears it for `Input`. No other
    /// bit or register changes.
    pub fn init(&mut self, port: Port, pin: Pin, direction: Direction) {
        match direction {
            Direction::Output => self.regs.set_bits(port.ddr(), pin.mask()),
            Direction::Input => self.regs.clear_bits(port.ddr(), pin.mask()),
        }
    }

    /// Drive a pin's output latch
    ///
    /// Direction is neither checked nor changed: on an input pin the latch
    /// still stores the value (and on AVR selects the pull-up).
    pub fn write(&mut self, port: Port, pin: Pin, level: Level) {
        match level {
            Level::High => self.regs.set_bits(port.port(), pin.mask()),
            Level::Low => self.regs.clear_bits(port.port(), pin.mask()),
        }
    }

    /// Sample a pin's input register
    pub fn read(&self, port: Port, pin: Pin) -> Level {
        Level::from(self.regs.bits_set(port.pin(), pin.mask()))
    }

    /// Invert a pin's output latch
    pub fn toggle(&mut self, port: Port, pin: Pin) {
        self.regs.modify(port.port(), |latch| latch ^ pin.mask());
    }

    /// Current data direction of a pin, from `DDRx`
    pub fn direction(&self, port: Port, pin: Pin) -> Direction {
        if self.regs.bits_set(port.ddr(), pin.mask()) {
            Direction::Output
        } else {
            Direction::Input
        }
    }

    /// Current output latch of a pin, from `PORTx`
    pub fn output_level(&self, port: Port, pin: Pin) -> Level {
        Level::from(self.regs.bits_set(port.port(), pin.mask()))
    }

    /// Borrow a single-pin handle
    pub fn pin(&mut self, port: Port, pin: Pin) -> GpioPin<'_, R> {
        GpioPin {
            gpio: self,
            port,
            pin,
        }
    }

    /// Shared access to the register context
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Exclusive access to the register context
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Give back the register context
    pub fn release(self) -> R {
        self.regs
    }
}

/// A single pin borrowed from a [`Gpio`] driver
pub struct GpioPin<'a, R> {
    gpio: &'a mut Gpio<R>,
    port: Port,
    pin: Pin,
}

impl<R: RegisterBlock> GpioPin<'_, R> {
    /// Port this handle refers to
    pub fn port(&self) -> Port {
        self.port
    }

    /// Pin index this handle refers to
    pub fn index(&self) -> Pin {
        self.pin
    }
}

impl<R: RegisterBlock> OutputPin for GpioPin<'_, R> {
    fn set_high(&mut self) {
        self.gpio.write(self.port, self.pin, Level::High);
    }

    fn set_low(&mut self) {
        self.gpio.write(self.port, self.pin, Level::Low);
    }

    fn toggle(&mut self) {
        self.gpio.toggle(self.port, self.pin);
    }

    fn is_set_high(&self) -> bool {
        self.gpio.output_level(self.port, self.pin).is_high()
    }
}

impl<R: RegisterBlock> InputPin for GpioPin<'_, R> {
    fn is_high(&self) -> bool {
        self.gpio.read(self.port, self.pin).is_high()
    }
}

impl<R: RegisterBlock> ConfigurablePin for GpioPin<'_, R> {
    fn set_direction(&mut self, direction: Direction) {
        self.gpio.init(self.port, self.pin, direction);
    }

    fn direction(&self) -> Direction {
        self.gpio.direction(self.port, self.pin)
    }
}

// embedded-hal 1.0 digital traits, for drivers written against the
// ecosystem interfaces. Register access cannot fail.

impl<R: RegisterBlock> embedded_hal::digital::ErrorType for GpioPin<'_, R> {
    type Error = Infallible;
}

impl<R: RegisterBlock> embedded_hal::digital::OutputPin for GpioPin<'_, R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.gpio.write(self.port, self.pin, Level::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.gpio.write(self.port, self.pin, Level::High);
        Ok(())
    }
}

impl<R: RegisterBlock> embedded_hal::digital::StatefulOutputPin for GpioPin<'_, R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.output_level(self.port, self.pin).is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.output_level(self.port, self.pin).is_low())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.gpio.toggle(self.port, self.pin);
        Ok(())
    }
}

impl<R: RegisterBlock> embedded_hal::digital::InputPin for GpioPin<'_, R> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.read(self.port, self.pin).is_high())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.read(self.port, self.pin).is_low())
    }
}
