//! Mock register file

use std::fmt;

use avrio_core::{Gpio, Port};
use avrio_hal::{Register, RegisterBlock};

/// Copy of every modeled register byte, for whole-state comparisons
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Snapshot([u8; Register::COUNT]);

impl Snapshot {
    /// Byte recorded for `reg`
    pub fn get(&self, reg: Register) -> u8 {
        self.0[reg.index()]
    }

    /// Registers whose value differs between two snapshots
    pub fn diff<'a>(&'a self, other: &'a Snapshot) -> impl Iterator<Item = Register> + 'a {
        Register::ALL
            .into_iter()
            .filter(move |reg| self.get(*reg) != other.get(*reg))
    }

    /// Check that every byte is zero
    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for reg in Register::ALL {
            map.entry(&reg.name(), &format_args!("0x{:02X}", self.get(reg)));
        }
        map.finish()
    }
}

/// Host-resident register file
///
/// Starts zeroed, like the hardware after reset. Test code stages inputs by
/// writing `PINx` directly and asserts on `DDRx`/`PORTx` afterwards.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct MockRegisters {
    bytes: [u8; Register::COUNT],
}

impl MockRegisters {
    /// Create a zeroed register file
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every modeled register
    ///
    /// Covers the GPIO triads of all ports plus the timer, external
    /// interrupt, EEPROM, ADC and status registers. After this no earlier
    /// mutation is observable.
    pub fn reset(&mut self) {
        self.bytes = [0; Register::COUNT];
    }

    /// Read a register byte
    pub fn get(&self, reg: Register) -> u8 {
        self.bytes[reg.index()]
    }

    /// Write a register byte
    pub fn set(&mut self, reg: Register, value: u8) {
        self.bytes[reg.index()] = value;
    }

    /// Direction register of `port`
    pub fn ddr(&self, port: Port) -> u8 {
        self.get(port.ddr())
    }

    /// Output latch of `port`
    pub fn port(&self, port: Port) -> u8 {
        self.get(port.port())
    }

    /// Input register of `port`
    pub fn pin(&self, port: Port) -> u8 {
        self.get(port.pin())
    }

    /// Simulate an external signal by setting the whole input register
    pub fn drive_input(&mut self, port: Port, value: u8) {
        self.set(port.pin(), value);
    }

    /// Copy all register bytes
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.bytes)
    }

    /// GPIO driver borrowing this register file
    pub fn gpio(&mut self) -> Gpio<&mut Self> {
        Gpio::new(self)
    }
}

impl RegisterBlock for MockRegisters {
    fn read(&self, reg: Register) -> u8 {
        self.get(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.set(reg, value);
    }
}

impl fmt::Debug for MockRegisters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MockRegisters")
            .field(&self.snapshot())
            .finish()
    }
}
