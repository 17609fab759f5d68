//! Port and pin model
//!
//! A [`Port`] owns three registers: direction (`DDRx`), output latch
//! (`PORTx`) and input sampler (`PINx`). A [`Pin`] selects one bit in each.

use core::fmt;

use avrio_hal::Register;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors from converting raw selectors or parsing pin strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Raw port code does not name a modeled port
    UnknownPort(u8),
    /// Pin index outside 0-7
    InvalidPin(u8),
    /// Pin string is not of the form `PB5` / `!PD2`
    InvalidPinString,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::UnknownPort(code) => write!(f, "unknown port code {}", code),
            GpioError::InvalidPin(pin) => write!(f, "pin index {} out of range 0-7", pin),
            GpioError::InvalidPinString => f.write_str("invalid pin string"),
        }
    }
}

/// GPIO port
///
/// Closed set; the discriminant is the raw port code used by
/// [`raw`](crate::raw) entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Port {
    B = 0,
    C = 1,
    D = 2,
}

impl Port {
    /// Every port, in raw-code order
    pub const ALL: [Port; 3] = [Port::B, Port::C, Port::D];

    /// Data direction register (bit set = output)
    pub const fn ddr(self) -> Register {
        match self {
            Port::B => Register::Ddrb,
            Port::C => Register::Ddrc,
            Port::D => Register::Ddrd,
        }
    }

    /// Output latch register
    pub const fn port(self) -> Register {
        match self {
            Port::B => Register::Portb,
            Port::C => Register::Portc,
            Port::D => Register::Portd,
        }
    }

    /// Input sampler register
    pub const fn pin(self) -> Register {
        match self {
            Port::B => Register::Pinb,
            Port::C => Register::Pinc,
            Port::D => Register::Pind,
        }
    }

    /// Port letter as printed on the datasheet
    pub const fn letter(self) -> char {
        match self {
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'B' => Some(Port::B),
            'C' => Some(Port::C),
            'D' => Some(Port::D),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Port {
    type Error = GpioError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Port::B),
            1 => Ok(Port::C),
            2 => Ok(Port::D),
            _ => Err(GpioError::UnknownPort(code)),
        }
    }
}

/// Pin index within a port (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Pin(u8);

impl Pin {
    pub const P0: Pin = Pin(0);
    pub const P1: Pin = Pin(1);
    pub const P2: Pin = Pin(2);
    pub const P3: Pin = Pin(3);
    pub const P4: Pin = Pin(4);
    pub const P5: Pin = Pin(5);
    pub const P6: Pin = Pin(6);
    pub const P7: Pin = Pin(7);

    /// Highest valid pin index
    pub const MAX: u8 = 7;

    /// Every pin, in index order
    pub const ALL: [Pin; 8] = [
        Pin::P0,
        Pin::P1,
        Pin::P2,
        Pin::P3,
        Pin::P4,
        Pin::P5,
        Pin::P6,
        Pin::P7,
    ];

    /// Create a pin index, or `None` if out of range
    pub const fn new(index: u8) -> Option<Self> {
        if index <= Self::MAX {
            Some(Pin(index))
        } else {
            None
        }
    }

    /// Bit index within the port registers
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Single-bit mask for this pin
    pub const fn mask(self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<u8> for Pin {
    type Error = GpioError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Pin::new(index).ok_or(GpioError::InvalidPin(index))
    }
}

impl From<Pin> for u8 {
    fn from(pin: Pin) -> u8 {
        pin.0
    }
}

/// A board pin reference, as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinId {
    pub port: Port,
    pub pin: Pin,
    /// Pin is active-low
    pub inverted: bool,
}

impl PinId {
    /// Create a non-inverted pin reference
    pub const fn new(port: Port, pin: Pin) -> Self {
        Self {
            port,
            pin,
            inverted: false,
        }
    }

    /// Parse a pin string
    ///
    /// Supports formats:
    /// - "PB5" -> (Port B, Pin 5, not inverted)
    /// - "!PD2" -> (Port D, Pin 2, inverted/active-low)
    ///
    /// Surrounding whitespace is ignored; the port letter is case-insensitive.
    pub fn parse(s: &str) -> Result<Self, GpioError> {
        let s = s.trim();

        let (s, inverted) = match s.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let rest = s
            .strip_prefix('P')
            .or_else(|| s.strip_prefix('p'))
            .ok_or(GpioError::InvalidPinString)?;

        let mut chars = rest.chars();
        let port = chars
            .next()
            .and_then(Port::from_letter)
            .ok_or(GpioError::InvalidPinString)?;

        // Exactly one decimal digit: no sign, no padding
        let index = match chars.as_str().as_bytes() {
            [digit] if digit.is_ascii_digit() => digit - b'0',
            _ => return Err(GpioError::InvalidPinString),
        };
        let pin = Pin::try_from(index)?;

        Ok(Self {
            port,
            pin,
            inverted,
        })
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            f.write_str("!")?;
        }
        write!(f, "P{}{}", self.port.letter(), self.pin.index())
    }
}
