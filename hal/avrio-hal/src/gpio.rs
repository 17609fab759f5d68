//! GPIO pin abstractions
//!
//! Provides the logic-level and direction types shared by every layer, plus
//! traits for single-pin handles handed out by the GPIO driver.

use core::ops::Not;

/// Logic level of a pin, used both as a write intent and as a read result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0 (the power-on state of every latch)
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is logic 1
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Check if this is logic 0
    pub const fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Data direction of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Pin is sampled into the input register (DDR bit clear)
    #[default]
    Input,
    /// Pin is driven from the output latch (DDR bit set)
    Output,
}

/// Digital output pin
///
/// Implementations drive the output latch only; they never change the
/// pin's direction.
pub trait OutputPin {
    /// Set the output latch high (logic 1)
    fn set_high(&mut self);

    /// Set the output latch low (logic 0)
    fn set_low(&mut self);

    /// Invert the output latch
    fn toggle(&mut self);

    /// Set the output latch to a specific level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Check if the output latch is currently high
    fn is_set_high(&self) -> bool;

    /// Check if the output latch is currently low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the sampled input reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the sampled input reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Sampled input as a [`Level`]
    fn level(&self) -> Level {
        Level::from(self.is_high())
    }
}

/// Pin whose data direction can be switched at runtime
pub trait ConfigurablePin {
    /// Configure the pin as input or output
    fn set_direction(&mut self, direction: Direction);

    /// Current data direction
    fn direction(&self) -> Direction;
}

/// Pin that can be used for both input and output
///
/// AVR pins always have both an output latch and an input sampler, so a
/// single handle can implement everything.
pub trait IoPin: OutputPin + InputPin + ConfigurablePin {}

// Blanket implementation for types that implement all three traits
impl<T: OutputPin + InputPin + ConfigurablePin> IoPin for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_conversions() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(!bool::from(Level::Low));
    }

    #[test]
    fn test_level_not() {
        assert_eq!(!Level::High, Level::Low);
        assert_eq!(!Level::Low, Level::High);
        assert_eq!(!!Level::High, Level::High);
    }

    #[test]
    fn test_power_on_defaults() {
        assert_eq!(Level::default(), Level::Low);
        assert_eq!(Direction::default(), Direction::Input);
    }
}
