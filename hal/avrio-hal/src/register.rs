//! I/O register identifiers and byte access
//!
//! Every register the drivers (or their neighbours) touch is named by a
//! closed [`Register`] enum. A [`RegisterBlock`] is the context object that
//! gives byte access to them, so the same driver code runs against the
//! memory-mapped I/O space on the target and against plain storage on the
//! host.

/// Modeled 8-bit I/O registers
///
/// Discriminants are dense so implementations can use them as array indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    // GPIO
    Ddrb = 0,
    Portb = 1,
    Pinb = 2,
    Ddrc = 3,
    Portc = 4,
    Pinc = 5,
    Ddrd = 6,
    Portd = 7,
    Pind = 8,

    // Timer0
    Tccr0a = 9,
    Tccr0b = 10,
    Ocr0a = 11,
    Timsk0 = 12,
    Tcnt0 = 13,

    // External interrupts
    Eicra = 14,
    Eimsk = 15,
    Eifr = 16,

    // EEPROM
    Eearl = 17,
    Eearh = 18,
    Eedr = 19,
    Eecr = 20,

    // ADC
    Admux = 21,
    Adcsra = 22,
    Adcl = 23,
    Adch = 24,

    /// Status register (global interrupt flag lives in bit 7)
    Sreg = 25,
}

impl Register {
    /// Number of modeled registers
    pub const COUNT: usize = 26;

    /// Every modeled register, in index order
    pub const ALL: [Register; Register::COUNT] = [
        Register::Ddrb,
        Register::Portb,
        Register::Pinb,
        Register::Ddrc,
        Register::Portc,
        Register::Pinc,
        Register::Ddrd,
        Register::Portd,
        Register::Pind,
        Register::Tccr0a,
        Register::Tccr0b,
        Register::Ocr0a,
        Register::Timsk0,
        Register::Tcnt0,
        Register::Eicra,
        Register::Eimsk,
        Register::Eifr,
        Register::Eearl,
        Register::Eearh,
        Register::Eedr,
        Register::Eecr,
        Register::Admux,
        Register::Adcsra,
        Register::Adcl,
        Register::Adch,
        Register::Sreg,
    ];

    /// Dense index of this register (0..COUNT)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Datasheet name of the register
    pub const fn name(self) -> &'static str {
        match self {
            Register::Ddrb => "DDRB",
            Register::Portb => "PORTB",
            Register::Pinb => "PINB",
            Register::Ddrc => "DDRC",
            Register::Portc => "PORTC",
            Register::Pinc => "PINC",
            Register::Ddrd => "DDRD",
            Register::Portd => "PORTD",
            Register::Pind => "PIND",
            Register::Tccr0a => "TCCR0A",
            Register::Tccr0b => "TCCR0B",
            Register::Ocr0a => "OCR0A",
            Register::Timsk0 => "TIMSK0",
            Register::Tcnt0 => "TCNT0",
            Register::Eicra => "EICRA",
            Register::Eimsk => "EIMSK",
            Register::Eifr => "EIFR",
            Register::Eearl => "EEARL",
            Register::Eearh => "EEARH",
            Register::Eedr => "EEDR",
            Register::Eecr => "EECR",
            Register::Admux => "ADMUX",
            Register::Adcsra => "ADCSRA",
            Register::Adcl => "ADCL",
            Register::Adch => "ADCH",
            Register::Sreg => "SREG",
        }
    }
}

/// 16-bit registers formed by a low/high byte pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register16 {
    /// EEPROM address (EEARH:EEARL)
    Eear,
    /// ADC conversion result (ADCH:ADCL)
    Adc,
}

impl Register16 {
    /// Low byte register
    pub const fn low(self) -> Register {
        match self {
            Register16::Eear => Register::Eearl,
            Register16::Adc => Register::Adcl,
        }
    }

    /// High byte register
    pub const fn high(self) -> Register {
        match self {
            Register16::Eear => Register::Eearh,
            Register16::Adc => Register::Adch,
        }
    }
}

/// Bit positions within the modeled registers
pub mod bits {
    /// Global interrupt enable (SREG)
    pub const SREG_I: u8 = 7;

    // Timer0
    pub const WGM01: u8 = 1;
    pub const CS00: u8 = 0;
    pub const CS01: u8 = 1;
    pub const OCIE0A: u8 = 1;

    // External interrupts
    pub const ISC00: u8 = 0;
    pub const ISC01: u8 = 1;
    pub const ISC10: u8 = 2;
    pub const ISC11: u8 = 3;
    pub const INT0: u8 = 0;
    pub const INT1: u8 = 1;

    // EEPROM
    pub const EERE: u8 = 0;
    pub const EEPE: u8 = 1;
    pub const EEMPE: u8 = 2;
    pub const EERIE: u8 = 3;

    // ADC
    pub const REFS0: u8 = 6;
    pub const ADEN: u8 = 7;
    pub const ADSC: u8 = 6;
    pub const ADPS2: u8 = 2;
    pub const ADPS1: u8 = 1;
    pub const ADPS0: u8 = 0;
}

/// Byte access to the I/O register file
///
/// Implementations should perform exactly one access per call; drivers rely
/// on `read`/`write` mapping one-to-one onto hardware loads and stores.
pub trait RegisterBlock {
    /// Read a register byte
    fn read(&self, reg: Register) -> u8;

    /// Write a register byte
    fn write(&mut self, reg: Register, value: u8);

    /// Read-modify-write a register byte
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u8) -> u8,
        Self: Sized,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }

    /// Set the bits in `mask`, leaving the others untouched
    fn set_bits(&mut self, reg: Register, mask: u8) {
        let value = self.read(reg);
        self.write(reg, value | mask);
    }

    /// Clear the bits in `mask`, leaving the others untouched
    fn clear_bits(&mut self, reg: Register, mask: u8) {
        let value = self.read(reg);
        self.write(reg, value & !mask);
    }

    /// Check whether any bit in `mask` is set
    fn bits_set(&self, reg: Register, mask: u8) -> bool {
        self.read(reg) & mask != 0
    }

    /// Read a 16-bit register pair
    ///
    /// The low byte is read first; on the target this latches the high byte.
    fn read_wide(&self, reg: Register16) -> u16 {
        let low = self.read(reg.low());
        let high = self.read(reg.high());
        u16::from_le_bytes([low, high])
    }

    /// Write a 16-bit register pair
    ///
    /// The high byte is written first, matching the hardware's temp-register
    /// protocol.
    fn write_wide(&mut self, reg: Register16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write(reg.high(), high);
        self.write(reg.low(), low);
    }
}

impl<R: RegisterBlock + ?Sized> RegisterBlock for &mut R {
    fn read(&self, reg: Register) -> u8 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        (**self).write(reg, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal array-backed block for exercising the provided methods
    struct Bytes([u8; Register::COUNT]);

    impl RegisterBlock for Bytes {
        fn read(&self, reg: Register) -> u8 {
            self.0[reg.index()]
        }

        fn write(&mut self, reg: Register, value: u8) {
            self.0[reg.index()] = value;
        }
    }

    #[test]
    fn test_indices_are_dense() {
        for (i, reg) in Register::ALL.iter().enumerate() {
            assert_eq!(reg.index(), i);
        }
    }

    #[test]
    fn test_set_and_clear_bits() {
        let mut regs = Bytes([0; Register::COUNT]);

        regs.set_bits(Register::Portb, 0x21);
        assert_eq!(regs.read(Register::Portb), 0x21);
        assert!(regs.bits_set(Register::Portb, 0x01));

        regs.clear_bits(Register::Portb, 0x01);
        assert_eq!(regs.read(Register::Portb), 0x20);
        assert!(!regs.bits_set(Register::Portb, 0x01));

        // Neighbours untouched
        assert_eq!(regs.read(Register::Ddrb), 0);
        assert_eq!(regs.read(Register::Pinb), 0);
    }

    #[test]
    fn test_wide_access() {
        let mut regs = Bytes([0; Register::COUNT]);

        regs.write_wide(Register16::Eear, 0x01FF);
        assert_eq!(regs.read(Register::Eearl), 0xFF);
        assert_eq!(regs.read(Register::Eearh), 0x01);
        assert_eq!(regs.read_wide(Register16::Eear), 0x01FF);

        regs.write(Register::Adcl, 0x34);
        regs.write(Register::Adch, 0x02);
        assert_eq!(regs.read_wide(Register16::Adc), 0x0234);
    }

    #[test]
    fn test_modify_through_reference() {
        fn set_ctc_mode<R: RegisterBlock>(mut regs: R) {
            regs.modify(Register::Tccr0a, |v| v | (1 << bits::WGM01));
        }

        let mut regs = Bytes([0; Register::COUNT]);
        set_ctc_mode(&mut regs);
        assert_eq!(regs.read(Register::Tccr0a), 0x02);
    }
}
