//! ATmega328P data-space addresses
//!
//! These are memory addresses (I/O address + 0x20), as used with `ld`/`st`,
//! not the `in`/`out` I/O addresses.

use avrio_hal::Register;

pub const PINB: usize = 0x23;
pub const DDRB: usize = 0x24;
pub const PORTB: usize = 0x25;
pub const PINC: usize = 0x26;
pub const DDRC: usize = 0x27;
pub const PORTC: usize = 0x28;
pub const PIND: usize = 0x29;
pub const DDRD: usize = 0x2A;
pub const PORTD: usize = 0x2B;

pub const EIFR: usize = 0x3C;
pub const EIMSK: usize = 0x3D;
pub const EECR: usize = 0x3F;
pub const EEDR: usize = 0x40;
pub const EEARL: usize = 0x41;
pub const EEARH: usize = 0x42;

pub const TCCR0A: usize = 0x44;
pub const TCCR0B: usize = 0x45;
pub const TCNT0: usize = 0x46;
pub const OCR0A: usize = 0x47;

pub const SREG: usize = 0x5F;

pub const EICRA: usize = 0x69;
pub const TIMSK0: usize = 0x6E;

pub const ADCL: usize = 0x78;
pub const ADCH: usize = 0x79;
pub const ADCSRA: usize = 0x7A;
pub const ADMUX: usize = 0x7C;

/// Data-space address of a modeled register
pub const fn of(reg: Register) -> usize {
    match reg {
        Register::Ddrb => DDRB,
        Register::Portb => PORTB,
        Register::Pinb => PINB,
        Register::Ddrc => DDRC,
        Register::Portc => PORTC,
        Register::Pinc => PINC,
        Register::Ddrd => DDRD,
        Register::Portd => PORTD,
        Register::Pind => PIND,
        Register::Tccr0a => TCCR0A,
        Register::Tccr0b => TCCR0B,
        Register::Ocr0a => OCR0A,
        Register::Timsk0 => TIMSK0,
        Register::Tcnt0 => TCNT0,
        Register::Eicra => EICRA,
        Register::Eimsk => EIMSK,
        Register::Eifr => EIFR,
        Register::Eearl => EEARL,
        Register::Eearh => EEARH,
        Register::Eedr => EEDR,
        Register::Eecr => EECR,
        Register::Admux => ADMUX,
        Register::Adcsra => ADCSRA,
        Register::Adcl => ADCL,
        Register::Adch => ADCH,
        Register::Sreg => SREG,
    }
}
