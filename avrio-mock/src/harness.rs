//! Minimal suite runner for register-level driver checks
//!
//! Every case gets a freshly reset [`MockRegisters`]; that reset is the only
//! isolation between cases. A failed [`check_eq!`](crate::check_eq) ends
//! that case early and the suite moves on to the next one.
//!
//! Output looks like:
//!
//! ```text
//! Running test_gpio_init_output... PASSED
//! Running test_gpio_write_high... FAILED
//!   tests/gpio.rs:42: Expected 0x20, got 0x00
//! ```

use std::fmt;
use std::io::{self, Write};

use avrio_core::{Direction, Level};

use crate::registers::MockRegisters;

/// Outcome of one test case
pub type TestResult = Result<(), Failure>;

/// A failed equality check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    pub file: &'static str,
    pub line: u32,
    pub expected: u64,
    pub actual: u64,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: Expected 0x{:02X}, got 0x{:02X}",
            self.file, self.line, self.expected, self.actual
        )
    }
}

/// Values that can be compared and reported as hex
pub trait HexValue {
    fn to_hex(&self) -> u64;
}

macro_rules! hex_value_int {
    ($($t:ty),*) => {
        $(impl HexValue for $t {
            fn to_hex(&self) -> u64 {
                *self as u64
            }
        })*
    };
}

hex_value_int!(u8, u16, u32, u64, usize);

impl HexValue for bool {
    fn to_hex(&self) -> u64 {
        *self as u64
    }
}

impl HexValue for Level {
    fn to_hex(&self) -> u64 {
        self.is_high() as u64
    }
}

impl HexValue for Direction {
    fn to_hex(&self) -> u64 {
        match self {
            Direction::Input => 0,
            Direction::Output => 1,
        }
    }
}

/// Compare two values and fail the current case on mismatch
///
/// Must be used inside a function returning [`TestResult`].
#[macro_export]
macro_rules! check_eq {
    ($expected:expr, $actual:expr $(,)?) => {{
        let expected = $crate::harness::HexValue::to_hex(&$expected);
        let actual = $crate::harness::HexValue::to_hex(&$actual);
        if expected != actual {
            return Err($crate::harness::Failure {
                file: file!(),
                line: line!(),
                expected,
                actual,
            });
        }
    }};
}

/// Run a test function by name: `run_test!(suite, test_fn)`
#[macro_export]
macro_rules! run_test {
    ($suite:expr, $test:path) => {
        $suite.run(stringify!($test), $test)
    };
}

/// Counts after a suite run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub run: usize,
    pub failed: usize,
}

impl Summary {
    /// Check that no case failed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Sequential suite runner
pub struct Suite<W> {
    out: W,
    regs: MockRegisters,
    summary: Summary,
}

impl Suite<io::Stdout> {
    /// Suite reporting to stdout
    pub fn stdout(title: &str) -> io::Result<Self> {
        Self::new(io::stdout(), title)
    }
}

impl<W: Write> Suite<W> {
    /// Create a suite and print its title
    pub fn new(mut out: W, title: &str) -> io::Result<Self> {
        writeln!(out, "--- {} ---", title)?;
        Ok(Self {
            out,
            regs: MockRegisters::new(),
            summary: Summary::default(),
        })
    }

    /// Reset the registers and run one case
    pub fn run<F>(&mut self, name: &str, test: F) -> io::Result<()>
    where
        F: FnOnce(&mut MockRegisters) -> TestResult,
    {
        write!(self.out, "Running {}... ", name)?;
        self.regs.reset();
        let result = test(&mut self.regs);
        self.summary.run += 1;

        match result {
            Ok(()) => writeln!(self.out, "PASSED"),
            Err(failure) => {
                self.summary.failed += 1;
                writeln!(self.out, "FAILED")?;
                writeln!(self.out, "  {}", failure)
            }
        }
    }

    /// Counts so far
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Print the totals and return them with the output sink
    pub fn finish(mut self) -> io::Result<(Summary, W)> {
        writeln!(
            self.out,
            "{} run, {} passed, {} failed",
            self.summary.run,
            self.summary.run - self.summary.failed,
            self.summary.failed
        )?;
        Ok((self.summary, self.out))
    }
}
