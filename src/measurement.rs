//! Measured duration split into milliseconds and microseconds.

use core::fmt;

/// Elapsed time of one measured block.
///
/// The microsecond part is always below 1000; construction goes through
/// `from_micros()` or `from_parts()`, which normalize. `Default` is the zero
/// measurement reported before the first `stop()`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    ms: u16,
    us: u16,
}

impl Measurement {
    /// Zero duration.
    pub const ZERO: Self = Self { ms: 0, us: 0 };

    /// Decompose a corrected counter value (microseconds at 1 MHz).
    pub const fn from_micros(micros: u16) -> Self {
        Self {
            ms: micros / 1000,
            us: micros % 1000,
        }
    }

    /// Build from milliseconds and microseconds, carrying whole
    /// milliseconds out of `us` (`from_parts(0, 5000)` is 5 ms 0 us).
    pub const fn from_parts(ms: u16, us: u16) -> Self {
        Self {
            ms: ms.wrapping_add(us / 1000),
            us: us % 1000,
        }
    }

    /// Whole milliseconds.
    pub const fn ms(&self) -> u16 {
        self.ms
    }

    /// Remaining microseconds (0..=999).
    pub const fn us(&self) -> u16 {
        self.us
    }

    /// Total duration in microseconds.
    pub const fn total_us(&self) -> u32 {
        self.ms as u32 * 1000 + self.us as u32
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms, {} us", self.ms, self.us)
    }
}
