//! Error types for checked measurements.
//!
//! The default `stop()` path never reports errors. `stop_checked()` surfaces
//! the known limitations of the counter as `MeasureError` values instead.

use core::fmt;

/// Measurement error type.
///
/// Each variant is a situation where the default path still produces a
/// number, but that number does not describe the measured block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasureError {
    /// `stop` called without a preceding `start`
    NotRunning,

    /// Counter wrapped past its period while running (workload longer than 65 ms 535 us)
    Overflow {
        /// Raw counter value read after the wrap
        raw: u16,
    },

    /// Raw reading smaller than the calibrated overhead
    Underflow {
        /// Raw counter value
        raw: u16,
        /// Calibrated overhead in microseconds
        overhead: u8,
    },
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::NotRunning => write!(f, "Timer not running"),
            MeasureError::Overflow { raw } => {
                write!(f, "Counter overflowed (raw {})", raw)
            }
            MeasureError::Underflow { raw, overhead } => {
                write!(
                    f,
                    "Reading {} us below overhead {} us",
                    raw, overhead
                )
            }
        }
    }
}
