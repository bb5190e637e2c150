//! Configuration traits and implementations for the counter contract.
//!
//! The `TimerConfig` trait describes the counter the timer is bound to and
//! how calibration runs, without runtime overhead. The counter clock is not
//! configurable: it must tick at `TICK_HZ` (1 MHz), so one count is one
//! microsecond everywhere in the crate.

/// Required counter input frequency in Hz.
pub const TICK_HZ: u32 = 1_000_000;

/// Timer configuration trait.
///
/// All values are const (zero runtime cost).
pub trait TimerConfig {
    /// Largest value the counter reaches before wrapping (default: 65535)
    const MAX_COUNT: u16;

    /// Start/stop cycles run during calibration; the smallest reading wins (default: 1)
    const CALIBRATION_ROUNDS: u8;

    /// Longest measurable workload in microseconds.
    fn max_duration_us() -> u32 {
        Self::MAX_COUNT as u32
    }
}

/// Default configuration matching a 16-bit timer at 1 MHz.
///
/// - MAX_COUNT: 65535 (65 ms 535 us window)
/// - CALIBRATION_ROUNDS: 1 (single start/stop cycle)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl TimerConfig for DefaultConfig {
    const MAX_COUNT: u16 = u16::MAX;
    const CALIBRATION_ROUNDS: u8 = 1;
}

/// Configuration for targets where the calibration cycle is noisy
/// (instruction cache, flash wait states).
///
/// - MAX_COUNT: 65535
/// - CALIBRATION_ROUNDS: 4 (minimum of four cycles)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinimalConfig;

impl TimerConfig for MinimalConfig {
    const MAX_COUNT: u16 = u16::MAX;
    const CALIBRATION_ROUNDS: u8 = 4;
}
