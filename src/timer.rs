//! Execution timer: calibrate once, then bracket code with `start()`/`stop()`.
//!
//! The counter runs at 1 MHz, so one count is one microsecond. `stop()`
//! subtracts the overhead of the start/stop sequence itself (measured once at
//! `init()`) and splits the result into milliseconds and microseconds.
//!
//! ## Known limitations
//!
//! - Workloads longer than 65 ms 535 us wrap the 16-bit counter silently.
//! - A reading smaller than the overhead wraps around (raw 3, overhead 5
//!   reads as 65 ms 534 us).
//! - Interrupts taken inside the measured block are included.
//!
//! `stop_checked()` reports these cases as `MeasureError` while keeping the
//! same register sequence as `stop()`.

use core::fmt;
use core::fmt::Write as _;
use core::marker::PhantomData;

use crate::config::{DefaultConfig, TimerConfig};
use crate::counter::HwCounter;
use crate::error::MeasureError;
use crate::io::TextSink;
use crate::measurement::Measurement;

/// Capacity of the `print()` line buffer.
///
/// Longest line: "Execution Time = 65535 ms, 999 us\r\n" (35 chars).
const PRINT_BUFFER: usize = 40;

/// Measures execution time of code blocks with a bound hardware counter.
///
/// Generic over:
/// - `T`: Counter implementation (owned, or `&mut` to a counter owned elsewhere)
/// - `C`: Configuration (calibration rounds, counter range)
pub struct ExecutionTimer<T: HwCounter, C: TimerConfig = DefaultConfig> {
    /// Last measured sub-millisecond remainder
    counter_us: u16,

    /// Last measured whole milliseconds
    counter_ms: u16,

    /// Start/stop call overhead captured at calibration
    overhead_us: u8,

    /// Last raw counter reading, before overhead correction
    raw: u16,

    /// Between `start()` and `stop()`
    running: bool,

    counter: T,

    _config: PhantomData<C>,
}

impl<T: HwCounter, C: TimerConfig> fmt::Debug for ExecutionTimer<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionTimer")
            .field("counter_ms", &self.counter_ms)
            .field("counter_us", &self.counter_us)
            .field("overhead_us", &self.overhead_us)
            .field("raw", &self.raw)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl<T: HwCounter, C: TimerConfig> ExecutionTimer<T, C> {
    /// Bind the timer to a counter and measure the start/stop overhead.
    ///
    /// The counter must already tick at 1 MHz with a period of 65535.
    pub fn init(counter: T) -> Self {
        let mut timer = Self {
            counter_us: 0,
            counter_ms: 0,
            overhead_us: 0,
            raw: 0,
            running: false,
            counter,
            _config: PhantomData,
        };
        timer.calibrate();
        timer
    }

    /// Reset the counter and start counting.
    ///
    /// Not reentrant: calling `start()` again restarts the same counter.
    #[inline(always)]
    pub fn start(&mut self) {
        self.counter.clear_overflow();
        self.counter.set_count(0);
        self.running = true;
        self.counter.enable();
    }

    /// Stop counting and store the corrected measurement.
    ///
    /// Never fails. Misuse (no `start()`, overflow, reading below overhead)
    /// yields a meaningless value rather than an error.
    #[inline(always)]
    pub fn stop(&mut self) -> Measurement {
        self.counter.disable();
        self.running = false;
        let raw = self.counter.read_count();
        self.store(raw)
    }

    /// Stop counting and report known limitations as errors.
    ///
    /// Stored state is updated exactly as `stop()` would, so `measurement()`
    /// returns the best-effort value even when this returns `Err`.
    pub fn stop_checked(&mut self) -> Result<Measurement, MeasureError> {
        self.counter.disable();
        let was_running = core::mem::replace(&mut self.running, false);
        let raw = self.counter.read_count();
        let overflowed = self.counter.overflowed();
        let measurement = self.store(raw);

        if !was_running {
            warn!("stop without start");
            return Err(MeasureError::NotRunning);
        }

        if overflowed {
            warn!(
                "counter overflowed, workload exceeds {} us",
                C::max_duration_us()
            );
            return Err(MeasureError::Overflow { raw });
        }

        if raw < self.overhead_us as u16 {
            warn!("reading {} below overhead {}", raw, self.overhead_us);
            return Err(MeasureError::Underflow {
                raw,
                overhead: self.overhead_us,
            });
        }

        trace!("measured {} ms {} us", measurement.ms(), measurement.us());
        Ok(measurement)
    }

    /// Run `f` between `start()` and `stop()`.
    pub fn measure<R>(&mut self, f: impl FnOnce() -> R) -> (R, Measurement) {
        self.start();
        let result = f();
        let measurement = self.stop();
        (result, measurement)
    }

    /// Write the last result as `Execution Time = <ms> ms, <us> us\r\n`.
    pub fn print<S: TextSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        let mut line: heapless::String<PRINT_BUFFER> = heapless::String::new();
        // Cannot fail: u16 fields never exceed PRINT_BUFFER
        let _ = write!(
            line,
            "Execution Time = {} ms, {} us\r\n",
            self.counter_ms, self.counter_us
        );
        sink.write_str(&line)
    }

    /// Reset the stored result to zero.
    pub fn clear(&mut self) {
        self.counter_ms = 0;
        self.counter_us = 0;
    }

    /// Measure the start/stop overhead again (e.g. after changing clocks).
    ///
    /// Also clears the stored result, as `init()` does.
    pub fn recalibrate(&mut self) {
        self.calibrate();
    }

    /// Last stored result.
    pub fn measurement(&self) -> Measurement {
        Measurement::from_parts(self.counter_ms, self.counter_us)
    }

    /// Whole milliseconds of the last result.
    pub fn ms(&self) -> u16 {
        self.counter_ms
    }

    /// Sub-millisecond remainder of the last result.
    pub fn us(&self) -> u16 {
        self.counter_us
    }

    /// Calibrated overhead in microseconds.
    pub fn overhead_us(&self) -> u8 {
        self.overhead_us
    }

    /// Last raw counter reading (before overhead correction).
    pub fn raw_count(&self) -> u16 {
        self.raw
    }

    /// True between `start()` and `stop()`.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Longest workload the bound counter can measure, in microseconds.
    pub fn max_duration_us(&self) -> u32 {
        C::max_duration_us()
    }

    /// Access the bound counter.
    pub fn counter_mut(&mut self) -> &mut T {
        &mut self.counter
    }

    /// Unbind and return the counter.
    pub fn release(self) -> T {
        self.counter
    }

    fn calibrate(&mut self) {
        self.clear();

        let mut best = u16::MAX;
        for _ in 0..C::CALIBRATION_ROUNDS.max(1) {
            self.start();
            self.counter.disable();
            best = best.min(self.counter.read_count());
        }
        self.running = false;

        // Field is 8 bits wide; larger readings are truncated
        self.overhead_us = best as u8;
        debug!("calibrated overhead {} us", self.overhead_us);
    }

    #[inline(always)]
    fn store(&mut self, raw: u16) -> Measurement {
        self.raw = raw;
        let measurement = Measurement::from_micros(raw.wrapping_sub(self.overhead_us as u16));
        self.counter_ms = measurement.ms();
        self.counter_us = measurement.us();
        measurement
    }
}
