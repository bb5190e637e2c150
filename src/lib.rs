//! # exec-timer
//!
//! Code execution time measurement for microcontrollers using a hardware timer.
//!
//! **Key features:**
//! - **1 us resolution** - Counter clocked at 1 MHz, one count per microsecond
//! - **Overhead compensation** - Cost of the start/stop sequence measured once and subtracted
//! - **Platform-agnostic** - Small `HwCounter` trait implemented on top of any HAL
//! - **Zero heap usage** - Fixed-size state, `heapless` buffers
//!
//! ## Usage
//!
//! 1. Configure a hardware timer for 1 MHz with a period of 65535.
//! 2. Implement [`HwCounter`] for it and call [`ExecutionTimer::init`] before the main loop.
//! 3. Put the code to measure between [`ExecutionTimer::start`] and [`ExecutionTimer::stop`].
//! 4. Read [`ExecutionTimer::measurement`] or [`ExecutionTimer::print`] it.
//!
//! The longest measurable block is 65 ms 535 us; longer blocks wrap.
//!
//! ## Optional Features
//!
//! - `history` - Ring buffer of recent measurements with min/max/average
//! - `defmt` - Log calibration and checked-path failures, `defmt::Format` derives
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

#[cfg(feature = "defmt")]
extern crate defmt;

// Logging macros must be declared before the modules that use them
#[macro_use]
mod log;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod counter;
pub mod io;

pub mod error;

pub mod measurement;

pub mod history;

pub mod timer;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Hardware and output abstractions
pub use counter::HwCounter;
pub use io::TextSink;

// Configuration
pub use config::{DefaultConfig, MinimalConfig, TimerConfig};

// Error types
pub use error::MeasureError;

// Results
pub use history::MeasurementHistory;
pub use measurement::Measurement;

// Timer
pub use timer::ExecutionTimer;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
