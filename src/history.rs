//! Recent measurement history with min/max/average.
//!
//! Uses stub type pattern - struct always exists, but behavior is feature-gated.

#![cfg_attr(not(feature = "history"), allow(unused_variables))]

use crate::measurement::Measurement;

/// Ring buffer of the last `N` measurements.
///
/// When `history` feature is enabled, stores measurements in a ring buffer.
/// When disabled, zero-size stub that no-ops all operations.
#[derive(Debug, Clone)]
pub struct MeasurementHistory<const N: usize> {
    #[cfg(feature = "history")]
    buffer: heapless::Vec<Measurement, N>,
}

impl<const N: usize> MeasurementHistory<N> {
    /// Create empty history.
    #[cfg(feature = "history")]
    pub const fn new() -> Self {
        Self {
            buffer: heapless::Vec::new(),
        }
    }

    /// Create empty history (stub version).
    #[cfg(not(feature = "history"))]
    pub const fn new() -> Self {
        Self {}
    }

    /// Add a measurement, dropping the oldest one if full.
    #[cfg(feature = "history")]
    pub fn record(&mut self, measurement: Measurement) {
        if N == 0 {
            return;
        }

        if self.buffer.is_full() {
            self.buffer.remove(0);
        }
        let _ = self.buffer.push(measurement);
    }

    /// Add a measurement (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn record(&mut self, measurement: Measurement) {
        // No-op
    }

    /// Most recent measurement.
    pub fn last(&self) -> Option<Measurement> {
        self.as_slice().last().copied()
    }

    /// Shortest recorded measurement.
    pub fn min(&self) -> Option<Measurement> {
        self.as_slice().iter().copied().min()
    }

    /// Longest recorded measurement.
    pub fn max(&self) -> Option<Measurement> {
        self.as_slice().iter().copied().max()
    }

    /// Average duration in microseconds (integer division).
    pub fn average_us(&self) -> Option<u32> {
        let entries = self.as_slice();
        if entries.is_empty() {
            return None;
        }

        let total: u64 = entries.iter().map(|m| m.total_us() as u64).sum();
        Some((total / entries.len() as u64) as u32)
    }

    /// Number of recorded measurements.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> core::slice::Iter<'_, Measurement> {
        self.as_slice().iter()
    }

    /// Drop all recorded measurements.
    #[cfg(feature = "history")]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Drop all recorded measurements (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn clear(&mut self) {
        // No-op
    }

    #[cfg(feature = "history")]
    fn as_slice(&self) -> &[Measurement] {
        &self.buffer
    }

    #[cfg(not(feature = "history"))]
    fn as_slice(&self) -> &[Measurement] {
        &[]
    }
}

impl<const N: usize> Default for MeasurementHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}
