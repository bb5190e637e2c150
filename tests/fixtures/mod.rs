//! Test fixtures and utilities for exec-timer testing.
//!
//! Provides:
//! - `MockCounter`: Simulated 1 MHz 16-bit up-counter implementing `HwCounter`
//! - `MockSink`: Test implementation of `TextSink` capturing output
//! - `FailingSink`: `TextSink` that rejects every write

#![allow(dead_code)]

use exec_timer::{HwCounter, TextSink};

// ============================================================================
// MockCounter - Simulated Hardware Counter
// ============================================================================

/// Register access recorded by `MockCounter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    SetCount(u16),
    Read,
    Enable,
    Disable,
    ClearOverflow,
}

/// Simulated timer peripheral.
///
/// Counts only while enabled. `disable()` adds a call cost to model the
/// instructions executed between `enable()` and the counter actually stopping,
/// which is what calibration measures. The cost cycles through `call_costs`,
/// one entry per `disable()`. `advance()` models the workload.
#[derive(Debug)]
pub struct MockCounter {
    count: u16,
    enabled: bool,
    call_costs: Vec<u16>,
    disables: usize,
    overflowed: bool,
    next_reading: Option<u16>,
    ops: Vec<Op>,
}

impl MockCounter {
    /// Create a counter whose start/stop sequence costs `call_cost` ticks.
    pub fn new(call_cost: u16) -> Self {
        Self::with_costs(&[call_cost])
    }

    /// Create a counter whose start/stop cost varies from cycle to cycle.
    pub fn with_costs(call_costs: &[u16]) -> Self {
        assert!(!call_costs.is_empty(), "at least one call cost required");
        Self {
            count: 0,
            enabled: false,
            call_costs: call_costs.to_vec(),
            disables: 0,
            overflowed: false,
            next_reading: None,
            ops: Vec::new(),
        }
    }

    /// Let `ticks` microseconds of workload elapse. Ignored while disabled.
    pub fn advance(&mut self, ticks: u32) {
        if !self.enabled {
            return;
        }
        let total = self.count as u32 + ticks;
        if total > u16::MAX as u32 {
            self.overflowed = true;
        }
        self.count = (total % (u16::MAX as u32 + 1)) as u16;
    }

    /// Force the value returned by the next `read_count()`.
    pub fn force_reading(&mut self, value: u16) {
        self.next_reading = Some(value);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    /// Recorded register accesses.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl HwCounter for MockCounter {
    fn set_count(&mut self, value: u16) {
        self.ops.push(Op::SetCount(value));
        self.count = value;
    }

    fn read_count(&mut self) -> u16 {
        self.ops.push(Op::Read);
        self.next_reading.take().unwrap_or(self.count)
    }

    fn enable(&mut self) {
        self.ops.push(Op::Enable);
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.ops.push(Op::Disable);
        if self.enabled {
            let cost = self.call_costs[self.disables % self.call_costs.len()] as u32;
            self.disables += 1;
            self.advance(cost);
        }
        self.enabled = false;
    }

    fn overflowed(&mut self) -> bool {
        self.overflowed
    }

    fn clear_overflow(&mut self) {
        self.ops.push(Op::ClearOverflow);
        self.overflowed = false;
    }
}

// ============================================================================
// MockSink - Output Capture
// ============================================================================

/// Captures everything written to it.
#[derive(Debug, Default)]
pub struct MockSink {
    output: String,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl TextSink for MockSink {
    type Error = ();

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        self.output.push(c);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.output.push_str(s);
        Ok(())
    }
}

/// Error reported by `FailingSink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkBusy;

/// Sink whose transport is always busy.
#[derive(Debug, Default)]
pub struct FailingSink;

impl TextSink for FailingSink {
    type Error = SinkBusy;

    fn put_char(&mut self, _c: char) -> Result<(), Self::Error> {
        Err(SinkBusy)
    }
}
