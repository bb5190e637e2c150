//! Text output abstraction for printing results.
//!
//! The `TextSink` trait is what `ExecutionTimer::print()` writes to. Implement
//! it for whatever the board uses for diagnostics (UART, USB CDC, RTT, stdio).

/// Platform-agnostic text output trait.
///
/// `put_char()` and `write_str()` must not block indefinitely; buffer or drop
/// output if the transport is busy.
pub trait TextSink {
    /// Platform-specific error type
    type Error;

    /// Write a single character.
    fn put_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// Write a string.
    ///
    /// Default implementation uses `put_char()` repeatedly.
    /// Override for more efficient bulk writes if needed.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for c in s.chars() {
            self.put_char(c)?;
        }
        Ok(())
    }
}
