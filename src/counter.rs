//! Hardware counter abstraction.
//!
//! The `HwCounter` trait is the only thing the timer knows about the
//! peripheral. Implement it on top of the vendor HAL for the target (timer
//! counter register, enable bit, update flag).

/// Free-running up-counter ticking at 1 MHz.
///
/// The peripheral must already be configured by the application: 1 MHz
/// input clock, auto-reload/period of 65535. The timer only writes the count,
/// toggles counting and reads the count back.
///
/// Every method is called on the measurement path, so implementations should
/// be a single register access where possible.
pub trait HwCounter {
    /// Write the counter register (the timer only ever writes zero).
    fn set_count(&mut self, value: u16);

    /// Read the counter register.
    fn read_count(&mut self) -> u16;

    /// Start counting.
    fn enable(&mut self);

    /// Stop counting. The count register keeps its value.
    fn disable(&mut self);

    /// Whether the counter wrapped past its period since the last
    /// `clear_overflow()`.
    ///
    /// Only consulted by `ExecutionTimer::stop_checked()`. Default: `false`
    /// (overflow is not detectable without an update flag).
    fn overflowed(&mut self) -> bool {
        false
    }

    /// Clear the overflow/update flag. Called on every `start()`.
    ///
    /// Default implementation does nothing.
    fn clear_overflow(&mut self) {}
}

impl<T: HwCounter + ?Sized> HwCounter for &mut T {
    fn set_count(&mut self, value: u16) {
        (**self).set_count(value)
    }

    fn read_count(&mut self) -> u16 {
        (**self).read_count()
    }

    fn enable(&mut self) {
        (**self).enable()
    }

    fn disable(&mut self) {
        (**self).disable()
    }

    fn overflowed(&mut self) -> bool {
        (**self).overflowed()
    }

    fn clear_overflow(&mut self) {
        (**self).clear_overflow()
    }
}
