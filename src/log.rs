//! Internal logging macros.
//!
//! Forward to `defmt` when the `defmt` feature is enabled, expand to nothing
//! otherwise so the measurement path stays free of formatting code.

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => {{ ::defmt::debug!($($arg)*); }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => {{ ::defmt::trace!($($arg)*); }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)*) => {{ ::defmt::warn!($($arg)*); }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($($arg:tt)*) => {{}};
}
