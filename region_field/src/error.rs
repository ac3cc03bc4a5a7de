//! Error types reported when a stored offset cannot be turned into a zone.

use thiserror::Error;

/// Errors raised by accessors generated with `fallback = "error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegionError {
    /// The stored offset lies outside the representable range.
    #[error("UTC offset of {seconds} seconds is outside the supported range of ±{max} seconds")]
    OffsetOutOfRange {
        /// Offset that was read from the backing field.
        seconds: i32,
        /// Largest supported absolute offset.
        max: i32,
    },
}

/// Convenience alias for results carrying a [`RegionError`].
pub type RegionResult<T> = Result<T, RegionError>;
