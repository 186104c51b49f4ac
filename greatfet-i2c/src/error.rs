//! Common error types for greatfet-i2c.
//!
//! Only failures raised by this crate live here. Errors reported by a bus
//! implementation are surfaced through that bus's own `I2cBus::Error` type
//! and never wrapped.

use thiserror::Error;

/// Main error type for greatfet-i2c operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Address outside the supported 7-bit range
    #[error("Tried to attach a device to an unsupported I2C address: {0}")]
    InvalidAddress(i64),
}

/// Convenience type alias for Results using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
