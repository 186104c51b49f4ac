//! Hardware abstraction layer traits.
//!
//! This module defines the interface traits that connect peripheral handles
//! to whatever actually moves the bytes. [`I2cBus`] is the contract a bus
//! controller (for example a GreatFET reached over USB) provides;
//! [`SerialInterface`] is the transport-neutral contract that drivers are
//! written against, so an I2C peripheral can stand in wherever an SPI or UART
//! peripheral could.

use crate::address::Address;
use crate::i2c::I2cDevice;

/// An I2C bus driven by an external controller.
///
/// Methods take `&self` because one bus is shared by every device attached
/// to it. Implementations that need mutable state, or that must keep two
/// devices from transferring at once, are expected to serialize internally.
/// Timeouts, retries and cancellation are likewise the implementation's
/// concern.
pub trait I2cBus {
    /// Failure reported by the bus (NACK, timeout, transport error, ...).
    type Error;

    /// Whatever the bus hands back from a plain write.
    type WriteOutput;

    /// Register a freshly constructed device with the bus.
    fn attach_device(&self, device: &I2cDevice<'_, Self>)
    where
        Self: Sized;

    /// Perform `count` write-then-read cycles against `address`, sending
    /// `data` and then reading `receive_length` bytes each cycle.
    fn transmit(
        &self,
        address: Address,
        data: &[u8],
        receive_length: usize,
        count: usize,
    ) -> Result<Vec<u8>, Self::Error>;

    /// Read `receive_length` bytes from `address`.
    fn read(&self, address: Address, receive_length: usize) -> Result<Vec<u8>, Self::Error>;

    /// Write `data` to `address`.
    fn write(&self, address: Address, data: &[u8]) -> Result<Self::WriteOutput, Self::Error>;
}

/// Generic serial-transfer capability.
///
/// Callers holding a `SerialInterface` never learn which bus or address sits
/// behind it.
pub trait SerialInterface {
    type Error;
    type WriteOutput;

    /// Read `receive_length` bytes; zero reads nothing.
    fn read(&mut self, receive_length: usize) -> Result<Vec<u8>, Self::Error>;

    /// Send `data`.
    fn write(&mut self, data: &[u8]) -> Result<Self::WriteOutput, Self::Error>;

    /// Send `data` and read back `receive_length` bytes, `count` times over.
    ///
    /// A plain exchange uses a `count` of 1.
    fn transmit(
        &mut self,
        data: &[u8],
        receive_length: usize,
        count: usize,
    ) -> Result<Vec<u8>, Self::Error>;
}
