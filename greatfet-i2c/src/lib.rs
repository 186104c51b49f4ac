//! Host-side handles for peripherals on a GreatFET I2C bus.
//!
//! The bus itself, and the USB link to the board driving it, live behind the
//! [`I2cBus`] trait. This crate provides the pieces layered on top:
//!
//! - [`I2cDevice`] names one peripheral at a validated 7-bit [`Address`]
//!   and forwards reads, writes, and write/read transmissions to its bus.
//! - [`I2cDeviceChannel`] exposes a device as a [`SerialInterface`], so code
//!   written for any serial transport can drive an I2C peripheral.
//!
//! Everything here is synchronous. Locking, timeouts, and retries are the
//! bus implementation's business.

pub mod address;
pub mod config;
pub mod error;
pub mod hw_trait;
pub mod i2c;
pub mod tracing;

#[cfg(test)]
mod testing;

pub use address::Address;
pub use config::DeviceConfig;
pub use error::{Error, Result};
pub use hw_trait::{I2cBus, SerialInterface};
pub use i2c::{I2cDevice, I2cDeviceChannel, DEFAULT_DEVICE_NAME};
