//! Generic I2C device.
//!
//! Serves both as the building block for peripheral drivers and as a way to
//! talk to peripherals for which no driver exists.

use std::fmt;

use crate::address::Address;
use crate::config::DeviceConfig;
use crate::error::{self, Error};
use crate::hw_trait::I2cBus;
use crate::tracing::prelude::*;

use super::DEFAULT_DEVICE_NAME;

/// A peripheral at a fixed address on a shared bus.
///
/// The device borrows its bus and holds no hardware state of its own. Every
/// transfer is forwarded to the bus stamped with the device's address, and
/// whatever the bus returns, success or failure, comes back untouched.
pub struct I2cDevice<'a, B> {
    bus: &'a B,
    address: Address,
    name: String,
}

impl<'a, B: I2cBus> I2cDevice<'a, B> {
    /// Attach a device named [`DEFAULT_DEVICE_NAME`] at `address`.
    pub fn new<A>(bus: &'a B, address: A) -> error::Result<Self>
    where
        A: TryInto<Address, Error = Error>,
    {
        Self::with_name(bus, address, DEFAULT_DEVICE_NAME)
    }

    /// Attach a device at `address` with a display name.
    ///
    /// Fails with [`Error::InvalidAddress`] if `address` is not a 7-bit
    /// address, in which case the bus is never contacted.
    pub fn with_name<A>(bus: &'a B, address: A, name: impl Into<String>) -> error::Result<Self>
    where
        A: TryInto<Address, Error = Error>,
    {
        let name = name.into();
        let address = match address.try_into() {
            Ok(address) => address,
            Err(e) => {
                warn!("Not attaching {}: {}", name, e);
                return Err(e);
            }
        };
        Ok(Self::attach(bus, address, name))
    }

    /// Attach a device at an already validated address.
    pub fn attach(bus: &'a B, address: Address, name: impl Into<String>) -> Self {
        let device = Self {
            bus,
            address,
            name: name.into(),
        };
        if address.is_reserved() {
            debug!("Attaching {} at reserved address", device);
        } else {
            debug!("Attaching {}", device);
        }
        bus.attach_device(&device);
        device
    }

    /// Attach the device described by `config`.
    pub fn from_config(bus: &'a B, config: &DeviceConfig) -> error::Result<Self> {
        Self::with_name(bus, config.address, config.name.as_str())
    }

    /// Send `data` and read back `receive_length` bytes, repeating the
    /// exchange `count` times. A `receive_length` of zero skips the read.
    pub fn transmit(
        &self,
        data: &[u8],
        receive_length: usize,
        count: usize,
    ) -> Result<Vec<u8>, B::Error> {
        trace!(
            "{}: transmit {} byte(s), receive {} byte(s), {} time(s)",
            self,
            data.len(),
            receive_length,
            count
        );
        self.bus.transmit(self.address, data, receive_length, count)
    }

    /// Read `receive_length` bytes from the device.
    pub fn read(&self, receive_length: usize) -> Result<Vec<u8>, B::Error> {
        trace!("{}: read {} byte(s)", self, receive_length);
        self.bus.read(self.address, receive_length)
    }

    /// Write `data` to the device.
    pub fn write(&self, data: &[u8]) -> Result<B::WriteOutput, B::Error> {
        trace!("{}: write {:02X?}", self, data);
        self.bus.write(self.address, data)
    }
}

impl<'a, B> I2cDevice<'a, B> {
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bus this device is attached to.
    pub fn bus(&self) -> &'a B {
        self.bus
    }
}

impl<B> fmt::Display for I2cDevice<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.address)
    }
}

impl<B> fmt::Debug for I2cDevice<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I2cDevice")
            .field("address", &self.address)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
