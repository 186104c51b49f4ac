//! Serial channel over an I2C device.
//!
//! This module adapts an [`I2cDevice`] to [`SerialInterface`], so drivers
//! written for any serial transport can be pointed at an I2C peripheral.

use std::fmt;

use crate::address::Address;
use crate::error::{self, Error};
use crate::hw_trait::{I2cBus, SerialInterface};

use super::{I2cDevice, DEFAULT_DEVICE_NAME};

/// Serial interface backed by exactly one I2C device.
///
/// The channel owns its device for its whole lifetime and forwards every
/// call to it with the same arguments. Results, including bus errors, are
/// returned as the device produced them.
pub struct I2cDeviceChannel<'a, B> {
    device: I2cDevice<'a, B>,
}

impl<'a, B: I2cBus> I2cDeviceChannel<'a, B> {
    /// Wrap an already attached device.
    pub fn new(device: I2cDevice<'a, B>) -> Self {
        Self { device }
    }

    /// Attach a device named [`DEFAULT_DEVICE_NAME`] and wrap it.
    pub fn open<A>(bus: &'a B, address: A) -> error::Result<Self>
    where
        A: TryInto<Address, Error = Error>,
    {
        Self::open_with_name(bus, address, DEFAULT_DEVICE_NAME)
    }

    /// Attach a named device and wrap it.
    ///
    /// Fails exactly as [`I2cDevice::with_name`] does.
    pub fn open_with_name<A>(
        bus: &'a B,
        address: A,
        name: impl Into<String>,
    ) -> error::Result<Self>
    where
        A: TryInto<Address, Error = Error>,
    {
        I2cDevice::with_name(bus, address, name).map(Self::new)
    }
}

impl<'a, B> I2cDeviceChannel<'a, B> {
    /// Give back the wrapped device.
    pub fn into_inner(self) -> I2cDevice<'a, B> {
        self.device
    }
}

impl<'a, B: I2cBus> From<I2cDevice<'a, B>> for I2cDeviceChannel<'a, B> {
    fn from(device: I2cDevice<'a, B>) -> Self {
        Self::new(device)
    }
}

impl<B: I2cBus> SerialInterface for I2cDeviceChannel<'_, B> {
    type Error = B::Error;
    type WriteOutput = B::WriteOutput;

    fn read(&mut self, receive_length: usize) -> Result<Vec<u8>, B::Error> {
        self.device.read(receive_length)
    }

    fn write(&mut self, data: &[u8]) -> Result<B::WriteOutput, B::Error> {
        self.device.write(data)
    }

    fn transmit(
        &mut self,
        data: &[u8],
        receive_length: usize,
        count: usize,
    ) -> Result<Vec<u8>, B::Error> {
        self.device.transmit(data, receive_length, count)
    }
}

impl<B> fmt::Debug for I2cDeviceChannel<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I2cDeviceChannel")
            .field("device", &self.device)
            .finish()
    }
}
