//! Configuration for I2C peripherals.
//!
//! Applications describing their bus layout in a configuration file can
//! deserialize one [`DeviceConfig`] per peripheral and hand it to
//! [`I2cDevice::from_config`](crate::i2c::I2cDevice::from_config). Addresses
//! are kept raw here and validated when the device is attached.

use serde::{Deserialize, Serialize};

use crate::i2c::DEFAULT_DEVICE_NAME;

/// One peripheral on a bus.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceConfig {
    /// 7-bit bus address
    pub address: i64,

    /// Display name
    #[serde(default = "default_name")]
    pub name: String,
}

impl DeviceConfig {
    /// Describe a device at `address` with the default name.
    pub fn new(address: i64) -> Self {
        Self {
            address,
            name: default_name(),
        }
    }
}

fn default_name() -> String {
    DEFAULT_DEVICE_NAME.to_string()
}
