//! Generic I2C peripheral handles.
//!
//! [`I2cDevice`] addresses one peripheral on an [`I2cBus`](crate::hw_trait::I2cBus)
//! and forwards transfers to it. [`I2cDeviceChannel`] wraps a device so it
//! can be handed to code that only knows about
//! [`SerialInterface`](crate::hw_trait::SerialInterface).

mod channel;
mod device;

pub use channel::I2cDeviceChannel;
pub use device::I2cDevice;

/// Display name given to devices constructed without one.
pub const DEFAULT_DEVICE_NAME: &str = "i2c device";
