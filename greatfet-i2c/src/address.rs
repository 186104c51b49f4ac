//! Validated 7-bit I2C addresses.

use std::fmt;

use crate::error::{Error, Result};

/// A 7-bit I2C bus address, guaranteed to lie in `0..=127`.
///
/// 10-bit addressing is not supported. Widening this type is the place to
/// start if it ever is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u8);

impl Address {
    /// Highest 7-bit address.
    pub const MAX: Address = Address(0x7F);

    /// Build an address from any integer, rejecting values outside `0..=127`.
    pub fn new(raw: i64) -> Result<Self> {
        match u8::try_from(raw) {
            Ok(addr) if addr <= Self::MAX.0 => Ok(Self(addr)),
            _ => Err(Error::InvalidAddress(raw)),
        }
    }

    /// Raw address value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True for addresses the I2C specification sets aside for special
    /// purposes (general call, CBUS, HS-mode, 10-bit prefixes, ...).
    ///
    /// Reserved addresses are still accepted; some controllers use them.
    pub const fn is_reserved(self) -> bool {
        self.0 <= 0x07 || self.0 >= 0x78
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> u8 {
        addr.0
    }
}

impl TryFrom<i64> for Address {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self> {
        Self::new(raw)
    }
}

macro_rules! impl_try_from_int {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for Address {
                type Error = Error;

                fn try_from(raw: $int) -> Result<Self> {
                    Self::new(i64::from(raw))
                }
            }
        )*
    };
}

impl_try_from_int!(u8, u16, u32, i8, i16, i32);
