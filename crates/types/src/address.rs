//! Account addresses

use crate::error::AddressError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 32-byte account address
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AccountAddress([u8; AccountAddress::LENGTH]);

impl AccountAddress {
    /// Address length in bytes
    pub const LENGTH: usize = 32;

    /// The all-zero address
    pub const ZERO: Self = Self([0u8; Self::LENGTH]);

    /// Framework address hosting the legacy token module
    pub const THREE: Self = {
        let mut bytes = [0u8; Self::LENGTH];
        bytes[Self::LENGTH - 1] = 3;
        Self(bytes)
    };

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse a hex address, with or without `0x`; short forms are left-padded
    pub fn from_hex_literal(literal: &str) -> Result<Self, AddressError> {
        let digits = literal.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);

        if digits.is_empty() {
            return Err(AddressError::Empty);
        }
        if digits.len() > Self::LENGTH * 2 {
            return Err(AddressError::TooLong { len: digits.len() });
        }

        let padded = format!("{:0>width$}", digits, width = Self::LENGTH * 2);
        let mut bytes = [0u8; Self::LENGTH];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|_| AddressError::InvalidHex(literal.to_string()))?;

        Ok(Self(bytes))
    }

    /// Long-form hex with 0x prefix
    pub fn to_hex_literal(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_literal(s)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_literal())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.to_hex_literal())
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_literal())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex_literal(&s).map_err(serde::de::Error::custom)
    }
}
