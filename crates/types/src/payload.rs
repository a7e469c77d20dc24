//! Entry function payloads and Move argument values

use crate::address::AccountAddress;
use crate::error::{BorrowLendError, Result};
use crate::utils::is_valid_identifier;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A published Move module: `address::name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    pub address: AccountAddress,
    pub name: String,
}

impl ModuleId {
    pub fn new(address: AccountAddress, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(BorrowLendError::InvalidIdentifier(format!(
                "module name '{}'",
                name
            )));
        }
        Ok(Self { address, name })
    }

    /// Fully qualified id of a function in this module
    pub fn function(&self, function: &str) -> Result<EntryFunctionId> {
        EntryFunctionId::new(self.clone(), function)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address, self.name)
    }
}

/// Fully qualified entry function: `address::module::function`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryFunctionId {
    pub module: ModuleId,
    pub function: String,
}

impl EntryFunctionId {
    pub fn new(module: ModuleId, function: impl Into<String>) -> Result<Self> {
        let function = function.into();
        if !is_valid_identifier(&function) {
            return Err(BorrowLendError::InvalidIdentifier(format!(
                "function name '{}'",
                function
            )));
        }
        Ok(Self { module, function })
    }
}

impl fmt::Display for EntryFunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.function)
    }
}

impl FromStr for EntryFunctionId {
    type Err = BorrowLendError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split("::").collect();
        let [address, module, function] = parts.as_slice() else {
            return Err(BorrowLendError::InvalidIdentifier(format!(
                "expected address::module::function, got '{}'",
                s
            )));
        };
        let address = AccountAddress::from_hex_literal(address)?;
        EntryFunctionId::new(ModuleId::new(address, *module)?, *function)
    }
}

impl Serialize for EntryFunctionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Argument value in the node's JSON encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveValue {
    Bool(bool),
    U8(u8),
    /// Encoded as a decimal string
    U64(u64),
    Address(AccountAddress),
    String(String),
    /// `vector<u8>`, encoded as 0x-prefixed hex
    Bytes(Vec<u8>),
    Vector(Vec<MoveValue>),
}

impl Serialize for MoveValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MoveValue::Bool(b) => serializer.serialize_bool(*b),
            MoveValue::U8(n) => serializer.serialize_u8(*n),
            MoveValue::U64(n) => serializer.collect_str(n),
            MoveValue::Address(addr) => addr.serialize(serializer),
            MoveValue::String(s) => serializer.serialize_str(s),
            MoveValue::Bytes(bytes) => {
                serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
            }
            MoveValue::Vector(items) => items.serialize(serializer),
        }
    }
}

impl From<bool> for MoveValue {
    fn from(value: bool) -> Self {
        MoveValue::Bool(value)
    }
}

impl From<u8> for MoveValue {
    fn from(value: u8) -> Self {
        MoveValue::U8(value)
    }
}

impl From<u64> for MoveValue {
    fn from(value: u64) -> Self {
        MoveValue::U64(value)
    }
}

impl From<AccountAddress> for MoveValue {
    fn from(value: AccountAddress) -> Self {
        MoveValue::Address(value)
    }
}

impl From<&str> for MoveValue {
    fn from(value: &str) -> Self {
        MoveValue::String(value.to_string())
    }
}

impl From<String> for MoveValue {
    fn from(value: String) -> Self {
        MoveValue::String(value)
    }
}

impl<T: Into<MoveValue>> From<Vec<T>> for MoveValue {
    fn from(values: Vec<T>) -> Self {
        MoveValue::Vector(values.into_iter().map(Into::into).collect())
    }
}

/// Entry function call descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "entry_function_payload")]
pub struct EntryFunctionPayload {
    pub function: EntryFunctionId,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<MoveValue>,
}

impl EntryFunctionPayload {
    /// Payload without type arguments
    pub fn new(function: EntryFunctionId, arguments: Vec<MoveValue>) -> Self {
        Self {
            function,
            type_arguments: Vec::new(),
            arguments,
        }
    }
}
