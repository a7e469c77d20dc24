//! Shared types for the BorrowLend SDK
//!
//! This crate contains the domain types shared by the configuration layer,
//! the node client and the payload builder.

pub mod address;
pub mod contract;
pub mod error;
pub mod network;
pub mod payload;
pub mod transaction;
pub mod utils;

// Re-export commonly used types
pub use address::AccountAddress;
pub use contract::*;
pub use error::{AddressError, BorrowLendError, ConfigError, NodeError, Result};
pub use network::*;
pub use payload::{EntryFunctionId, EntryFunctionPayload, ModuleId, MoveValue};
pub use transaction::*;
