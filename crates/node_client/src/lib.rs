//! Client for the Aptos node REST API
//!
//! This crate reads chain state needed to build transactions (sequence
//! numbers, gas prices, chain id), hands signing messages to external
//! signers, submits and tracks transactions, and funds test accounts.

pub mod client;
pub mod faucet;
pub mod traits;

pub use client::*;
pub use faucet::*;
pub use traits::*;
