//! Error types for the BorrowLend SDK

use thiserror::Error;

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum BorrowLendError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Account address parsing errors
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Errors reported by the node or faucet, passed through untouched
    #[error("Node error: {0}")]
    Node(#[from] NodeError),

    /// External signer failures
    #[error("Signing error: {0}")]
    Signing(String),

    /// Malformed Move identifiers or function ids
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, BorrowLendError>;

/// Account address parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Nothing after the optional 0x prefix
    #[error("Address is empty")]
    Empty,

    /// More than 32 bytes of hex
    #[error("Address too long: {len} hex digits (max 64)")]
    TooLong { len: usize },

    /// Non-hex characters
    #[error("Invalid hex in address: {0}")]
    InvalidHex(String),
}

/// Node and faucet communication errors
#[derive(Error, Debug)]
pub enum NodeError {
    /// Request timed out
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// Connection or transport failure
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// Non-success status with the node's error body
    #[error("Node API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        error_code: Option<String>,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response from node: {message}")]
    InvalidResponse { message: String },

    /// Transaction committed but aborted on chain
    #[error("Transaction {hash} failed: {vm_status}")]
    TransactionFailed { hash: String, vm_status: String },

    /// Transaction still pending when the wait expired
    #[error("Timed out waiting for transaction {hash}")]
    WaitTimeout { hash: String },
}

/// Configuration specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Parse error
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// Validation error
    #[error("Configuration validation error: {field}: {message}")]
    ValidationError { field: String, message: String },

    /// Missing required field
    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    /// Invalid value
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl From<ConfigError> for BorrowLendError {
    fn from(err: ConfigError) -> Self {
        BorrowLendError::Config(err.to_string())
    }
}

impl NodeError {
    /// Error code reported by the node, if any
    pub fn error_code(&self) -> Option<&str> {
        match self {
            NodeError::Api { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }
}
