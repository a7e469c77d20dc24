//! Transaction types exchanged with the node

use crate::address::AccountAddress;
use crate::payload::EntryFunctionPayload;
use crate::utils::u64_string;
use serde::{Deserialize, Serialize};

/// Unsigned user transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawTransaction {
    /// Sending account
    pub sender: AccountAddress,
    /// Sender's next sequence number
    #[serde(with = "u64_string")]
    pub sequence_number: u64,
    /// Gas limit in units
    #[serde(with = "u64_string")]
    pub max_gas_amount: u64,
    /// Price per gas unit in octas
    #[serde(with = "u64_string")]
    pub gas_unit_price: u64,
    /// Unix seconds after which the node drops the transaction
    #[serde(with = "u64_string")]
    pub expiration_timestamp_secs: u64,
    /// Entry function call
    pub payload: EntryFunctionPayload,
    /// Chain the transaction is bound to
    #[serde(skip)]
    pub chain_id: u8,
}

/// Signature supplied by an external signer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionSignature {
    Ed25519Signature {
        /// 0x-prefixed hex public key
        public_key: String,
        /// 0x-prefixed hex signature over the signing message
        signature: String,
    },
}

/// Raw transaction plus signature, ready for submission
#[derive(Debug, Clone, Serialize)]
pub struct SignedTransaction {
    #[serde(flatten)]
    pub raw: RawTransaction,
    pub signature: TransactionSignature,
}

impl SignedTransaction {
    pub fn new(raw: RawTransaction, signature: TransactionSignature) -> Self {
        Self { raw, signature }
    }
}

/// Response to a transaction submission
#[derive(Debug, Clone, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,
    #[serde(default)]
    pub sender: Option<AccountAddress>,
}

/// Transaction as reported by the node after lookup
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInfo {
    /// `pending_transaction`, `user_transaction`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub vm_status: Option<String>,
    #[serde(default, with = "u64_string::option")]
    pub version: Option<u64>,
}

impl TransactionInfo {
    pub fn is_pending(&self) -> bool {
        self.kind == "pending_transaction"
    }
}

/// Ledger summary returned by the node index
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerInfo {
    pub chain_id: u8,
    #[serde(with = "u64_string")]
    pub ledger_version: u64,
    #[serde(with = "u64_string")]
    pub ledger_timestamp: u64,
}

/// On-chain account resource summary
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    #[serde(with = "u64_string")]
    pub sequence_number: u64,
    pub authentication_key: String,
}

/// Gas price estimate
#[derive(Debug, Clone, Deserialize)]
pub struct GasEstimation {
    pub gas_estimate: u64,
    #[serde(default)]
    pub deprioritized_gas_estimate: Option<u64>,
    #[serde(default)]
    pub prioritized_gas_estimate: Option<u64>,
}

/// Error body returned by the node on non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct NodeErrorBody {
    pub message: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub vm_error_code: Option<u64>,
}
