//! Node endpoints and transaction building options

use serde::{Deserialize, Serialize};

/// Devnet fullnode
pub const DEVNET_NODE_URL: &str = "https://fullnode.devnet.aptoslabs.com";

/// Devnet faucet
pub const DEVNET_FAUCET_URL: &str = "https://faucet.devnet.aptoslabs.com";

/// Node and faucet endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network name (devnet, testnet, mainnet, local)
    #[serde(default = "default_network_name")]
    pub name: String,
    /// Fullnode REST URL, with or without the /v1 suffix
    #[serde(default = "default_node_url")]
    pub node_url: String,
    /// Faucet URL (devnet/testnet/local only)
    #[serde(default = "default_faucet_url")]
    pub faucet_url: Option<String>,
    /// Chain id; fetched from the node when unset
    #[serde(default)]
    pub chain_id: Option<u8>,
    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Values placed in every generated transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionOptions {
    /// Gas limit
    #[serde(default = "default_max_gas_amount")]
    pub max_gas_amount: u64,
    /// Fixed gas unit price; estimated by the node when unset
    #[serde(default)]
    pub gas_unit_price: Option<u64>,
    /// Seconds from now until the transaction expires
    #[serde(default = "default_expiration_seconds")]
    pub expiration_seconds: u64,
}

fn default_network_name() -> String {
    "devnet".to_string()
}

fn default_node_url() -> String {
    DEVNET_NODE_URL.to_string()
}

fn default_faucet_url() -> Option<String> {
    Some(DEVNET_FAUCET_URL.to_string())
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_gas_amount() -> u64 {
    200_000
}

fn default_expiration_seconds() -> u64 {
    20
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: default_network_name(),
            node_url: default_node_url(),
            faucet_url: default_faucet_url(),
            chain_id: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for TransactionOptions {
    fn default() -> Self {
        Self {
            max_gas_amount: default_max_gas_amount(),
            gas_unit_price: None,
            expiration_seconds: default_expiration_seconds(),
        }
    }
}
