//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::{
    AccountAddress, BorrowLendContract, EntryPointPreset, EntryPointTable, LendAction, ModuleId,
    NetworkConfig, TransactionOptions, DEFAULT_MODULE_ADDRESS, DEFAULT_MODULE_NAME,
};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Node and faucet endpoints
    #[serde(default)]
    pub network: NetworkConfig,
    /// Deployed borrow/lend module
    #[serde(default)]
    pub contract: ContractConfig,
    /// Options applied to generated transactions
    #[serde(default)]
    pub transaction: TransactionOptions,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Contract configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Address the module is published under
    #[serde(default = "default_module_address")]
    pub module_address: String,
    /// Module name
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Account sending create/update pool; defaults to the module address
    #[serde(default)]
    pub owner_address: Option<String>,
    /// Entry function names per action
    #[serde(default)]
    pub entry_points: EntryPointsConfig,
}

/// Entry point selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntryPointsConfig {
    /// Base table
    #[serde(default)]
    pub preset: EntryPointPreset,
    /// Per-action function name overrides
    #[serde(default)]
    pub overrides: BTreeMap<LendAction, String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_module_address() -> String {
    DEFAULT_MODULE_ADDRESS.to_string()
}

fn default_module_name() -> String {
    DEFAULT_MODULE_NAME.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            module_address: default_module_address(),
            module_name: default_module_name(),
            owner_address: None,
            entry_points: EntryPointsConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl EntryPointsConfig {
    /// Preset table with overrides applied
    pub fn table(&self) -> EntryPointTable {
        self.overrides.iter().fold(
            EntryPointTable::from_preset(self.preset),
            |table, (action, function)| table.with_override(*action, function.clone()),
        )
    }
}

impl ContractConfig {
    /// Resolve the module and its entry points
    pub fn to_contract(&self) -> types::Result<BorrowLendContract> {
        let address = AccountAddress::from_hex_literal(&self.module_address)?;
        let module = ModuleId::new(address, self.module_name.clone())?;
        BorrowLendContract::new(module, self.entry_points.table())
    }

    /// Pool owner address, falling back to the module address
    pub fn owner(&self) -> types::Result<AccountAddress> {
        let literal = self
            .owner_address
            .as_deref()
            .unwrap_or(&self.module_address);
        Ok(AccountAddress::from_hex_literal(literal)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contract_resolves() {
        let config = ContractConfig::default();
        let contract = config.to_contract().unwrap();
        assert_eq!(contract.module().name, "borrowlend");
        assert_eq!(config.owner().unwrap(), contract.address());
    }

    #[test]
    fn test_overrides_applied_on_top_of_preset() {
        let mut config = ContractConfig::default();
        config.entry_points.preset = EntryPointPreset::Dedicated;
        config
            .entry_points
            .overrides
            .insert(LendAction::BorrowerPayLoan, "repay".to_string());

        let contract = config.to_contract().unwrap();
        assert_eq!(contract.function(LendAction::BorrowerPayLoan).function, "repay");
        assert_eq!(
            contract.function(LendAction::LenderClaimNft).function,
            "lender_claim_nft"
        );
    }

    #[test]
    fn test_explicit_owner() {
        let config = ContractConfig {
            owner_address: Some("0xbeef".to_string()),
            ..ContractConfig::default()
        };
        assert_eq!(config.owner().unwrap().to_string(), format!("0x{:0>64}", "beef"));
    }
}
