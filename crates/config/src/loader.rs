//! Configuration loader implementation

use crate::schema::Config;
use crate::validation::ConfigValidator;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use std::path::Path;
use types::ConfigError;

/// Environment prefix for overrides, e.g. `BORROWLEND_CONTRACT__MODULE_ADDRESS`
pub const ENV_PREFIX: &str = "BORROWLEND_";

/// Configuration loader that handles YAML files and environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file and environment variables
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Config> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Err(ConfigError::FileNotFound {
                path: config_path.display().to_string(),
            }
            .into());
        }

        let config: Config = Self::figment(Some(config_path))
            .extract()
            .context("Failed to parse configuration")?;

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load from file when present, otherwise from defaults and environment
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Result<Config> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            return Self::load(config_path);
        }

        tracing::debug!(path = %config_path.display(), "No configuration file, using defaults");
        let config: Config = Self::figment(None)
            .extract()
            .context("Failed to parse configuration")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from string (for testing)
    pub fn load_from_str(yaml_content: &str) -> Result<Config> {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::string(yaml_content))
            .extract()
            .context("Failed to parse configuration from string")?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Yaml::file(path));
        }

        figment
            // Nested overrides, e.g. BORROWLEND_NETWORK__NODE_URL
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            // Endpoint variables shared with other Aptos tooling
            .merge(
                Env::raw()
                    .only(&["APTOS_NODE_URL", "APTOS_FAUCET_URL"])
                    .map(|key| {
                        if key.as_str().eq_ignore_ascii_case("APTOS_NODE_URL") {
                            "network.node_url".into()
                        } else {
                            "network.faucet_url".into()
                        }
                    }),
            )
    }

    /// Validate configuration, logging warnings and failing on errors
    fn validate(config: &Config) -> Result<()> {
        let report = ConfigValidator::validate(config);

        for warning in &report.warnings {
            tracing::warn!(field = %warning.field, "{}", warning.message);
        }

        if let Some(error) = report.errors.first() {
            return Err(ConfigError::ValidationError {
                field: error.field.clone(),
                message: error.message.clone(),
            }
            .into());
        }

        Ok(())
    }

    /// Get default configuration
    pub fn default() -> Config {
        Config::default()
    }

    /// Create example configuration file
    pub fn create_example<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let yaml_content = serde_yaml::to_string(&config)
            .context("Failed to serialize default configuration")?;

        std::fs::write(path.as_ref(), yaml_content)
            .context("Failed to write example configuration file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use types::{EntryPointPreset, LendAction};

    #[test]
    fn test_load_default_config() {
        let config = ConfigLoader::default();
        assert_eq!(config.network.name, "devnet");
        assert_eq!(config.contract.module_name, "borrowlend");
        assert_eq!(config.transaction.max_gas_amount, 200_000);
    }

    #[test]
    fn test_load_from_string() {
        let yaml_content = r#"
network:
  name: "local"
  node_url: "http://127.0.0.1:8080"
  faucet_url: "http://127.0.0.1:8081"
  chain_id: 4
contract:
  module_address: "0xcafe"
  entry_points:
    preset: dedicated
    overrides:
      borrower_pay_loan: "repay_loan"
transaction:
  gas_unit_price: 100
"#;

        let config = ConfigLoader::load_from_str(yaml_content).unwrap();
        assert_eq!(config.network.chain_id, Some(4));
        assert_eq!(config.contract.entry_points.preset, EntryPointPreset::Dedicated);
        assert_eq!(config.transaction.gas_unit_price, Some(100));
        assert_eq!(config.transaction.expiration_seconds, 20);

        let contract = config.contract.to_contract().unwrap();
        assert_eq!(
            contract.function(LendAction::BorrowerPayLoan).to_string(),
            format!("0x{:0>64}::borrowlend::repay_loan", "cafe")
        );
    }

    #[test]
    fn test_validation_errors() {
        let yaml_content = r#"
network:
  node_url: ""
"#;
        assert!(ConfigLoader::load_from_str(yaml_content).is_err());

        let yaml_content = r#"
contract:
  module_name: "borrow lend"
"#;
        let err = ConfigLoader::load_from_str(yaml_content).unwrap_err();
        assert!(err.to_string().contains("contract.module_name"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigLoader::load("/nonexistent/borrowlend.yaml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_from_file() {
        // Jail serializes tests that touch the environment
        figment::Jail::expect_with(|_| {
            let mut file = NamedTempFile::new().map_err(|e| e.to_string())?;
            writeln!(file, "transaction:\n  max_gas_amount: 5000").map_err(|e| e.to_string())?;

            let config = ConfigLoader::load(file.path()).map_err(|e| e.to_string())?;
            assert_eq!(config.transaction.max_gas_amount, 5000);
            Ok(())
        });
    }

    #[test]
    fn test_create_example() {
        let temp_file = NamedTempFile::new().unwrap();
        let result = ConfigLoader::create_example(temp_file.path());
        assert!(result.is_ok());

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("network:"));
        assert!(content.contains("module_address:"));

        let reloaded = ConfigLoader::load_from_str(&content).unwrap();
        assert_eq!(reloaded.contract.module_address, config_default_address());
    }

    #[test]
    fn test_environment_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "borrowlend.yaml",
                "network:\n  node_url: \"http://file.example:8080\"\n  chain_id: 4",
            )?;
            jail.set_env("APTOS_NODE_URL", "http://127.0.0.1:9999");
            jail.set_env("APTOS_FAUCET_URL", "http://127.0.0.1:9998");
            jail.set_env("BORROWLEND_CONTRACT__ENTRY_POINTS__PRESET", "dedicated");
            jail.set_env("BORROWLEND_CONTRACT__OWNER_ADDRESS", "0xabc");

            let config = ConfigLoader::load("borrowlend.yaml").map_err(|e| e.to_string())?;

            assert_eq!(config.network.node_url, "http://127.0.0.1:9999");
            assert_eq!(config.network.faucet_url.as_deref(), Some("http://127.0.0.1:9998"));
            assert_eq!(config.network.chain_id, Some(4));
            assert_eq!(config.contract.entry_points.preset, EntryPointPreset::Dedicated);
            assert_eq!(config.contract.owner_address.as_deref(), Some("0xabc"));

            let contract = config.contract.to_contract().map_err(|e| e.to_string())?;
            assert_eq!(
                contract.function(LendAction::LenderClaimNft).function,
                "lender_claim_nft"
            );
            Ok(())
        });
    }

    #[test]
    fn test_environment_applies_without_file() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BORROWLEND_TRANSACTION__MAX_GAS_AMOUNT", "9000");
            jail.set_env("BORROWLEND_LOGGING__FORMAT", "json");

            let config = ConfigLoader::load_or_default("absent.yaml").map_err(|e| e.to_string())?;

            assert_eq!(config.transaction.max_gas_amount, 9000);
            assert_eq!(config.logging.format, "json");
            assert_eq!(config.network.name, "devnet");
            Ok(())
        });
    }

    fn config_default_address() -> String {
        types::DEFAULT_MODULE_ADDRESS.to_string()
    }
}
