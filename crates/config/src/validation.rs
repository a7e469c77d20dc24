//! Configuration validation utilities

use crate::schema::Config;
use types::utils::is_valid_identifier;
use types::AccountAddress;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate complete configuration
    pub fn validate(config: &Config) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::validate_network(config, &mut report);
        Self::validate_contract(config, &mut report);
        Self::validate_transaction(config, &mut report);
        Self::validate_logging(config, &mut report);

        report
    }

    fn validate_network(config: &Config, report: &mut ValidationReport) {
        let network = &config.network;

        if network.node_url.is_empty() {
            report.add_error("network.node_url", "Node URL cannot be empty");
        } else if !is_http_url(&network.node_url) {
            report.add_error(
                "network.node_url",
                &format!("Node URL must start with http:// or https://: {}", network.node_url),
            );
        }

        match network.faucet_url.as_deref() {
            Some(url) if !is_http_url(url) => {
                report.add_error(
                    "network.faucet_url",
                    &format!("Faucet URL must start with http:// or https://: {}", url),
                );
            }
            Some(_) if network.name == "mainnet" => {
                report.add_warning(
                    "network.faucet_url",
                    "Mainnet has no faucet; the URL will be unused",
                );
            }
            _ => {}
        }

        if let Some(chain_id) = network.chain_id {
            match network.name.as_str() {
                "mainnet" if chain_id != 1 => {
                    report.add_warning("network.chain_id", "Chain ID 1 expected for mainnet");
                }
                "testnet" if chain_id != 2 => {
                    report.add_warning("network.chain_id", "Chain ID 2 expected for testnet");
                }
                _ => {}
            }
        }

        if network.timeout_seconds == 0 {
            report.add_error("network.timeout_seconds", "Timeout must be greater than 0");
        } else if network.timeout_seconds > 300 {
            report.add_warning("network.timeout_seconds", "Timeout is very high (> 300s)");
        }
    }

    fn validate_contract(config: &Config, report: &mut ValidationReport) {
        let contract = &config.contract;

        if let Err(e) = AccountAddress::from_hex_literal(&contract.module_address) {
            report.add_error("contract.module_address", &e.to_string());
        }

        if let Some(owner) = contract.owner_address.as_deref() {
            if let Err(e) = AccountAddress::from_hex_literal(owner) {
                report.add_error("contract.owner_address", &e.to_string());
            }
        }

        if !is_valid_identifier(&contract.module_name) {
            report.add_error(
                "contract.module_name",
                &format!("Invalid Move identifier: '{}'", contract.module_name),
            );
        }

        let table = contract.entry_points.table();
        for (action, function) in &contract.entry_points.overrides {
            if !is_valid_identifier(function) {
                report.add_error(
                    &format!("contract.entry_points.overrides.{}", action),
                    &format!("Invalid Move identifier: '{}'", function),
                );
            }
        }

        for (a, b) in table.shared_entry_points() {
            report.add_warning(
                "contract.entry_points",
                &format!(
                    "'{}' and '{}' both call entry function '{}'",
                    a,
                    b,
                    table.function(a)
                ),
            );
        }
    }

    fn validate_transaction(config: &Config, report: &mut ValidationReport) {
        let options = &config.transaction;

        if options.max_gas_amount == 0 {
            report.add_error("transaction.max_gas_amount", "Max gas amount cannot be 0");
        }

        if options.gas_unit_price == Some(0) {
            report.add_warning(
                "transaction.gas_unit_price",
                "Gas unit price of 0 will be rejected by most nodes",
            );
        }

        if options.expiration_seconds == 0 {
            report.add_error("transaction.expiration_seconds", "Expiration cannot be 0");
        } else if options.expiration_seconds > 3600 {
            report.add_warning(
                "transaction.expiration_seconds",
                "Expiration is very long (> 1 hour)",
            );
        }
    }

    fn validate_logging(config: &Config, report: &mut ValidationReport) {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&config.logging.level.as_str()) {
            report.add_error(
                "logging.level",
                &format!(
                    "Invalid log level: {}. Valid levels: {:?}",
                    config.logging.level, valid_levels
                ),
            );
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&config.logging.format.as_str()) {
            report.add_error(
                "logging.format",
                &format!(
                    "Invalid log format: {}. Valid formats: {:?}",
                    config.logging.format, valid_formats
                ),
            );
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Validation report containing errors and warnings
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

/// A validation issue (error or warning)
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn summary(&self) -> String {
        format!("Validation: {} errors, {} warnings", self.errors.len(), self.warnings.len())
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
