//! Faucet client for funding test accounts

use crate::client::{parse_response, request_error};
use reqwest::Client;
use std::time::Duration;
use types::utils::join_url;
use types::{AccountAddress, BorrowLendError, NetworkConfig, Result};

/// HTTP client for a devnet/testnet faucet
#[derive(Debug, Clone)]
pub struct FaucetClient {
    faucet_url: String,
    http_client: Client,
}

impl FaucetClient {
    /// Create a faucet client from the network endpoints
    pub fn new(network: &NetworkConfig) -> Result<Self> {
        let faucet_url = network.faucet_url.clone().ok_or_else(|| {
            BorrowLendError::Config(format!("No faucet configured for network {}", network.name))
        })?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(network.timeout_seconds))
            .build()
            .map_err(|e| {
                BorrowLendError::Internal(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            faucet_url,
            http_client,
        })
    }

    /// Mint `amount` octas into `address`, creating the account if needed.
    /// Returns the hashes of the funding transactions.
    pub async fn fund_account(&self, address: AccountAddress, amount: u64) -> Result<Vec<String>> {
        let url = join_url(&self.faucet_url, "mint");

        tracing::info!(address = %address, amount = amount, "Requesting faucet funds");

        let response = self
            .http_client
            .post(&url)
            .query(&[("amount", amount.to_string()), ("address", address.to_string())])
            .send()
            .await
            .map_err(|e| request_error(&url, e))?;

        parse_response(&url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::NodeError;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_fund_account() {
        let mock_server = MockServer::start().await;
        let address = AccountAddress::from_hex_literal("0xb0b").unwrap();

        Mock::given(method("POST"))
            .and(path("/mint"))
            .and(query_param("amount", "1000000000"))
            .and(query_param("address", address.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["0xf00d"])))
            .mount(&mock_server)
            .await;

        let network = NetworkConfig {
            faucet_url: Some(mock_server.uri()),
            ..NetworkConfig::default()
        };
        let faucet = FaucetClient::new(&network).unwrap();
        let hashes = faucet.fund_account(address, 1_000_000_000).await.unwrap();

        assert_eq!(hashes, vec!["0xf00d".to_string()]);
    }

    #[tokio::test]
    async fn test_fund_account_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mint"))
            .respond_with(ResponseTemplate::new(500).set_body_string("faucet drained"))
            .mount(&mock_server)
            .await;

        let network = NetworkConfig {
            faucet_url: Some(mock_server.uri()),
            ..NetworkConfig::default()
        };
        let faucet = FaucetClient::new(&network).unwrap();
        let err = faucet
            .fund_account(AccountAddress::THREE, 1)
            .await
            .unwrap_err();

        match err {
            BorrowLendError::Node(NodeError::Api { status, message, .. }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "faucet drained");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_faucet_url() {
        let network = NetworkConfig {
            name: "mainnet".to_string(),
            faucet_url: None,
            ..NetworkConfig::default()
        };
        assert!(matches!(FaucetClient::new(&network), Err(BorrowLendError::Config(_))));
    }
}
