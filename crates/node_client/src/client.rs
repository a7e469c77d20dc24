//! Node REST client implementation

use crate::traits::{TransactionBuilder, TransactionSigner};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tokio::time::Instant;
use types::utils::{expiration_from_now, join_url, sanitize_for_logging};
use types::{
    AccountAddress, AccountInfo, BorrowLendError, EntryFunctionPayload, GasEstimation,
    LedgerInfo, NetworkConfig, NodeError, NodeErrorBody, PendingTransaction, RawTransaction,
    Result, SignedTransaction, TransactionInfo, TransactionOptions,
};

/// Interval between transaction status polls
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// HTTP client for a fullnode's REST API
#[derive(Debug, Clone)]
pub struct NodeClient {
    base_url: String,
    http_client: Client,
    options: TransactionOptions,
    chain_id: Option<u8>,
}

impl NodeClient {
    /// Create a new node client
    pub fn new(network: &NetworkConfig, options: TransactionOptions) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(network.timeout_seconds))
            .user_agent(concat!("borrowlend-sdk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                BorrowLendError::Internal(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: api_base_url(&network.node_url),
            http_client,
            options,
            chain_id: network.chain_id,
        })
    }

    /// REST root, always ending in /v1
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &TransactionOptions {
        &self.options
    }

    /// Ledger summary, including the chain id
    pub async fn ledger_info(&self) -> Result<LedgerInfo> {
        self.get_json("").await
    }

    /// Account summary, including the next sequence number
    pub async fn account(&self, address: AccountAddress) -> Result<AccountInfo> {
        self.get_json(&format!("accounts/{}", address)).await
    }

    /// Node's current gas price estimate
    pub async fn estimate_gas_price(&self) -> Result<GasEstimation> {
        self.get_json("estimate_gas_price").await
    }

    /// Bytes an external signer must sign for this transaction
    pub async fn encode_submission(&self, raw: &RawTransaction) -> Result<Vec<u8>> {
        let encoded: String = self.post_json("transactions/encode_submission", raw).await?;
        hex::decode(encoded.trim_start_matches("0x")).map_err(|e| {
            NodeError::InvalidResponse {
                message: format!("signing message is not hex: {}", e),
            }
            .into()
        })
    }

    /// Submit a signed transaction
    pub async fn submit_transaction(
        &self,
        signed: &SignedTransaction,
    ) -> Result<PendingTransaction> {
        let pending: PendingTransaction = self.post_json("transactions", signed).await?;

        tracing::info!(
            sender = %sanitize_for_logging(&signed.raw.sender.to_string()),
            function = %signed.raw.payload.function,
            hash = %pending.hash,
            "Transaction submitted"
        );

        Ok(pending)
    }

    /// Encode, sign with the external signer, and submit
    pub async fn sign_and_submit(
        &self,
        signer: &dyn TransactionSigner,
        raw: RawTransaction,
    ) -> Result<PendingTransaction> {
        if signer.address() != raw.sender {
            return Err(BorrowLendError::Signing(format!(
                "signer {} cannot sign for sender {}",
                signer.address(),
                raw.sender
            )));
        }

        let signing_message = self.encode_submission(&raw).await?;
        let signature = signer.sign(&signing_message).await?;
        self.submit_transaction(&SignedTransaction::new(raw, signature))
            .await
    }

    /// Look up a transaction by hash
    pub async fn transaction_by_hash(&self, hash: &str) -> Result<TransactionInfo> {
        self.get_json(&format!("transactions/by_hash/{}", hash)).await
    }

    /// Poll until the transaction leaves the mempool
    pub async fn wait_for_transaction(
        &self,
        hash: &str,
        timeout: Duration,
    ) -> Result<TransactionInfo> {
        let deadline = Instant::now() + timeout;

        loop {
            match self.transaction_by_hash(hash).await {
                Ok(info) if !info.is_pending() => {
                    if info.success == Some(false) {
                        return Err(NodeError::TransactionFailed {
                            hash: hash.to_string(),
                            vm_status: info.vm_status.unwrap_or_default(),
                        }
                        .into());
                    }
                    tracing::debug!(hash = %hash, version = ?info.version, "Transaction committed");
                    return Ok(info);
                }
                Ok(_) => {}
                // Not indexed yet
                Err(BorrowLendError::Node(NodeError::Api { status: 404, .. })) => {}
                Err(e) => return Err(e),
            }

            if Instant::now() >= deadline {
                return Err(NodeError::WaitTimeout {
                    hash: hash.to_string(),
                }
                .into());
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn gas_unit_price(&self) -> Result<u64> {
        match self.options.gas_unit_price {
            Some(price) => Ok(price),
            None => Ok(self.estimate_gas_price().await?.gas_estimate),
        }
    }

    async fn chain_id(&self) -> Result<u8> {
        match self.chain_id {
            Some(chain_id) => Ok(chain_id),
            None => Ok(self.ledger_info().await?.chain_id),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| request_error(&url, e))?;

        parse_response(&url, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| request_error(&url, e))?;

        parse_response(&url, response).await
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            join_url(&self.base_url, path)
        }
    }
}

#[async_trait]
impl TransactionBuilder for NodeClient {
    async fn generate_transaction(
        &self,
        sender: AccountAddress,
        payload: EntryFunctionPayload,
    ) -> Result<RawTransaction> {
        let (account, gas_unit_price, chain_id) =
            tokio::try_join!(self.account(sender), self.gas_unit_price(), self.chain_id())?;

        let raw = RawTransaction {
            sender,
            sequence_number: account.sequence_number,
            max_gas_amount: self.options.max_gas_amount,
            gas_unit_price,
            expiration_timestamp_secs: expiration_from_now(self.options.expiration_seconds),
            payload,
            chain_id,
        };

        tracing::debug!(
            sender = %sanitize_for_logging(&sender.to_string()),
            function = %raw.payload.function,
            sequence_number = raw.sequence_number,
            gas_unit_price = raw.gas_unit_price,
            chain_id = raw.chain_id,
            "Generated transaction"
        );

        Ok(raw)
    }
}

/// Append /v1 unless the URL already ends with it
fn api_base_url(node_url: &str) -> String {
    let trimmed = node_url.trim_end_matches('/');
    if trimmed.ends_with("/v1") {
        trimmed.to_string()
    } else {
        format!("{}/v1", trimmed)
    }
}

pub(crate) fn request_error(url: &str, e: reqwest::Error) -> BorrowLendError {
    if e.is_timeout() {
        NodeError::Timeout {
            url: url.to_string(),
        }
        .into()
    } else {
        NodeError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        }
        .into()
    }
}

/// Decode a success body, or the node's error body on failure statuses
pub(crate) async fn parse_response<T: DeserializeOwned>(
    url: &str,
    response: Response,
) -> Result<T> {
    let status = response.status();
    let raw_text = response.text().await.map_err(|e| NodeError::InvalidResponse {
        message: format!("error reading response body from {}: {}", url, e),
    })?;

    if !status.is_success() {
        let (message, error_code) = match serde_json::from_str::<NodeErrorBody>(&raw_text) {
            Ok(body) => (body.message, body.error_code),
            Err(_) => (raw_text, None),
        };
        tracing::warn!(
            url = %url,
            status = status.as_u16(),
            error_code = ?error_code,
            "Node returned error"
        );
        return Err(NodeError::Api {
            status: status.as_u16(),
            message,
            error_code,
        }
        .into());
    }

    serde_json::from_str(&raw_text).map_err(|e| {
        NodeError::InvalidResponse {
            message: format!("{} | raw: {}", e, raw_text),
        }
        .into()
    })
}
