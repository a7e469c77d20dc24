//! Transaction building and signing seams

use async_trait::async_trait;
use std::sync::Arc;
use types::{AccountAddress, EntryFunctionPayload, RawTransaction, Result, TransactionSignature};

/// Turns an entry function payload into an unsigned transaction for a sender
#[async_trait]
pub trait TransactionBuilder: Send + Sync {
    /// Build a raw transaction, filling sequence number, gas and expiry
    async fn generate_transaction(
        &self,
        sender: AccountAddress,
        payload: EntryFunctionPayload,
    ) -> Result<RawTransaction>;
}

/// External signer holding an account key
///
/// No implementation ships with this crate; wallets and key stores plug in here.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Account the signer signs for
    fn address(&self) -> AccountAddress;

    /// Sign the node-encoded signing message
    async fn sign(&self, signing_message: &[u8]) -> Result<TransactionSignature>;
}

#[async_trait]
impl<T: TransactionBuilder + ?Sized> TransactionBuilder for Arc<T> {
    async fn generate_transaction(
        &self,
        sender: AccountAddress,
        payload: EntryFunctionPayload,
    ) -> Result<RawTransaction> {
        (**self).generate_transaction(sender, payload).await
    }
}
