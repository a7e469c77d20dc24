//! Borrow/lend transaction builder

use crate::payloads::BorrowLendPayloads;
use config::Config;
use node_client::{NodeClient, TransactionBuilder};
use tracing::Instrument;
use types::utils::generate_correlation_id;
use types::{
    AccountAddress, BorrowLendContract, EntryFunctionPayload, LendAction, RawTransaction, Result,
};

/// One method per contract entry point; each returns an unsigned transaction
#[derive(Debug, Clone)]
pub struct BorrowLendSdk<B = NodeClient> {
    builder: B,
    payloads: BorrowLendPayloads,
    owner: AccountAddress,
}

impl BorrowLendSdk<NodeClient> {
    /// Node-backed SDK from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let builder = NodeClient::new(&config.network, config.transaction.clone())?;
        let contract = config.contract.to_contract()?;
        let owner = config.contract.owner()?;
        Ok(Self::new(builder, contract, owner))
    }
}

impl<B: TransactionBuilder> BorrowLendSdk<B> {
    /// `owner` sends the pool administration calls
    pub fn new(builder: B, contract: BorrowLendContract, owner: AccountAddress) -> Self {
        Self {
            builder,
            payloads: BorrowLendPayloads::new(contract),
            owner,
        }
    }

    /// Pool administration is sent by the module account itself
    pub fn with_module_owner(builder: B, contract: BorrowLendContract) -> Self {
        let owner = contract.address();
        Self::new(builder, contract, owner)
    }

    pub fn payloads(&self) -> &BorrowLendPayloads {
        &self.payloads
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn owner(&self) -> AccountAddress {
        self.owner
    }

    /// Create a pool for a collection, sent by the pool owner
    pub async fn create_pool(
        &self,
        collection: &str,
        creator: AccountAddress,
        daily_rate: u64,
        days: u64,
    ) -> Result<RawTransaction> {
        let payload = self.payloads.create_pool(creator, collection, daily_rate, days);
        self.build(LendAction::CreatePool, self.owner, payload).await
    }

    /// Change a pool's rate, duration and active flag, sent by the pool owner
    pub async fn update_pool(
        &self,
        collection: &str,
        daily_rate: u64,
        days: u64,
        active: bool,
    ) -> Result<RawTransaction> {
        let payload = self.payloads.update_pool(collection, daily_rate, days, active);
        self.build(LendAction::UpdatePool, self.owner, payload).await
    }

    /// Lender commits `number_of_offers` offers of `offer_per_nft` each
    pub async fn lender_offer(
        &self,
        lender: AccountAddress,
        collection: &str,
        offer_per_nft: u64,
        number_of_offers: u64,
    ) -> Result<RawTransaction> {
        let payload = self
            .payloads
            .lender_offer(collection, offer_per_nft, number_of_offers);
        self.build(LendAction::LenderOffer, lender, payload).await
    }

    pub async fn lender_offer_cancel(
        &self,
        lender: AccountAddress,
        collection: &str,
    ) -> Result<RawTransaction> {
        let payload = self.payloads.lender_offer_cancel(collection);
        self.build(LendAction::LenderOfferCancel, lender, payload).await
    }

    /// Borrower takes `lender`'s offer, pledging the token as collateral
    pub async fn borrower_select_offer(
        &self,
        borrower: AccountAddress,
        collection: &str,
        token_name: &str,
        property_version: u64,
        lender: AccountAddress,
    ) -> Result<RawTransaction> {
        let payload = self
            .payloads
            .borrower_select_offer(collection, token_name, property_version, lender);
        self.build(LendAction::BorrowerSelectOffer, borrower, payload)
            .await
    }

    pub async fn borrower_pay_loan(
        &self,
        borrower: AccountAddress,
        collection: &str,
        token_name: &str,
    ) -> Result<RawTransaction> {
        let payload = self.payloads.borrower_pay_loan(collection, token_name);
        self.build(LendAction::BorrowerPayLoan, borrower, payload).await
    }

    pub async fn lender_claim_nft(
        &self,
        lender: AccountAddress,
        collection: &str,
        token_name: &str,
    ) -> Result<RawTransaction> {
        let payload = self.payloads.lender_claim_nft(collection, token_name);
        self.build(LendAction::LenderClaimNft, lender, payload).await
    }

    async fn build(
        &self,
        action: LendAction,
        sender: AccountAddress,
        payload: EntryFunctionPayload,
    ) -> Result<RawTransaction> {
        let span = tracing::info_span!(
            "borrowlend",
            action = %action,
            correlation_id = %generate_correlation_id()
        );

        async {
            tracing::debug!(sender = %sender, function = %payload.function, "Building transaction");
            self.builder.generate_transaction(sender, payload).await
        }
        .instrument(span)
        .await
    }
}
