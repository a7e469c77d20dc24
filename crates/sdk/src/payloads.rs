//! Entry function payloads for each lending action
//!
//! Argument order here is the order the on-chain entry functions declare
//! their parameters. Values are not checked locally; the contract is the
//! only authority on what it accepts.

use types::{AccountAddress, BorrowLendContract, EntryFunctionPayload, LendAction, MoveValue};

/// Builds borrow/lend payloads against one deployed module
#[derive(Debug, Clone)]
pub struct BorrowLendPayloads {
    contract: BorrowLendContract,
}

impl BorrowLendPayloads {
    pub fn new(contract: BorrowLendContract) -> Self {
        Self { contract }
    }

    pub fn contract(&self) -> &BorrowLendContract {
        &self.contract
    }

    /// `initiate_create_pool(creator, collection, daily_rate, days)`
    pub fn create_pool(
        &self,
        creator: AccountAddress,
        collection: &str,
        daily_rate: u64,
        days: u64,
    ) -> EntryFunctionPayload {
        self.payload(
            LendAction::CreatePool,
            vec![creator.into(), collection.into(), daily_rate.into(), days.into()],
        )
    }

    /// `update_pool(collection, daily_rate, days, active)`
    pub fn update_pool(
        &self,
        collection: &str,
        daily_rate: u64,
        days: u64,
        active: bool,
    ) -> EntryFunctionPayload {
        self.payload(
            LendAction::UpdatePool,
            vec![collection.into(), daily_rate.into(), days.into(), active.into()],
        )
    }

    /// `lender_offer(collection, offer_per_nft, number_of_offers)`
    pub fn lender_offer(
        &self,
        collection: &str,
        offer_per_nft: u64,
        number_of_offers: u64,
    ) -> EntryFunctionPayload {
        self.payload(
            LendAction::LenderOffer,
            vec![collection.into(), offer_per_nft.into(), number_of_offers.into()],
        )
    }

    /// Cancel a lender's offers on a collection
    pub fn lender_offer_cancel(&self, collection: &str) -> EntryFunctionPayload {
        self.payload(LendAction::LenderOfferCancel, vec![collection.into()])
    }

    /// `borrow_select(collection, token_name, property_version, lender)`
    pub fn borrower_select_offer(
        &self,
        collection: &str,
        token_name: &str,
        property_version: u64,
        lender: AccountAddress,
    ) -> EntryFunctionPayload {
        self.payload(
            LendAction::BorrowerSelectOffer,
            vec![
                collection.into(),
                token_name.into(),
                property_version.into(),
                lender.into(),
            ],
        )
    }

    /// `borrower_pay_loan(collection, token_name)`
    pub fn borrower_pay_loan(&self, collection: &str, token_name: &str) -> EntryFunctionPayload {
        self.payload(
            LendAction::BorrowerPayLoan,
            vec![collection.into(), token_name.into()],
        )
    }

    /// Lender claims the collateral NFT of a defaulted loan
    pub fn lender_claim_nft(&self, collection: &str, token_name: &str) -> EntryFunctionPayload {
        self.payload(
            LendAction::LenderClaimNft,
            vec![collection.into(), token_name.into()],
        )
    }

    fn payload(&self, action: LendAction, arguments: Vec<MoveValue>) -> EntryFunctionPayload {
        EntryFunctionPayload::new(self.contract.function(action).clone(), arguments)
    }
}

impl Default for BorrowLendPayloads {
    fn default() -> Self {
        Self::new(BorrowLendContract::default())
    }
}
