//! Borrow/lend contract surface
//!
//! Names the seven lending actions and maps each one to the entry function
//! it calls inside the deployed module.

use crate::address::AccountAddress;
use crate::error::{BorrowLendError, Result};
use crate::payload::{EntryFunctionId, ModuleId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Default address of the deployed borrow/lend module
pub const DEFAULT_MODULE_ADDRESS: &str =
    "0x147e4d3a5b10eaed2a93536e284c23096dfcea9ac61f0a8420e5d01fbd8f0ea8";

/// Default module name
pub const DEFAULT_MODULE_NAME: &str = "borrowlend";

/// A lending action exposed by the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LendAction {
    CreatePool,
    UpdatePool,
    LenderOffer,
    LenderOfferCancel,
    BorrowerSelectOffer,
    BorrowerPayLoan,
    LenderClaimNft,
}

impl LendAction {
    pub const ALL: [LendAction; 7] = [
        LendAction::CreatePool,
        LendAction::UpdatePool,
        LendAction::LenderOffer,
        LendAction::LenderOfferCancel,
        LendAction::BorrowerSelectOffer,
        LendAction::BorrowerPayLoan,
        LendAction::LenderClaimNft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LendAction::CreatePool => "create_pool",
            LendAction::UpdatePool => "update_pool",
            LendAction::LenderOffer => "lender_offer",
            LendAction::LenderOfferCancel => "lender_offer_cancel",
            LendAction::BorrowerSelectOffer => "borrower_select_offer",
            LendAction::BorrowerPayLoan => "borrower_pay_loan",
            LendAction::LenderClaimNft => "lender_claim_nft",
        }
    }
}

impl fmt::Display for LendAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LendAction {
    type Err = BorrowLendError;

    fn from_str(s: &str) -> Result<Self> {
        LendAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| BorrowLendError::InvalidIdentifier(format!("unknown action '{}'", s)))
    }
}

/// Starting point for the entry point table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryPointPreset {
    /// Entry points as deployed: cancel shares `lender_offer`, claim shares
    /// `borrow_select`
    #[default]
    Documented,
    /// Separate `lender_offer_cancel` and `lender_claim_nft` entry points
    Dedicated,
}

/// Function name called for each action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointTable {
    functions: BTreeMap<LendAction, String>,
}

impl EntryPointTable {
    pub fn from_preset(preset: EntryPointPreset) -> Self {
        let (cancel, claim) = match preset {
            EntryPointPreset::Documented => ("lender_offer", "borrow_select"),
            EntryPointPreset::Dedicated => ("lender_offer_cancel", "lender_claim_nft"),
        };

        let functions = [
            (LendAction::CreatePool, "initiate_create_pool"),
            (LendAction::UpdatePool, "update_pool"),
            (LendAction::LenderOffer, "lender_offer"),
            (LendAction::LenderOfferCancel, cancel),
            (LendAction::BorrowerSelectOffer, "borrow_select"),
            (LendAction::BorrowerPayLoan, "borrower_pay_loan"),
            (LendAction::LenderClaimNft, claim),
        ]
        .into_iter()
        .map(|(action, name)| (action, name.to_string()))
        .collect();

        Self { functions }
    }

    /// Replace the function called for one action
    pub fn with_override(mut self, action: LendAction, function: impl Into<String>) -> Self {
        self.functions.insert(action, function.into());
        self
    }

    pub fn function(&self, action: LendAction) -> &str {
        self.functions
            .get(&action)
            .map(String::as_str)
            .unwrap_or_else(|| action.as_str())
    }

    /// Pairs of distinct actions that resolve to the same entry function
    pub fn shared_entry_points(&self) -> Vec<(LendAction, LendAction)> {
        let mut shared = Vec::new();
        for (i, a) in LendAction::ALL.iter().enumerate() {
            for b in &LendAction::ALL[i + 1..] {
                if self.function(*a) == self.function(*b) {
                    shared.push((*a, *b));
                }
            }
        }
        shared
    }
}

impl Default for EntryPointTable {
    fn default() -> Self {
        Self::from_preset(EntryPointPreset::default())
    }
}

/// The deployed module plus its entry point table
#[derive(Debug, Clone)]
pub struct BorrowLendContract {
    module: ModuleId,
    entry_points: EntryPointTable,
    functions: BTreeMap<LendAction, EntryFunctionId>,
}

impl BorrowLendContract {
    /// Resolve every action's function id up front
    pub fn new(module: ModuleId, entry_points: EntryPointTable) -> Result<Self> {
        let functions = LendAction::ALL
            .into_iter()
            .map(|action| Ok((action, module.function(entry_points.function(action))?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            module,
            entry_points,
            functions,
        })
    }

    pub fn module(&self) -> &ModuleId {
        &self.module
    }

    pub fn address(&self) -> AccountAddress {
        self.module.address
    }

    pub fn entry_points(&self) -> &EntryPointTable {
        &self.entry_points
    }

    pub fn function(&self, action: LendAction) -> &EntryFunctionId {
        &self.functions[&action]
    }
}

impl Default for BorrowLendContract {
    fn default() -> Self {
        let module = ModuleId {
            address: DEFAULT_MODULE_ADDRESS
                .parse()
                .unwrap_or(AccountAddress::ZERO),
            name: DEFAULT_MODULE_NAME.to_string(),
        };
        let entry_points = EntryPointTable::default();
        let functions = LendAction::ALL
            .into_iter()
            .map(|action| {
                (
                    action,
                    EntryFunctionId {
                        module: module.clone(),
                        function: entry_points.function(action).to_string(),
                    },
                )
            })
            .collect();

        Self {
            module,
            entry_points,
            functions,
        }
    }
}
