//! BorrowLend SDK
//!
//! Builds unsigned transactions for the NFT borrow/lend Move module. Each
//! lending action maps to one entry function; the SDK picks the function,
//! orders the arguments, and asks a [`TransactionBuilder`] for the raw
//! transaction. Signing and submission belong to the caller.
//!
//! ```ignore
//! let config = config::ConfigLoader::load_or_default("borrowlend.yaml")?;
//! let sdk = sdk::BorrowLendSdk::from_config(&config)?;
//! let raw = sdk.lender_offer(lender, "Mokshya Collection", 100, 1).await?;
//! ```

pub mod borrow_lend;
pub mod payloads;
pub mod token;

pub use borrow_lend::BorrowLendSdk;
pub use node_client::{TransactionBuilder, TransactionSigner};
pub use payloads::BorrowLendPayloads;
pub use token::{NewToken, TokenPayloads};
