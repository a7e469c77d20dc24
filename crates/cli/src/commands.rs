//! Command line definitions and handlers

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use config::Config;
use node_client::FaucetClient;
use sdk::BorrowLendSdk;
use serde_json::json;
use std::path::PathBuf;
use types::{AccountAddress, RawTransaction};

#[derive(Parser, Debug)]
#[command(
    name = "borrowlend",
    version,
    about = "Build unsigned transactions for the NFT borrow/lend module",
    long_about = "Builds one unsigned transaction per invocation and prints it as JSON. \
                  Sign it with your wallet or key store, then submit it to the node."
)]
pub struct Cli {
    /// Configuration file (default: $CONFIG_PATH or borrowlend.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also print the node-encoded signing message
    #[arg(long, global = true)]
    pub signing_message: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a lending pool for a collection (sent by the pool owner)
    CreatePool {
        #[arg(long)]
        collection: String,
        /// Collection creator address
        #[arg(long)]
        creator: AccountAddress,
        /// Daily interest rate
        #[arg(long)]
        daily_rate: u64,
        /// Loan duration in days
        #[arg(long)]
        days: u64,
    },

    /// Update a pool's terms (sent by the pool owner)
    UpdatePool {
        #[arg(long)]
        collection: String,
        #[arg(long)]
        daily_rate: u64,
        #[arg(long)]
        days: u64,
        /// Whether the pool accepts new loans
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        active: bool,
    },

    /// Offer loans against a collection
    LenderOffer {
        #[arg(long)]
        lender: AccountAddress,
        #[arg(long)]
        collection: String,
        /// Amount offered per NFT
        #[arg(long)]
        offer_per_nft: u64,
        /// Number of offers
        #[arg(long, default_value_t = 1)]
        offers: u64,
    },

    /// Cancel a lender's offers
    CancelOffer {
        #[arg(long)]
        lender: AccountAddress,
        #[arg(long)]
        collection: String,
    },

    /// Borrow against a token by selecting a lender's offer
    SelectOffer {
        #[arg(long)]
        borrower: AccountAddress,
        #[arg(long)]
        collection: String,
        #[arg(long)]
        token: String,
        /// Token property version
        #[arg(long, default_value_t = 0)]
        version: u64,
        #[arg(long)]
        lender: AccountAddress,
    },

    /// Repay a loan and recover the token
    PayLoan {
        #[arg(long)]
        borrower: AccountAddress,
        #[arg(long)]
        collection: String,
        #[arg(long)]
        token: String,
    },

    /// Claim the collateral of a defaulted loan
    ClaimNft {
        #[arg(long)]
        lender: AccountAddress,
        #[arg(long)]
        collection: String,
        #[arg(long)]
        token: String,
    },

    /// Fund an account from the configured faucet
    Fund {
        #[arg(long)]
        address: AccountAddress,
        /// Amount in octas
        #[arg(long, default_value_t = 1_000_000_000)]
        amount: u64,
    },

    /// Write an example configuration file
    InitConfig {
        #[arg(default_value = "borrowlend.yaml")]
        path: PathBuf,
    },
}

/// Execute a parsed command
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    let sdk = BorrowLendSdk::from_config(config).context("Failed to create SDK")?;

    let raw = match cli.command {
        Command::CreatePool {
            collection,
            creator,
            daily_rate,
            days,
        } => sdk.create_pool(&collection, creator, daily_rate, days).await?,
        Command::UpdatePool {
            collection,
            daily_rate,
            days,
            active,
        } => sdk.update_pool(&collection, daily_rate, days, active).await?,
        Command::LenderOffer {
            lender,
            collection,
            offer_per_nft,
            offers,
        } => sdk.lender_offer(lender, &collection, offer_per_nft, offers).await?,
        Command::CancelOffer { lender, collection } => {
            sdk.lender_offer_cancel(lender, &collection).await?
        }
        Command::SelectOffer {
            borrower,
            collection,
            token,
            version,
            lender,
        } => {
            sdk.borrower_select_offer(borrower, &collection, &token, version, lender)
                .await?
        }
        Command::PayLoan {
            borrower,
            collection,
            token,
        } => sdk.borrower_pay_loan(borrower, &collection, &token).await?,
        Command::ClaimNft {
            lender,
            collection,
            token,
        } => sdk.lender_claim_nft(lender, &collection, &token).await?,
        Command::Fund { address, amount } => {
            return fund(config, address, amount).await;
        }
        Command::InitConfig { .. } => return Ok(()),
    };

    let signing_message = if cli.signing_message {
        let bytes = sdk
            .builder()
            .encode_submission(&raw)
            .await
            .context("Failed to encode signing message")?;
        Some(format!("0x{}", hex::encode(bytes)))
    } else {
        None
    };

    print_transaction(&raw, signing_message)
}

async fn fund(config: &Config, address: AccountAddress, amount: u64) -> Result<()> {
    let faucet = FaucetClient::new(&config.network)?;
    let hashes = faucet.fund_account(address, amount).await?;

    tracing::info!(address = %address, amount = amount, "Account funded");
    println!("{}", serde_json::to_string_pretty(&json!({ "hashes": hashes }))?);
    Ok(())
}

fn print_transaction(raw: &RawTransaction, signing_message: Option<String>) -> Result<()> {
    let mut output = json!({
        "chain_id": raw.chain_id,
        "transaction": raw,
    });
    if let Some(message) = signing_message {
        output["signing_message"] = json!(message);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
