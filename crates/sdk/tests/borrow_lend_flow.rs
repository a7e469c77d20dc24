//! Full lending flow against a mock node: mint an NFT, open a pool, take a
//! loan and repay it. Every step is signed by a stub signer, submitted, and
//! waited on.

use async_trait::async_trait;
use node_client::{FaucetClient, NodeClient, TransactionBuilder, TransactionSigner};
use sdk::{BorrowLendSdk, NewToken, TokenPayloads};
use serde_json::{json, Value};
use std::time::Duration;
use types::{
    AccountAddress, BorrowLendContract, NetworkConfig, RawTransaction, Result,
    TransactionOptions, TransactionSignature,
};
use wiremock::{
    matchers::{method, path, path_regex},
    Mock, MockServer, ResponseTemplate,
};

const COLLECTION: &str = "Mokshya Collection";
const TOKEN: &str = "Mokshya Token #1";
const DESCRIPTION: &str = "Mokshya Token for test";
const URI: &str = "https://github.com/mokshyaprotocol";

struct StubSigner {
    address: AccountAddress,
}

#[async_trait]
impl TransactionSigner for StubSigner {
    fn address(&self) -> AccountAddress {
        self.address
    }

    async fn sign(&self, _signing_message: &[u8]) -> Result<TransactionSignature> {
        Ok(TransactionSignature::Ed25519Signature {
            public_key: format!("0x{}", "ab".repeat(32)),
            signature: format!("0x{}", "cd".repeat(64)),
        })
    }
}

async fn mock_node() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/v1/accounts/0x[0-9a-f]{64}$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sequence_number": "0",
            "authentication_key": format!("0x{}", "00".repeat(32))
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/estimate_gas_price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"gas_estimate": 100})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chain_id": 4,
            "epoch": "1",
            "ledger_version": "1",
            "ledger_timestamp": "1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/transactions/encode_submission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("0xb5e97db07fa0bd0e")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/transactions"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"hash": "0xfeed"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/transactions/by_hash/0xfeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "user_transaction",
            "hash": "0xfeed",
            "success": true,
            "vm_status": "Executed successfully"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/mint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["0xfeed"])))
        .mount(&server)
        .await;

    server
}

async fn submit(node: &NodeClient, signer: &StubSigner, raw: RawTransaction) {
    let pending = node.sign_and_submit(signer, raw).await.unwrap();
    node.wait_for_transaction(&pending.hash, Duration::from_secs(5))
        .await
        .unwrap();
}

/// Bodies of every submitted transaction, in order
async fn submitted(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|req| req.method.as_str() == "POST" && req.url.path() == "/v1/transactions")
        .map(|req| serde_json::from_slice(&req.body).unwrap())
        .collect()
}

#[tokio::test]
async fn test_borrow_and_repay_flow() {
    let server = mock_node().await;
    let network = NetworkConfig {
        node_url: server.uri(),
        faucet_url: Some(server.uri()),
        ..NetworkConfig::default()
    };

    let node = NodeClient::new(&network, TransactionOptions::default()).unwrap();
    let faucet = FaucetClient::new(&network).unwrap();
    let contract = BorrowLendContract::default();
    let sdk = BorrowLendSdk::with_module_owner(node.clone(), contract.clone());

    let module_owner = StubSigner {
        address: contract.address(),
    };
    let borrower = StubSigner {
        address: AccountAddress::from_hex_literal("0xb0").unwrap(),
    };
    let lender = StubSigner {
        address: AccountAddress::from_hex_literal("0x1e").unwrap(),
    };

    // Borrower mints the collateral
    faucet.fund_account(borrower.address, 1_000_000_000).await.unwrap();

    let tokens = TokenPayloads::new();
    let raw = node
        .generate_transaction(
            borrower.address,
            tokens.create_collection(COLLECTION, DESCRIPTION, URI, 100, [false, false, false]),
        )
        .await
        .unwrap();
    submit(&node, &borrower, raw).await;

    let token = NewToken {
        collection: COLLECTION.to_string(),
        name: TOKEN.to_string(),
        description: DESCRIPTION.to_string(),
        balance: 5,
        maximum: 10,
        uri: URI.to_string(),
        royalty_payee: borrower.address,
        royalty_points_denominator: 100,
        royalty_points_numerator: 0,
        mutate_setting: vec![false; 6],
        property_keys: vec!["attack".to_string(), "num_of_use".to_string()],
        property_values: vec![vec![1, 2], vec![1, 2]],
        property_types: vec!["Bro".to_string(), "Ho".to_string()],
    };
    let raw = node
        .generate_transaction(borrower.address, tokens.create_token(&token))
        .await
        .unwrap();
    submit(&node, &borrower, raw).await;

    // Module owner opens the pool
    let raw = sdk
        .create_pool(COLLECTION, borrower.address, 86400, 1)
        .await
        .unwrap();
    submit(&node, &module_owner, raw).await;

    let raw = sdk.update_pool(COLLECTION, 86400, 1, true).await.unwrap();
    submit(&node, &module_owner, raw).await;

    // Lender funds an offer, borrower takes it and repays
    faucet.fund_account(lender.address, 1_000_000_000).await.unwrap();

    let raw = sdk.lender_offer(lender.address, COLLECTION, 100, 1).await.unwrap();
    submit(&node, &lender, raw).await;

    let raw = sdk
        .borrower_select_offer(borrower.address, COLLECTION, TOKEN, 0, lender.address)
        .await
        .unwrap();
    submit(&node, &borrower, raw).await;

    let raw = sdk
        .borrower_pay_loan(borrower.address, COLLECTION, TOKEN)
        .await
        .unwrap();
    submit(&node, &borrower, raw).await;

    let bodies = submitted(&server).await;
    let steps: Vec<(String, String)> = bodies
        .iter()
        .map(|body| {
            let function = body["payload"]["function"].as_str().unwrap();
            let name = function.rsplit("::").next().unwrap().to_string();
            (body["sender"].as_str().unwrap().to_string(), name)
        })
        .collect();

    let owner = contract.address().to_string();
    let b = borrower.address.to_string();
    let l = lender.address.to_string();
    assert_eq!(
        steps,
        vec![
            (b.clone(), "create_collection_script".to_string()),
            (b.clone(), "create_token_script".to_string()),
            (owner.clone(), "initiate_create_pool".to_string()),
            (owner, "update_pool".to_string()),
            (l.clone(), "lender_offer".to_string()),
            (b.clone(), "borrow_select".to_string()),
            (b.clone(), "borrower_pay_loan".to_string()),
        ]
    );

    assert_eq!(bodies[2]["payload"]["arguments"], json!([b, COLLECTION, "86400", "1"]));
    assert_eq!(bodies[3]["payload"]["arguments"], json!([COLLECTION, "86400", "1", true]));
    assert_eq!(bodies[4]["payload"]["arguments"], json!([COLLECTION, "100", "1"]));
    assert_eq!(bodies[5]["payload"]["arguments"], json!([COLLECTION, TOKEN, "0", l]));
    assert_eq!(bodies[6]["payload"]["arguments"], json!([COLLECTION, TOKEN]));

    for body in &bodies {
        assert_eq!(body["signature"]["type"], "ed25519_signature");
        assert_eq!(body["gas_unit_price"], "100");
    }
}
