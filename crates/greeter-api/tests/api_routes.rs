//! api_routes.rs
//!
//! Drives the router in-process with an in-memory RPC backend, so no cluster
//! or open port is needed.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use greeter_api::{app, ApiConfig, AppState, BackendFactory};
use greeter_solana_client::memory::MemoryRpc;
use greeter_solana_client::{derive_greeting_address, RpcBackend};
use parking_lot::Mutex;
use serde_json::{json, Value};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use tower::ServiceExt;

/// Hands out the same backend for every endpoint and remembers the URLs asked for.
struct FixedBackend {
    rpc: Arc<MemoryRpc>,
    urls: Mutex<Vec<String>>,
}

impl BackendFactory for FixedBackend {
    fn connect(&self, rpc_url: &str) -> Arc<dyn RpcBackend> {
        self.urls.lock().push(rpc_url.to_string());
        self.rpc.clone()
    }
}

fn setup(rpc: MemoryRpc) -> (Router, Arc<FixedBackend>) {
    let backends = Arc::new(FixedBackend { rpc: Arc::new(rpc), urls: Default::default() });
    let router = app(AppState::new(ApiConfig::default(), backends.clone()));
    (router, backends)
}

fn secret_json(kp: &Keypair) -> String {
    serde_json::to_string(&kp.to_bytes().to_vec()).unwrap()
}

async fn post(router: Router, path: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    let res = router.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn is_base58_of_len(s: &str, len: usize) -> bool {
    bs58::decode(s).into_vec().map(|b| b.len() == len).unwrap_or(false)
}

#[tokio::test]
async fn greeter_returns_hash_and_address() {
    let (router, backends) = setup(MemoryRpc::new());
    let payer = Keypair::new();
    let program_id = Pubkey::new_unique();

    let body = json!({ "network": "devnet", "secret": secret_json(&payer), "programId": program_id.to_string() });
    let (status, out) = post(router, "/api/solana/greeter", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let hash = out["hash"].as_str().unwrap();
    let greeter = out["greeter"].as_str().unwrap();
    assert!(is_base58_of_len(hash, 64), "hash is not a signature: {hash}");
    assert!(is_base58_of_len(greeter, 32), "greeter is not an address: {greeter}");
    assert_eq!(greeter, derive_greeting_address(&payer.pubkey(), &program_id).unwrap().to_string());

    assert_eq!(backends.rpc.sent()[0].signatures[0].to_string(), hash);
    assert_eq!(backends.urls.lock().clone(), vec!["https://api.devnet.solana.com".to_string()]);
}

#[tokio::test]
async fn greeter_malformed_secret_is_500() {
    let (router, backends) = setup(MemoryRpc::new());
    let body = json!({ "network": "devnet", "secret": "[1, 2, 3", "programId": Pubkey::new_unique().to_string() });

    let (status, out) = post(router, "/api/solana/greeter", body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(out.as_str().unwrap().starts_with("invalid secret key"));
    assert!(backends.rpc.sent().is_empty());
}

#[tokio::test]
async fn greeter_malformed_program_id_is_500() {
    let (router, _) = setup(MemoryRpc::new());
    let body = json!({ "network": "devnet", "secret": secret_json(&Keypair::new()), "programId": "0OIl-not-base58" });

    let (status, out) = post(router, "/api/solana/greeter", body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(out.as_str().unwrap().starts_with("invalid programId"));
}

#[tokio::test]
async fn greeter_rpc_failure_is_500() {
    let (router, _) = setup(MemoryRpc::failing("insufficient funds"));
    let body = json!({ "network": "devnet", "secret": secret_json(&Keypair::new()), "programId": Pubkey::new_unique().to_string() });

    let (status, out) = post(router, "/api/solana/greeter", body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(out, json!("rpc request failed: insufficient funds"));
}

#[tokio::test]
async fn unknown_network_is_500() {
    let (router, backends) = setup(MemoryRpc::new());
    let body = json!({ "network": "moonnet", "secret": secret_json(&Keypair::new()), "programId": Pubkey::new_unique().to_string() });

    let (status, out) = post(router, "/api/solana/greeter", body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(out, json!("unknown network: moonnet"));
    assert!(backends.urls.lock().clone().is_empty());
}

#[tokio::test]
async fn malformed_body_is_500() {
    let (router, _) = setup(MemoryRpc::new());

    let (status, out) = post(router, "/api/solana/setter", "{\"network\": ").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(out.as_str().unwrap().starts_with("invalid request body"));
}

#[tokio::test]
async fn setter_returns_signature_string() {
    let (router, backends) = setup(MemoryRpc::new());
    let payer = Keypair::new();
    let program_id = Pubkey::new_unique();
    let greeter = derive_greeting_address(&payer.pubkey(), &program_id).unwrap();

    let body = json!({
        "network": "https://rpc.example.org",
        "secret": secret_json(&payer),
        "programId": program_id.to_string(),
        "greeter": greeter.to_string(),
    });
    let (status, out) = post(router, "/api/solana/setter", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let sig = out.as_str().unwrap();
    assert!(is_base58_of_len(sig, 64));

    let tx = &backends.rpc.sent()[0];
    let ix = &tx.message.instructions[0];
    assert!(ix.data.is_empty());
    assert_eq!(tx.message.account_keys[ix.accounts[0] as usize], greeter);
    assert_eq!(backends.urls.lock().clone(), vec!["https://rpc.example.org".to_string()]);
}

#[tokio::test]
async fn setter_malformed_secret_is_500() {
    let (router, _) = setup(MemoryRpc::new());
    let body = json!({
        "network": "devnet",
        "secret": "{\"not\": \"a key\"}",
        "programId": Pubkey::new_unique().to_string(),
        "greeter": Pubkey::new_unique().to_string(),
    });

    let (status, _) = post(router, "/api/solana/setter", body.to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn setter_malformed_program_id_is_500() {
    let (router, _) = setup(MemoryRpc::new());
    let body = json!({
        "network": "devnet",
        "secret": secret_json(&Keypair::new()),
        "programId": "",
        "greeter": Pubkey::new_unique().to_string(),
    });

    let (status, out) = post(router, "/api/solana/setter", body.to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(out.as_str().unwrap().starts_with("invalid programId"));
}

#[tokio::test]
async fn getter_reads_counter() {
    let rpc = MemoryRpc::new();
    let greeter = Pubkey::new_unique();
    rpc.set_account_data(greeter, 5u32.to_le_bytes().to_vec());
    let (router, _) = setup(rpc);

    let body = json!({ "network": "localnet", "greeter": greeter.to_string() });
    let (status, out) = post(router, "/api/solana/getter", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(out, json!({ "counter": 5 }));
}

#[tokio::test]
async fn health_reports_ok() {
    let (router, _) = setup(MemoryRpc::new());
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let res = router.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let out: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(out["ok"], json!(true));
}
