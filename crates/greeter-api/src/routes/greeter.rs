//! `POST /api/solana/greeter`: create the payer's greeting account.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use greeter_solana_client::{parse_pubkey, parse_secret_key, GreeterClient};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

// No Debug: `secret` must never reach the logs.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreeterRequest {
    pub network: String,
    pub secret: String,
    pub program_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GreeterResponse {
    pub hash: String,
    pub greeter: String,
}

pub async fn handle(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GreeterRequest>, JsonRejection>,
) -> Result<Json<GreeterResponse>, ApiError> {
    let Json(req) = payload?;
    let rpc = state.backend_for(&req.network)?;
    let program_id = parse_pubkey("programId", &req.program_id)?;
    let payer = parse_secret_key(&req.secret)?;

    let client = GreeterClient::new(program_id, rpc);
    let created = client.create_greeting_account(&payer).await?;
    info!(network = %req.network, %program_id, greeter = %created.greeter, "greeter created");

    Ok(Json(GreeterResponse { hash: created.signature.to_string(), greeter: created.greeter.to_string() }))
}
