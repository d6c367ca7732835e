//! `POST /api/solana/setter`: bump the counter of a greeting account.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use greeter_solana_client::{parse_pubkey, parse_secret_key, GreeterClient};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetterRequest {
    pub network: String,
    pub secret: String,
    pub program_id: String,
    pub greeter: String,
}

/// Responds with the transaction signature as a bare JSON string.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SetterRequest>, JsonRejection>,
) -> Result<Json<String>, ApiError> {
    let Json(req) = payload?;
    let rpc = state.backend_for(&req.network)?;
    let greeter = parse_pubkey("greeter", &req.greeter)?;
    let program_id = parse_pubkey("programId", &req.program_id)?;
    let payer = parse_secret_key(&req.secret)?;

    let signature = GreeterClient::new(program_id, rpc).greet(&payer, &greeter).await?;
    Ok(Json(signature.to_string()))
}
