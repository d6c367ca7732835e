//! `POST /api/solana/getter`: read the counter of a greeting account.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use greeter_solana_client::{parse_pubkey, read_greeting_counter};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GetterRequest {
    pub network: String,
    pub greeter: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetterResponse {
    pub counter: u32,
}

pub async fn handle(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GetterRequest>, JsonRejection>,
) -> Result<Json<GetterResponse>, ApiError> {
    let Json(req) = payload?;
    let rpc = state.backend_for(&req.network)?;
    let greeter = parse_pubkey("greeter", &req.greeter)?;

    let counter = read_greeting_counter(rpc.as_ref(), &greeter).await?;
    Ok(Json(GetterResponse { counter }))
}
