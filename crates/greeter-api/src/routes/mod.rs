use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod getter;
pub mod greeter;
pub mod health;
pub mod setter;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::handle))
        .route("/api/solana/greeter", post(greeter::handle))
        .route("/api/solana/setter", post(setter::handle))
        .route("/api/solana/getter", post(getter::handle))
}
