//! greeter-api
//!
//! HTTP front end for the greeter program. Each endpoint parses its JSON
//! body, builds the Solana objects it needs, submits through
//! `greeter-solana-client`, and returns either the result or a 500 carrying
//! the error message.

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::ApiError;
pub use state::{AppState, BackendFactory, SolanaBackendFactory};

/// Build the application router with its middleware stack.
pub fn app(state: AppState) -> Router {
    routes::router().with_state(Arc::new(state)).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(CorsLayer::permissive()),
    )
}
