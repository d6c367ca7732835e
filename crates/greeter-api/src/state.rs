//! Shared, read-only application state.

use std::sync::Arc;
use std::time::Duration;

use greeter_solana_client::{GreeterResult, Network, RpcBackend, SolanaRpc};

use crate::config::ApiConfig;

/// Produces an RPC backend for a resolved endpoint URL.
pub trait BackendFactory: Send + Sync {
    fn connect(&self, rpc_url: &str) -> Arc<dyn RpcBackend>;
}

/// Connects to real clusters over JSON-RPC.
#[derive(Debug, Clone)]
pub struct SolanaBackendFactory {
    pub timeout: Duration,
}

impl BackendFactory for SolanaBackendFactory {
    fn connect(&self, rpc_url: &str) -> Arc<dyn RpcBackend> {
        Arc::new(SolanaRpc::with_timeout(rpc_url, self.timeout))
    }
}

pub struct AppState {
    pub config: ApiConfig,
    pub backends: Arc<dyn BackendFactory>,
}

impl AppState {
    pub fn new(config: ApiConfig, backends: Arc<dyn BackendFactory>) -> Self {
        Self { config, backends }
    }

    /// State that talks to live clusters, with the configured RPC timeout.
    pub fn solana(config: ApiConfig) -> Self {
        let backends = Arc::new(SolanaBackendFactory { timeout: config.rpc_timeout });
        Self::new(config, backends)
    }

    /// Resolve a request's `network` field and connect to it.
    pub fn backend_for(&self, network: &str) -> GreeterResult<Arc<dyn RpcBackend>> {
        let network = Network::parse(network)?;
        let url = self.config.clusters.resolve(&network);
        tracing::debug!(%network, %url, "resolved rpc endpoint");
        Ok(self.backends.connect(&url))
    }
}
