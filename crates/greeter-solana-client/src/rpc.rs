//! RPC seam between the greeter client and a Solana cluster.
//!
//! [`GreeterClient`](crate::GreeterClient) only needs four calls from a node.
//! They sit behind [`RpcBackend`] so the HTTP layer can be exercised without a
//! live cluster.

use std::time::Duration;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::hash::Hash;
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::errors::GreeterResult;

#[async_trait]
pub trait RpcBackend: Send + Sync {
    /// Lamports needed to keep an account of `space` bytes rent exempt.
    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> GreeterResult<u64>;

    async fn latest_blockhash(&self) -> GreeterResult<Hash>;

    /// Submit a signed transaction and wait until it reaches the backend's
    /// commitment level.
    async fn send_and_confirm(&self, tx: &Transaction) -> GreeterResult<Signature>;

    async fn account_data(&self, address: &Pubkey) -> GreeterResult<Vec<u8>>;
}

/// [`RpcBackend`] over the nonblocking JSON-RPC client, at `confirmed`
/// commitment.
pub struct SolanaRpc {
    rpc: RpcClient,
}

impl SolanaRpc {
    pub fn new(rpc_url: &str) -> Self {
        Self { rpc: RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed()) }
    }

    pub fn with_timeout(rpc_url: &str, timeout: Duration) -> Self {
        Self {
            rpc: RpcClient::new_with_timeout_and_commitment(
                rpc_url.to_string(),
                timeout,
                CommitmentConfig::confirmed(),
            ),
        }
    }
}

#[async_trait]
impl RpcBackend for SolanaRpc {
    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> GreeterResult<u64> {
        Ok(self.rpc.get_minimum_balance_for_rent_exemption(space).await?)
    }

    async fn latest_blockhash(&self) -> GreeterResult<Hash> {
        Ok(self.rpc.get_latest_blockhash().await?)
    }

    async fn send_and_confirm(&self, tx: &Transaction) -> GreeterResult<Signature> {
        Ok(self.rpc.send_and_confirm_transaction(tx).await?)
    }

    async fn account_data(&self, address: &Pubkey) -> GreeterResult<Vec<u8>> {
        Ok(self.rpc.get_account_data(address).await?)
    }
}
