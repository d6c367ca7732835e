//! In-memory [`RpcBackend`] for tests.
//!
//! Rent follows the default rent parameters, signatures are checked the way a
//! node would check them, and every accepted transaction is recorded.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use solana_program::hash::Hash;
use solana_program::pubkey::Pubkey;
use solana_program::rent::Rent;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::errors::{GreeterError, GreeterResult};
use crate::rpc::RpcBackend;

#[derive(Default)]
pub struct MemoryRpc {
    blockhash: Hash,
    accounts: Mutex<HashMap<Pubkey, Vec<u8>>>,
    sent: Mutex<Vec<Transaction>>,
    fail_sends: Option<String>,
}

impl MemoryRpc {
    pub fn new() -> Self {
        Self { blockhash: Hash::new_unique(), ..Self::default() }
    }

    /// A backend that rejects every submitted transaction with `msg`.
    pub fn failing(msg: &str) -> Self {
        Self { fail_sends: Some(msg.to_string()), ..Self::new() }
    }

    pub fn set_account_data(&self, address: Pubkey, data: Vec<u8>) {
        self.accounts.lock().insert(address, data);
    }

    /// Transactions accepted so far, oldest first.
    pub fn sent(&self) -> Vec<Transaction> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl RpcBackend for MemoryRpc {
    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> GreeterResult<u64> {
        Ok(Rent::default().minimum_balance(space))
    }

    async fn latest_blockhash(&self) -> GreeterResult<Hash> {
        Ok(self.blockhash)
    }

    async fn send_and_confirm(&self, tx: &Transaction) -> GreeterResult<Signature> {
        if let Some(msg) = &self.fail_sends {
            return Err(GreeterError::rpc(msg.clone()));
        }
        if tx.message.recent_blockhash != self.blockhash {
            return Err(GreeterError::rpc("blockhash not found"));
        }
        tx.verify().map_err(|e| GreeterError::rpc(e.to_string()))?;

        self.sent.lock().push(tx.clone());
        Ok(tx.signatures[0])
    }

    async fn account_data(&self, address: &Pubkey) -> GreeterResult<Vec<u8>> {
        self.accounts
            .lock()
            .get(address)
            .cloned()
            .ok_or_else(|| GreeterError::rpc(format!("AccountNotFound: pubkey={address}")))
    }
}
