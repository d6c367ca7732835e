//! Client for the greeter program.
//!
//! This client can:
//! - create the payer's seeded greeting account, funded for rent exemption
//! - send the counter-bump instruction
//! - read the current counter back
//!
//! Signing and fee payment always use the caller's keypair.

use std::sync::Arc;

use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

use crate::address::derive_greeting_address;
use crate::errors::GreeterResult;
use crate::instructions::{ix_create_greeting_account, ix_greet};
use crate::rpc::RpcBackend;
use crate::state::{greeting_size, GreetingAccount};

pub struct GreeterClient {
    pub program_id: Pubkey,
    rpc: Arc<dyn RpcBackend>,
}

/// Result of creating a greeting account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedGreeting {
    pub signature: Signature,
    pub greeter: Pubkey,
}

impl GreeterClient {
    pub fn new(program_id: Pubkey, rpc: Arc<dyn RpcBackend>) -> Self {
        Self { program_id, rpc }
    }

    pub fn derive_greeting(&self, payer: &Pubkey) -> GreeterResult<Pubkey> {
        derive_greeting_address(payer, &self.program_id)
    }

    /// Create the payer's greeting account with enough lamports to be rent
    /// exempt.
    pub async fn create_greeting_account(&self, payer: &Keypair) -> GreeterResult<CreatedGreeting> {
        let greeter = self.derive_greeting(&payer.pubkey())?;
        let space = greeting_size();
        let lamports = self.rpc.minimum_balance_for_rent_exemption(space).await?;
        debug!(%greeter, space, lamports, "creating greeting account");

        let ix = ix_create_greeting_account(&payer.pubkey(), &self.program_id, lamports, space as u64)?;
        let signature = self.send_transaction(payer, &[ix]).await?;
        info!(%greeter, %signature, "greeting account created");

        Ok(CreatedGreeting { signature, greeter })
    }

    /// Send a greeting to `greeting_account`, bumping its counter.
    pub async fn greet(&self, payer: &Keypair, greeting_account: &Pubkey) -> GreeterResult<Signature> {
        let ix = ix_greet(greeting_account, &self.program_id);
        let signature = self.send_transaction(payer, &[ix]).await?;
        info!(greeter = %greeting_account, %signature, "greeting sent");
        Ok(signature)
    }

    pub async fn read_counter(&self, greeting_account: &Pubkey) -> GreeterResult<u32> {
        read_greeting_counter(self.rpc.as_ref(), greeting_account).await
    }

    /// Sign `ixs` with `payer` as fee payer, then send and confirm.
    pub async fn send_transaction(&self, payer: &Keypair, ixs: &[Instruction]) -> GreeterResult<Signature> {
        let bh = self.rpc.latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), &[payer], bh);
        self.rpc.send_and_confirm(&tx).await
    }
}

/// Read the counter of any greeting account. No program id is required.
pub async fn read_greeting_counter(rpc: &dyn RpcBackend, greeting_account: &Pubkey) -> GreeterResult<u32> {
    let data = rpc.account_data(greeting_account).await?;
    Ok(GreetingAccount::from_account_data(&data)?.counter)
}
