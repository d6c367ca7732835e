//! Address derivation for greeting accounts.
//!
//! The greeting account is not a PDA: it is created by the payer with
//! `create_account_with_seed`, so its address is
//! `sha256(payer || GREETING_SEED || program_id)`.

use solana_program::pubkey::Pubkey;

use crate::constants::GREETING_SEED;
use crate::errors::GreeterResult;

/// Derive the greeting account owned by `program_id` for `payer`.
pub fn derive_greeting_address(payer: &Pubkey, program_id: &Pubkey) -> GreeterResult<Pubkey> {
    Ok(Pubkey::create_with_seed(payer, GREETING_SEED, program_id)?)
}
