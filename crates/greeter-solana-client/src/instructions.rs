//! Instruction builders for the greeter program.

use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_program::system_instruction;

use crate::address::derive_greeting_address;
use crate::constants::GREETING_SEED;
use crate::errors::GreeterResult;

/// Build the system instruction that creates and funds the payer's greeting
/// account, assigning it to `program_id`.
pub fn ix_create_greeting_account(
    payer: &Pubkey,
    program_id: &Pubkey,
    lamports: u64,
    space: u64,
) -> GreeterResult<Instruction> {
    let greeting = derive_greeting_address(payer, program_id)?;
    Ok(system_instruction::create_account_with_seed(
        payer,
        &greeting,
        payer,
        GREETING_SEED,
        lamports,
        space,
        program_id,
    ))
}

/// Build the instruction that bumps the greeting counter.
///
/// The program takes no instruction data; the greeting account is its only
/// account and must be writable.
pub fn ix_greet(greeting_account: &Pubkey, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new(*greeting_account, false)],
        data: Vec::new(),
    }
}
