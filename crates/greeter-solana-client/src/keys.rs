//! Parsing of caller-supplied key material and addresses.

use solana_program::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

use crate::constants::KEYPAIR_LEN;
use crate::errors::{GreeterError, GreeterResult};

/// Parse a secret key as sent by a browser or CLI wallet.
///
/// Two encodings are accepted:
/// - a JSON array of 64 bytes (`solana-keygen` keypair file format)
/// - a base58 string of the same 64 bytes
pub fn parse_secret_key(input: &str) -> GreeterResult<Keypair> {
    let s = input.trim();
    let bytes = if s.starts_with('[') {
        serde_json::from_str::<Vec<u8>>(s).map_err(|e| GreeterError::invalid_secret_key(e.to_string()))?
    } else {
        bs58::decode(s)
            .into_vec()
            .map_err(|e| GreeterError::invalid_secret_key(e.to_string()))?
    };

    if bytes.len() != KEYPAIR_LEN {
        return Err(GreeterError::invalid_secret_key(format!(
            "expected {KEYPAIR_LEN} bytes, got {}",
            bytes.len()
        )));
    }

    Keypair::from_bytes(&bytes).map_err(|e| GreeterError::invalid_secret_key(e.to_string()))
}

/// Parse a base58 address. `field` names the request field in errors.
pub fn parse_pubkey(field: &str, input: &str) -> GreeterResult<Pubkey> {
    input
        .trim()
        .parse()
        .map_err(|e| GreeterError::invalid_address(field, format!("{e}")))
}
