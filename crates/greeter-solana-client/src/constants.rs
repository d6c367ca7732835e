//! Constants shared between the on-chain program and clients.
//!
//! Keep these stable because they affect address derivation.

/// Seed used to derive the greeting account from the payer key.
pub const GREETING_SEED: &str = "hello";

/// Default public RPC endpoints per cluster.
pub const DEVNET_URL: &str = "https://api.devnet.solana.com";
pub const TESTNET_URL: &str = "https://api.testnet.solana.com";
pub const MAINNET_URL: &str = "https://api.mainnet-beta.solana.com";
pub const LOCALNET_URL: &str = "http://127.0.0.1:8899";

/// Length in bytes of a serialized ed25519 keypair (secret + public half).
pub const KEYPAIR_LEN: usize = 64;
