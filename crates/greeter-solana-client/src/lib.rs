//! greeter-solana-client
//!
//! A small, focused Rust client for the "hello world" greeter program.
//!
//! It includes:
//! - the greeting account layout and its serialized size
//! - seeded address derivation for the greeting account
//! - secret key and address parsing for request payloads
//! - cluster name to RPC endpoint resolution
//! - instruction builders and a client that submits transactions through an
//!   [`RpcBackend`]
//!
//! Note: the program id is always provided by the consumer. This crate never
//! assumes a deployed address.

pub mod address;
pub mod constants;
pub mod errors;
pub mod greeter_client;
pub mod instructions;
pub mod keys;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod network;
pub mod rpc;
pub mod state;

pub use address::*;
pub use constants::*;
pub use errors::{GreeterError, GreeterResult};
pub use greeter_client::*;
pub use instructions::*;
pub use keys::*;
pub use network::*;
pub use rpc::*;
pub use state::*;
