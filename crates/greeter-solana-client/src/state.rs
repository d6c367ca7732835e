//! On-chain state of a greeting account.
//!
//! The program stores a single borsh-encoded `u32` counter. Clients only need
//! the layout to size the account at creation and to read the counter back.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::errors::{GreeterError, GreeterResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct GreetingAccount {
    pub counter: u32,
}

impl GreetingAccount {
    /// Decode a greeting from raw account data.
    ///
    /// Accounts may be allocated larger than the record, so trailing bytes are
    /// ignored.
    pub fn from_account_data(data: &[u8]) -> GreeterResult<Self> {
        let mut slice = data;
        GreetingAccount::deserialize(&mut slice).map_err(|e| GreeterError::AccountData(e.to_string()))
    }
}

/// Serialized size of a greeting account, used as the account space.
pub fn greeting_size() -> usize {
    // A fixed-size struct of one u32 cannot fail to serialize.
    borsh::object_length(&GreetingAccount::default()).unwrap_or(std::mem::size_of::<u32>())
}
