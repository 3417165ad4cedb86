use ink::prelude::string::String;

use crate::account::Balance;

pub const DEFAULT_NAME: &str = "MyToken";
pub const DEFAULT_SYMBOL: &str = "MTK";
pub const DEFAULT_DECIMALS: u8 = 18;

/// 10 million whole tokens at 18 decimals.
pub const DEFAULT_INITIAL_SUPPLY: Balance = 10_000_000 * 10u128.pow(DEFAULT_DECIMALS as u32);

/// Display metadata fixed at construction.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_NAME),
            symbol: String::from(DEFAULT_SYMBOL),
            decimals: DEFAULT_DECIMALS,
        }
    }
}
