use ink::primitives::AccountId;

/// Token amounts; matches the contract environment's `Balance`.
pub type Balance = u128;

const NULL_BYTES: [u8; 32] = [0u8; 32];

/// The reserved "no account" identifier.
///
/// Minted tokens come from it and burned tokens go to it, but it never
/// holds a balance and never takes part in a transfer or an approval.
pub fn null_account() -> AccountId {
    AccountId::from(NULL_BYTES)
}

pub fn is_null(account: &AccountId) -> bool {
    *account == null_account()
}
