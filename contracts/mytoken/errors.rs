use ink::primitives::AccountId;

use crate::account::Balance;

pub type Result<T> = core::result::Result<T, Error>;

/// Every way a ledger call can be rejected.
///
/// A rejected call leaves balances, allowances, supply, owner and pause
/// state exactly as they were, and emits no event.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// The null account tried to send (or burn) tokens.
    InvalidSender(AccountId),
    /// Tokens were sent (or minted) to the null account.
    InvalidReceiver(AccountId),
    /// The null account tried to grant an allowance.
    InvalidApprover(AccountId),
    /// An allowance was granted to the null account.
    InvalidSpender(AccountId),
    InsufficientBalance {
        account: AccountId,
        available: Balance,
        requested: Balance,
    },
    InsufficientAllowance {
        spender: AccountId,
        available: Balance,
        requested: Balance,
    },
    /// An owner-only call came from someone else.
    UnauthorizedAccount(AccountId),
    /// The null account was proposed as owner.
    InvalidOwner(AccountId),
    /// The ledger is paused (or `pause` was called while paused).
    EnforcedPause,
    /// `unpause` was called while not paused.
    ExpectedPause,
    /// Minting would exceed the largest representable supply.
    Overflow,
}
