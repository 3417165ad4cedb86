use ink::primitives::AccountId;

use crate::account::{is_null, null_account};
use crate::errors::{Error, Result};

/// Single-owner access control.
///
/// The owner is the only identity allowed to mint and to toggle the pause
/// gate. Renouncing leaves the null account in place, after which nobody is
/// the owner.
#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Ownable {
    owner_acc: AccountId,
}

impl Ownable {
    pub fn new(owner_acc: AccountId) -> Result<Self> {
        if is_null(&owner_acc) {
            return Err(Error::InvalidOwner(owner_acc))
        }
        Ok(Self { owner_acc })
    }

    pub fn owner(&self) -> AccountId {
        self.owner_acc
    }

    pub fn is_owner(&self, caller_acc: AccountId) -> bool {
        !is_null(&caller_acc) && caller_acc == self.owner_acc
    }

    pub fn ensure_owner(&self, caller_acc: AccountId) -> Result<()> {
        if !self.is_owner(caller_acc) {
            return Err(Error::UnauthorizedAccount(caller_acc))
        }
        Ok(())
    }

    /// Hands ownership to `new_owner` and returns the previous owner.
    pub fn transfer(&mut self, new_owner: AccountId) -> Result<AccountId> {
        if is_null(&new_owner) {
            return Err(Error::InvalidOwner(new_owner))
        }
        Ok(core::mem::replace(&mut self.owner_acc, new_owner))
    }

    /// Gives up ownership for good and returns the previous owner.
    pub fn renounce(&mut self) -> AccountId {
        core::mem::replace(&mut self.owner_acc, null_account())
    }
}
