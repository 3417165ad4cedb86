#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod access;
mod account;
mod config;
mod errors;
mod pause;

pub use account::{is_null, null_account};
pub use errors::{Error, Result};

#[ink::contract]
mod mytoken {
    use crate::access::Ownable;
    use crate::account::{is_null, null_account};
    use crate::config::{TokenMetadata, DEFAULT_INITIAL_SUPPLY};
    use crate::errors::{Error, Result};
    use crate::pause::PauseState;
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    /// An allowance at this value is never decremented when spent.
    pub const UNLIMITED_ALLOWANCE: Balance = Balance::MAX;

    /// Balance movement. Mints come from the null account and burns go to it.
    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: AccountId,
        #[ink(topic)]
        to: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct Paused {
        account: AccountId,
    }

    #[ink(event)]
    pub struct Unpaused {
        account: AccountId,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_owner: AccountId,
        #[ink(topic)]
        new_owner: AccountId,
    }

    #[ink(storage)]
    pub struct MyToken {
        // metadata / control
        metadata: TokenMetadata,
        ownable: Ownable,
        pause_state: PauseState,

        // ledger
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    /// Who may run a gated call once the pause gate has let it through.
    #[derive(Clone, Copy)]
    enum Access {
        Anyone,
        OwnerOnly,
    }

    /// A balance movement that has passed every check and only needs writing.
    struct Movement {
        from: AccountId,
        to: AccountId,
        value: Balance,
        new_supply: Balance,
    }

    impl MyToken {
        // -------- constructors --------

        /// Deploys with the stock metadata and supply, all credited to `initial_owner`.
        #[ink(constructor)]
        pub fn new(initial_owner: AccountId) -> Result<Self> {
            let metadata = TokenMetadata::default();
            Self::with_metadata(
                initial_owner,
                metadata.name,
                metadata.symbol,
                metadata.decimals,
                DEFAULT_INITIAL_SUPPLY,
            )
        }

        /// Emits `OwnershipTransferred` and then the `Transfer` of the initial mint.
        #[ink(constructor)]
        pub fn with_metadata(
            initial_owner: AccountId,
            name: String,
            symbol: String,
            decimals: u8,
            initial_supply: Balance,
        ) -> Result<Self> {
            let ownable = Ownable::new(initial_owner)?;
            let mut instance = Self {
                metadata: TokenMetadata { name, symbol, decimals },
                ownable,
                pause_state: PauseState::default(),
                total_supply: 0,
                balances: Mapping::default(),
                allowances: Mapping::default(),
            };
            let movement = instance.prepare_movement(null_account(), initial_owner, initial_supply)?;

            Self::env().emit_event(OwnershipTransferred {
                previous_owner: null_account(),
                new_owner: initial_owner,
            });
            instance.commit_movement(movement);
            Ok(instance)
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            self.metadata.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.metadata.symbol.clone()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            self.metadata.decimals
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, account: AccountId) -> Balance {
            self.balances.get(&account).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get(&(owner, spender)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn paused(&self) -> bool {
            self.pause_state.is_paused()
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.ownable.owner()
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<()> {
            self.gated(Access::Anyone, |this, caller| this.transfer_impl(caller, to, value))
        }

        /// Sets (not adds to) the caller's allowance for `spender`.
        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<()> {
            self.gated(Access::Anyone, |this, caller| this.approve_impl(caller, spender, value))
        }

        #[ink(message)]
        pub fn transfer_from(&mut self, from: AccountId, to: AccountId, value: Balance) -> Result<()> {
            self.gated(Access::Anyone, |this, caller| {
                let remaining = this.check_allowance(from, caller, value)?;
                ensure_sender(from)?;
                ensure_receiver(to)?;
                let movement = this.prepare_movement(from, to, value)?;

                if let Some(remaining) = remaining {
                    this.write_allowance(from, caller, remaining);
                }
                this.commit_movement(movement);
                Ok(())
            })
        }

        #[ink(message)]
        pub fn mint(&mut self, to: AccountId, value: Balance) -> Result<()> {
            self.gated(Access::OwnerOnly, |this, caller| {
                ensure_receiver(to)?;
                let movement = this.prepare_movement(null_account(), to, value)?;
                this.commit_movement(movement);
                ink::env::debug_println!("mytoken: {:?} minted {} to {:?}", caller, value, to);
                Ok(())
            })
        }

        /// Destroys `value` of the caller's own tokens.
        #[ink(message)]
        pub fn burn(&mut self, value: Balance) -> Result<()> {
            self.gated(Access::Anyone, |this, caller| this.burn_impl(caller, value))
        }

        #[ink(message)]
        pub fn burn_from(&mut self, account: AccountId, value: Balance) -> Result<()> {
            self.gated(Access::Anyone, |this, caller| {
                let remaining = this.check_allowance(account, caller, value)?;
                ensure_sender(account)?;
                let movement = this.prepare_movement(account, null_account(), value)?;

                if let Some(remaining) = remaining {
                    this.write_allowance(account, caller, remaining);
                }
                this.commit_movement(movement);
                Ok(())
            })
        }

        // -------- admin --------

        #[ink(message)]
        pub fn pause(&mut self) -> Result<()> {
            let caller = self.env().caller();
            self.ownable.ensure_owner(caller)?;
            self.pause_state.pause()?;
            self.env().emit_event(Paused { account: caller });
            ink::env::debug_println!("mytoken: paused by {:?}", caller);
            Ok(())
        }

        #[ink(message)]
        pub fn unpause(&mut self) -> Result<()> {
            let caller = self.env().caller();
            self.ownable.ensure_owner(caller)?;
            self.pause_state.unpause()?;
            self.env().emit_event(Unpaused { account: caller });
            ink::env::debug_println!("mytoken: unpaused by {:?}", caller);
            Ok(())
        }

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<()> {
            let caller = self.env().caller();
            self.ownable.ensure_owner(caller)?;
            let previous_owner = self.ownable.transfer(new_owner)?;
            self.env().emit_event(OwnershipTransferred { previous_owner, new_owner });
            ink::env::debug_println!("mytoken: ownership {:?} -> {:?}", previous_owner, new_owner);
            Ok(())
        }

        /// Leaves the token without an owner; mint and pause toggling are gone for good.
        #[ink(message)]
        pub fn renounce_ownership(&mut self) -> Result<()> {
            let caller = self.env().caller();
            self.ownable.ensure_owner(caller)?;
            let previous_owner = self.ownable.renounce();
            self.env().emit_event(OwnershipTransferred {
                previous_owner,
                new_owner: null_account(),
            });
            ink::env::debug_println!("mytoken: ownership renounced by {:?}", previous_owner);
            Ok(())
        }

        // ---- internals ----

        /// Runs the pause gate, then the access check, then `op` with the caller.
        fn gated<T, F>(&mut self, access: Access, op: F) -> Result<T>
        where
            F: FnOnce(&mut Self, AccountId) -> Result<T>,
        {
            self.pause_state.ensure_not_paused()?;
            let caller = self.env().caller();
            if let Access::OwnerOnly = access {
                self.ownable.ensure_owner(caller)?;
            }
            op(self, caller)
        }

        fn transfer_impl(&mut self, from: AccountId, to: AccountId, value: Balance) -> Result<()> {
            ensure_sender(from)?;
            ensure_receiver(to)?;
            let movement = self.prepare_movement(from, to, value)?;
            self.commit_movement(movement);
            Ok(())
        }

        fn approve_impl(&mut self, owner: AccountId, spender: AccountId, value: Balance) -> Result<()> {
            if is_null(&owner) {
                return Err(Error::InvalidApprover(owner))
            }
            if is_null(&spender) {
                return Err(Error::InvalidSpender(spender))
            }
            self.write_allowance(owner, spender, value);
            self.env().emit_event(Approval { owner, spender, value });
            Ok(())
        }

        fn burn_impl(&mut self, account: AccountId, value: Balance) -> Result<()> {
            ensure_sender(account)?;
            let movement = self.prepare_movement(account, null_account(), value)?;
            self.commit_movement(movement);
            Ok(())
        }

        /// Returns the allowance left after spending `value`, or `None` when
        /// the allowance is unlimited and must stay untouched.
        fn check_allowance(
            &self,
            owner: AccountId,
            spender: AccountId,
            value: Balance,
        ) -> Result<Option<Balance>> {
            let available = self.allowance(owner, spender);
            if available == UNLIMITED_ALLOWANCE {
                return Ok(None)
            }
            let remaining = available.checked_sub(value).ok_or(Error::InsufficientAllowance {
                spender,
                available,
                requested: value,
            })?;
            Ok(Some(remaining))
        }

        fn prepare_movement(&self, from: AccountId, to: AccountId, value: Balance) -> Result<Movement> {
            if !is_null(&from) {
                let available = self.balance_of(from);
                if available < value {
                    return Err(Error::InsufficientBalance {
                        account: from,
                        available,
                        requested: value,
                    })
                }
            }

            let new_supply = if is_null(&from) {
                self.total_supply.checked_add(value).ok_or(Error::Overflow)?
            } else if is_null(&to) {
                self.total_supply.checked_sub(value).ok_or(Error::Overflow)?
            } else {
                self.total_supply
            };

            Ok(Movement { from, to, value, new_supply })
        }

        fn commit_movement(&mut self, movement: Movement) {
            let Movement { from, to, value, new_supply } = movement;

            // debit before credit so a self-transfer nets out
            if !is_null(&from) {
                let from_bal = self.balance_of(from);
                self.write_balance(from, from_bal.saturating_sub(value));
            }
            // every balance is bounded by the total supply, so this never saturates
            if !is_null(&to) {
                let to_bal = self.balance_of(to);
                self.write_balance(to, to_bal.saturating_add(value));
            }
            self.total_supply = new_supply;

            self.env().emit_event(Transfer { from, to, value });
        }

        fn write_balance(&mut self, account: AccountId, value: Balance) {
            if value == 0 {
                self.balances.remove(&account);
            } else {
                self.balances.insert(&account, &value);
            }
        }

        fn write_allowance(&mut self, owner: AccountId, spender: AccountId, value: Balance) {
            if value == 0 {
                self.allowances.remove(&(owner, spender));
            } else {
                self.allowances.insert(&(owner, spender), &value);
            }
        }
    }

    fn ensure_sender(account: AccountId) -> Result<()> {
        if is_null(&account) {
            return Err(Error::InvalidSender(account))
        }
        Ok(())
    }

    fn ensure_receiver(account: AccountId) -> Result<()> {
        if is_null(&account) {
            return Err(Error::InvalidReceiver(account))
        }
        Ok(())
    }


}
