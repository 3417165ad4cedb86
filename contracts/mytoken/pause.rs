use crate::errors::{Error, Result};

/// Global pause switch in front of every balance-mutating call.
#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum PauseState {
    #[default]
    Active,
    Paused,
}

impl PauseState {
    pub fn is_paused(self) -> bool {
        self == PauseState::Paused
    }

    pub fn ensure_not_paused(self) -> Result<()> {
        if self.is_paused() {
            return Err(Error::EnforcedPause)
        }
        Ok(())
    }

    pub fn ensure_paused(self) -> Result<()> {
        if !self.is_paused() {
            return Err(Error::ExpectedPause)
        }
        Ok(())
    }

    /// Active -> Paused.
    pub fn pause(&mut self) -> Result<()> {
        self.ensure_not_paused()?;
        *self = PauseState::Paused;
        Ok(())
    }

    /// Paused -> Active.
    pub fn unpause(&mut self) -> Result<()> {
        self.ensure_paused()?;
        *self = PauseState::Active;
        Ok(())
    }
}
