use crate::error::AuctionHouseError;
use crate::state::{AuctionHouseExtension, AuctionHouseState};

use agsol_common::MaxSerializedLen;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::borsh::try_from_slice_unchecked;
use solana_program::entrypoint::ProgramResult;
use solana_program::program_error::ProgramError;

/// Start of the region holding [`AuctionHouseState`].
pub const HOUSE_STATE_OFFSET: usize = 0;
/// Reserved length of the [`AuctionHouseState`] region.
pub const HOUSE_STATE_LEN: usize = AuctionHouseState::MAX_SERIALIZED_LEN;
/// Start of the variable length tail holding [`AuctionHouseExtension`].
pub const EXTENSION_OFFSET: usize = HOUSE_STATE_OFFSET + HOUSE_STATE_LEN;

/// Raw byte storage owned by the proxy.
///
/// Implementations address it through fixed regions. A region keeps its
/// offset and length across implementation versions, new versions may only
/// add regions after the existing ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProxyStorage {
    data: Vec<u8>,
}

impl ProxyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads the value stored in the fixed region at `offset`, returns `None`
    /// if the region has never been written.
    pub fn read_region<T: BorshDeserialize>(
        &self,
        offset: usize,
        len: usize,
    ) -> Result<Option<T>, ProgramError> {
        if self.data.len() <= offset {
            return Ok(None);
        }
        let end = offset
            .checked_add(len)
            .ok_or(AuctionHouseError::ArithmeticError)?
            .min(self.data.len());
        let value = try_from_slice_unchecked(&self.data[offset..end])?;
        Ok(Some(value))
    }

    /// Writes `value` into the fixed region at `offset`, zeroing the unused
    /// part of the region. Bytes outside the region are left untouched.
    pub fn write_region<T: BorshSerialize>(
        &mut self,
        offset: usize,
        len: usize,
        value: &T,
    ) -> ProgramResult {
        let serialized = value.try_to_vec()?;
        if serialized.len() > len {
            return Err(AuctionHouseError::StorageOverflow.into());
        }
        let end = offset
            .checked_add(len)
            .ok_or(AuctionHouseError::ArithmeticError)?;
        if self.data.len() < end {
            self.data.resize(end, 0);
        }
        let region = &mut self.data[offset..end];
        region[..serialized.len()].copy_from_slice(&serialized);
        region[serialized.len()..].fill(0);
        Ok(())
    }

    /// Reads the variable length tail starting at `offset`.
    pub fn read_tail<T: BorshDeserialize>(&self, offset: usize) -> Result<Option<T>, ProgramError> {
        if self.data.len() <= offset {
            return Ok(None);
        }
        let value = try_from_slice_unchecked(&self.data[offset..])?;
        Ok(Some(value))
    }

    /// Replaces the variable length tail starting at `offset`.
    pub fn write_tail<T: BorshSerialize>(&mut self, offset: usize, value: &T) -> ProgramResult {
        let serialized = value.try_to_vec()?;
        self.data.resize(offset, 0);
        self.data.extend_from_slice(&serialized);
        Ok(())
    }

    pub fn house_state(&self) -> Result<Option<AuctionHouseState>, ProgramError> {
        self.read_region(HOUSE_STATE_OFFSET, HOUSE_STATE_LEN)
    }

    pub fn set_house_state(&mut self, state: &AuctionHouseState) -> ProgramResult {
        self.write_region(HOUSE_STATE_OFFSET, HOUSE_STATE_LEN, state)
    }

    pub fn extension(&self) -> Result<AuctionHouseExtension, ProgramError> {
        Ok(self.read_tail(EXTENSION_OFFSET)?.unwrap_or_default())
    }

    pub fn set_extension(&mut self, extension: &AuctionHouseExtension) -> ProgramResult {
        self.write_tail(EXTENSION_OFFSET, extension)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::{AuctionConfig, PendingReturn};
    use solana_program::pubkey::Pubkey;

    fn test_state() -> AuctionHouseState {
        AuctionHouseState::new(AuctionConfig {
            token: Pubkey::new_unique(),
            payment_asset: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            time_buffer: 300,
            reserve_price: 1000,
            min_bid_increment_percentage: 5,
            duration: 3600,
            burn_unsold_items: true,
        })
    }

    #[test]
    fn unwritten_regions_are_absent() {
        let storage = ProxyStorage::new();
        assert!(storage.house_state().unwrap().is_none());
        assert_eq!(storage.extension().unwrap(), AuctionHouseExtension::default());
    }

    #[test]
    fn region_write_keeps_the_tail() {
        let mut storage = ProxyStorage::new();
        let mut state = test_state();
        storage.set_house_state(&state).unwrap();
        assert_eq!(storage.len(), HOUSE_STATE_LEN);

        let extension = AuctionHouseExtension {
            pending_returns: vec![PendingReturn {
                bidder: Pubkey::new_unique(),
                asset: Pubkey::new_unique(),
                amount: 77,
            }],
            reward: None,
        };
        storage.set_extension(&extension).unwrap();

        // rewriting the fixed region does not shift or clobber the tail
        state.is_paused = false;
        storage.set_house_state(&state).unwrap();
        assert_eq!(storage.house_state().unwrap(), Some(state));
        assert_eq!(storage.extension().unwrap(), extension);
    }

    #[test]
    fn oversized_value_is_rejected() {
        let mut storage = ProxyStorage::new();
        let result = storage.write_region(0, 4, &[1u8; 8]);
        assert_eq!(result, Err(AuctionHouseError::StorageOverflow.into()));
        assert!(storage.is_empty());
    }
}
