use super::{HostError, TokenIssuance};
use crate::ItemId;

use solana_program::entrypoint::ProgramResult;
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;

use std::collections::BTreeMap;

#[derive(Clone, Debug)]
struct Collection {
    /// The only account allowed to mint (the auction house).
    minter: Pubkey,
    next_item_id: ItemId,
    owners: BTreeMap<ItemId, Pubkey>,
}

/// In-memory registry of NFT collections.
#[derive(Clone, Debug, Default)]
pub struct NftLedger {
    collections: BTreeMap<Pubkey, Collection>,
}

impl NftLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_collection(&mut self, contract: Pubkey, minter: Pubkey) -> ProgramResult {
        if self.collections.contains_key(&contract) {
            return Err(HostError::CollectionAlreadyExists.into());
        }
        self.collections.insert(
            contract,
            Collection {
                minter,
                next_item_id: 0,
                owners: BTreeMap::new(),
            },
        );
        Ok(())
    }

    pub fn balance_of(&self, contract: &Pubkey, owner: &Pubkey) -> u64 {
        self.collections.get(contract).map_or(0, |collection| {
            collection
                .owners
                .values()
                .filter(|item_owner| *item_owner == owner)
                .count() as u64
        })
    }

    fn collection_mut(&mut self, contract: &Pubkey) -> Result<&mut Collection, ProgramError> {
        self.collections
            .get_mut(contract)
            .ok_or_else(|| HostError::UnknownCollection.into())
    }
}

impl Collection {
    fn check_owner(&self, item_id: ItemId, owner: &Pubkey) -> ProgramResult {
        match self.owners.get(&item_id) {
            None => Err(HostError::UnknownItem.into()),
            Some(current) if current != owner => Err(HostError::NotItemOwner.into()),
            Some(_) => Ok(()),
        }
    }
}

impl TokenIssuance for NftLedger {
    fn mint(
        &mut self,
        contract: &Pubkey,
        minter: &Pubkey,
        to: &Pubkey,
    ) -> Result<ItemId, ProgramError> {
        let collection = self.collection_mut(contract)?;
        if &collection.minter != minter {
            return Err(HostError::NotMinter.into());
        }
        let item_id = collection.next_item_id;
        collection.next_item_id = item_id
            .checked_add(1)
            .ok_or(HostError::BalanceOverflow)?;
        collection.owners.insert(item_id, *to);
        Ok(item_id)
    }

    fn transfer(
        &mut self,
        contract: &Pubkey,
        item_id: ItemId,
        from: &Pubkey,
        to: &Pubkey,
    ) -> ProgramResult {
        let collection = self.collection_mut(contract)?;
        collection.check_owner(item_id, from)?;
        collection.owners.insert(item_id, *to);
        Ok(())
    }

    fn burn(&mut self, contract: &Pubkey, item_id: ItemId, owner: &Pubkey) -> ProgramResult {
        let collection = self.collection_mut(contract)?;
        collection.check_owner(item_id, owner)?;
        collection.owners.remove(&item_id);
        Ok(())
    }

    fn owner_of(&self, contract: &Pubkey, item_id: ItemId) -> Option<Pubkey> {
        self.collections
            .get(contract)
            .and_then(|collection| collection.owners.get(&item_id).copied())
    }

    fn total_minted(&self, contract: &Pubkey) -> u64 {
        self.collections
            .get(contract)
            .map_or(0, |collection| collection.next_item_id)
    }
}
