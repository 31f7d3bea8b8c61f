use crate::error::AuctionHouseError;
use crate::events::AuctionHouseEvent;
use crate::host::{Authority, Clock, InvokeContext, PaymentAsset, TokenIssuance};
use crate::instruction::factory;
use crate::state::{AuctionConfig, AuctionHouseState};
use crate::storage::ProxyStorage;

use borsh::{BorshDeserialize, BorshSerialize};
use log::{info, warn};
use solana_program::entrypoint::ProgramResult;
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;

#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;
use std::sync::Arc;

/// Auction house logic the proxy forwards instructions to.
///
/// Implementations keep no state of their own, everything persistent lives
/// in the [`ProxyStorage`] they are handed.
pub trait Implementation: Send + Sync {
    fn version(&self) -> &'static str;

    fn process(
        &self,
        ctx: &mut InvokeContext,
        storage: &mut ProxyStorage,
        instruction_data: &[u8],
    ) -> ProgramResult;

    fn auction_house_state(&self, storage: &ProxyStorage) -> Result<AuctionHouseState, ProgramError>;
}

/// Accounts allowed to administer the proxy and the auction house behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyAdmins(BTreeSet<Pubkey>);

impl ProxyAdmins {
    pub fn new(admin: Pubkey) -> Self {
        Self(std::iter::once(admin).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pubkey> {
        self.0.iter()
    }

    fn apply(&mut self, update: &AdminUpdate) {
        match update {
            AdminUpdate::Add(admin) => {
                self.0.insert(*admin);
            }
            AdminUpdate::Remove(admin) => {
                self.0.remove(admin);
            }
        }
    }
}

impl Authority for ProxyAdmins {
    fn is_admin(&self, address: &Pubkey) -> bool {
        self.0.contains(address)
    }
}

#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub enum AdminUpdate {
    Add(Pubkey),
    Remove(Pubkey),
}

/// Fixed-address entry point of the auction house.
///
/// The proxy owns the storage, the admin set and the host ledgers. Swapping
/// the implementation changes the logic without touching any of those.
pub struct AuctionHouseProxy<T, P> {
    address: Pubkey,
    admins: ProxyAdmins,
    implementation: Option<Arc<dyn Implementation>>,
    storage: ProxyStorage,
    tokens: T,
    payments: P,
    clock: Arc<dyn Clock>,
}

impl<T, P> AuctionHouseProxy<T, P>
where
    T: TokenIssuance + Clone,
    P: PaymentAsset + Clone,
{
    /// Creates a proxy without an implementation, `admin` being its only
    /// administrator.
    pub fn new(address: Pubkey, admin: Pubkey, tokens: T, payments: P, clock: Arc<dyn Clock>) -> Self {
        Self {
            address,
            admins: ProxyAdmins::new(admin),
            implementation: None,
            storage: ProxyStorage::new(),
            tokens,
            payments,
            clock,
        }
    }

    /// Creates a proxy, installs `implementation` and initializes the auction
    /// house with `config` on behalf of `admin`.
    pub fn deploy(
        address: Pubkey,
        admin: Pubkey,
        tokens: T,
        payments: P,
        clock: Arc<dyn Clock>,
        implementation: Arc<dyn Implementation>,
        config: AuctionConfig,
    ) -> Result<Self, ProgramError> {
        let mut proxy = Self::new(address, admin, tokens, payments, clock);
        proxy.implementation = Some(implementation);
        proxy.forward(&admin, &factory::initialize(config))?;
        Ok(proxy)
    }

    pub fn upgrade_to(
        &mut self,
        caller: &Pubkey,
        implementation: Arc<dyn Implementation>,
    ) -> ProgramResult {
        if !self.admins.is_admin(caller) {
            return Err(AuctionHouseError::Unauthorized.into());
        }
        info!(
            "upgrading implementation {} -> {}",
            self.implementation_version().unwrap_or("none"),
            implementation.version()
        );
        self.implementation = Some(implementation);
        Ok(())
    }

    /// Applies every update or none of them.
    pub fn update_admins(&mut self, caller: &Pubkey, updates: &[AdminUpdate]) -> ProgramResult {
        if !self.admins.is_admin(caller) {
            return Err(AuctionHouseError::Unauthorized.into());
        }
        let mut admins = self.admins.clone();
        for update in updates {
            admins.apply(update);
        }
        if admins.is_empty() {
            return Err(AuctionHouseError::LastAdminRemoval.into());
        }
        self.admins = admins;
        Ok(())
    }

    /// Runs `instruction_data` through the current implementation.
    ///
    /// Either every effect of the instruction (storage and ledgers) is kept,
    /// or none of them.
    pub fn forward(
        &mut self,
        caller: &Pubkey,
        instruction_data: &[u8],
    ) -> Result<Vec<AuctionHouseEvent>, ProgramError> {
        let implementation = self
            .implementation
            .clone()
            .ok_or(AuctionHouseError::NoImplementation)?;

        let storage_snapshot = self.storage.clone();
        let tokens_snapshot = self.tokens.clone();
        let payments_snapshot = self.payments.clone();

        let mut ctx = InvokeContext::new(
            *caller,
            self.address,
            self.clock.unix_timestamp(),
            &self.admins,
            &mut self.tokens,
            &mut self.payments,
        );
        let result = implementation
            .process(&mut ctx, &mut self.storage, instruction_data)
            .map(|()| ctx.into_events());

        if let Err(e) = &result {
            warn!("instruction from {} reverted: {:?}", caller, e);
            self.storage = storage_snapshot;
            self.tokens = tokens_snapshot;
            self.payments = payments_snapshot;
        }
        result
    }

    pub fn auction_house_state(&self) -> Result<AuctionHouseState, ProgramError> {
        self.implementation
            .as_ref()
            .ok_or(AuctionHouseError::NoImplementation)?
            .auction_house_state(&self.storage)
    }

    pub fn implementation_version(&self) -> Option<&'static str> {
        self.implementation
            .as_ref()
            .map(|implementation| implementation.version())
    }

    pub fn address(&self) -> &Pubkey {
        &self.address
    }

    pub fn admins(&self) -> &ProxyAdmins {
        &self.admins
    }

    pub fn storage(&self) -> &ProxyStorage {
        &self.storage
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut T {
        &mut self.tokens
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn payments_mut(&mut self) -> &mut P {
        &mut self.payments
    }
}
