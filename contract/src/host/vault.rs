use super::{HostError, PaymentAsset};

use solana_program::entrypoint::ProgramResult;
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;

use std::collections::{BTreeMap, BTreeSet};

/// In-memory ledger of payment assets with a single escrow per asset.
///
/// Frozen holders can neither send nor receive funds, which is how a
/// recipient blocking refunds is modelled.
#[derive(Clone, Debug, Default)]
pub struct Vault {
    balances: BTreeMap<(Pubkey, Pubkey), u64>,
    escrow: BTreeMap<Pubkey, u64>,
    frozen: BTreeSet<Pubkey>,
    issuers: BTreeMap<Pubkey, Pubkey>,
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposit(&mut self, asset: &Pubkey, holder: &Pubkey, amount: u64) -> ProgramResult {
        let balance = self.balances.entry((*asset, *holder)).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(HostError::BalanceOverflow)?;
        Ok(())
    }

    pub fn balance_of(&self, asset: &Pubkey, holder: &Pubkey) -> u64 {
        self.balances
            .get(&(*asset, *holder))
            .copied()
            .unwrap_or(0)
    }

    pub fn escrow_balance(&self, asset: &Pubkey) -> u64 {
        self.escrow.get(asset).copied().unwrap_or(0)
    }

    /// Allows `issuer` to create new units of `asset`.
    pub fn register_issuer(&mut self, asset: Pubkey, issuer: Pubkey) {
        self.issuers.insert(asset, issuer);
    }

    pub fn freeze(&mut self, holder: &Pubkey) {
        self.frozen.insert(*holder);
    }

    pub fn thaw(&mut self, holder: &Pubkey) {
        self.frozen.remove(holder);
    }

    pub fn is_frozen(&self, holder: &Pubkey) -> bool {
        self.frozen.contains(holder)
    }

    fn release(&mut self, asset: &Pubkey, to: &Pubkey, amount: u64) -> ProgramResult {
        if self.is_frozen(to) {
            return Err(HostError::AccountFrozen.into());
        }
        let escrow = self.escrow.entry(*asset).or_insert(0);
        let remaining = escrow
            .checked_sub(amount)
            .ok_or(HostError::InsufficientEscrow)?;
        let balance = self.balances.entry((*asset, *to)).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(HostError::BalanceOverflow)?;
        *escrow = remaining;
        Ok(())
    }
}

impl PaymentAsset for Vault {
    fn lock(&mut self, asset: &Pubkey, from: &Pubkey, amount: u64) -> ProgramResult {
        if self.is_frozen(from) {
            return Err(HostError::AccountFrozen.into());
        }
        let balance = self.balance_of(asset, from);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        let escrow = self.escrow.entry(*asset).or_insert(0);
        *escrow = escrow
            .checked_add(amount)
            .ok_or(HostError::BalanceOverflow)?;
        self.balances.insert((*asset, *from), remaining);
        Ok(())
    }

    fn refund(&mut self, asset: &Pubkey, to: &Pubkey, amount: u64) -> ProgramResult {
        self.release(asset, to, amount)
    }

    fn settle(&mut self, asset: &Pubkey, to: &Pubkey, amount: u64) -> ProgramResult {
        self.release(asset, to, amount)
    }

    fn issue(
        &mut self,
        asset: &Pubkey,
        issuer: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> ProgramResult {
        if self.issuers.get(asset) != Some(issuer) {
            return Err(HostError::NotIssuer.into());
        }
        if self.is_frozen(to) {
            return Err(HostError::AccountFrozen.into());
        }
        self.deposit(asset, to, amount)
    }
}
