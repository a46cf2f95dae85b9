//! Capability surface over the two externally owned ledgers.
//!
//! The marketplace never keeps its own copy of ownership or balances: the
//! collectible registry is authoritative for custody and the settlement token
//! is authoritative for funds. Escrow is the marketplace contract address.

use soroban_sdk::{contractclient, token, Address, Env, String};

use crate::errors::Error;
use crate::types::RegistryConfig;

/// Unique-item registry as seen by the marketplace.
#[contractclient(name = "CollectibleClient")]
pub trait CollectibleInterface {
    /// Mint a new item to `to`. Only the registry's minter may call this.
    fn mint(env: Env, minter: Address, to: Address, uri: String) -> u64;

    fn owner_of(env: Env, token_id: u64) -> Address;

    fn is_owner_or_approved(env: Env, spender: Address, token_id: u64) -> bool;

    /// Move `token_id` from `from` to `to`. `spender` must be the owner or
    /// the approved operator; the approval is cleared by the move.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
}

pub struct TokenGateway<'a> {
    escrow: Address,
    collectible: CollectibleClient<'a>,
    settlement: token::TokenClient<'a>,
}

impl<'a> TokenGateway<'a> {
    /// Binds clients for both ledgers, failing if either address is unset.
    pub fn connect(e: &'a Env, config: &RegistryConfig) -> Result<Self, Error> {
        let (Some(collectible), Some(settlement)) =
            (&config.collectible_ledger, &config.settlement_ledger)
        else {
            return Err(Error::LedgersNotConfigured);
        };

        Ok(Self {
            escrow: e.current_contract_address(),
            collectible: CollectibleClient::new(e, collectible),
            settlement: token::TokenClient::new(e, settlement),
        })
    }

    // ========================================================================
    // COLLECTIBLE LEDGER
    // ========================================================================

    pub fn mint_item(&self, owner: &Address, metadata_uri: &String) -> u64 {
        self.collectible.mint(&self.escrow, owner, metadata_uri)
    }

    /// Both the caller and the escrow must be able to move the item.
    pub fn ensure_listable(&self, caller: &Address, item_id: u64) -> Result<(), Error> {
        if !self.collectible.is_owner_or_approved(caller, &item_id) {
            return Err(Error::AccessDenied);
        }
        if !self.collectible.is_owner_or_approved(&self.escrow, &item_id) {
            return Err(Error::AccessDenied);
        }
        Ok(())
    }

    /// Pull the item from its current owner into escrow.
    pub fn take_custody(&self, item_id: u64) {
        let owner = self.collectible.owner_of(&item_id);
        self.collectible
            .transfer_from(&self.escrow, &owner, &self.escrow, &item_id);
    }

    /// Hand an escrowed item to `to`.
    pub fn release_custody(&self, item_id: u64, to: &Address) {
        self.collectible
            .transfer_from(&self.escrow, &self.escrow, to, &item_id);
    }

    // ========================================================================
    // SETTLEMENT LEDGER
    // ========================================================================

    /// Direct payment between two parties.
    pub fn pay(&self, from: &Address, to: &Address, amount: i128) {
        self.settlement.transfer(from, to, &amount);
    }

    /// Move funds from `from` into escrow.
    pub fn collect(&self, from: &Address, amount: i128) {
        self.settlement.transfer(from, &self.escrow, &amount);
    }

    /// Pay out escrowed funds to `to`.
    pub fn disburse(&self, to: &Address, amount: i128) {
        if amount > 0 {
            self.settlement.transfer(&self.escrow, to, &amount);
        }
    }

    pub fn escrow_balance(&self) -> i128 {
        self.settlement.balance(&self.escrow)
    }
}
