#![no_std]

mod admin;
mod auction_house;
mod errors;
mod events;
mod gateway;
mod order_book;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

pub use crate::errors::Error;
pub use crate::gateway::{CollectibleClient, CollectibleInterface};
pub use crate::types::{Auction, AuctionStatus, OrderStatus, RegistryConfig, SellOrder};

use crate::admin::load_config;
use crate::events::*;
use crate::gateway::TokenGateway;
use crate::storage::*;

/// Collectible Marketplace Smart Contract
///
/// Escrow and settlement controller for unique items held in an external
/// collectible registry and paid for in an external settlement token:
/// - Item creation on behalf of an owner
/// - Fixed-price listings (list, buy, cancel)
/// - 72 hour English auctions (start, bid, finish, cancel)
///
/// The contract address is the escrow: it holds custody of every listed or
/// auctioned item and exactly the leading bid of every running auction.
#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the marketplace.
    ///
    /// # Arguments
    /// * `administrator` - The only identity allowed to bind ledger addresses
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: &Env, administrator: Address) -> Result<(), Error> {
        administrator.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        let config = RegistryConfig {
            administrator: administrator.clone(),
            collectible_ledger: None,
            settlement_ledger: None,
            updated_at: e.ledger().timestamp(),
        };

        set_config(e, &config);
        extend_instance_ttl(e);

        InitializedEventData { administrator }.publish(e);

        Ok(())
    }

    // ========================================================================
    // ACCESS CONTROL
    // ========================================================================

    /// Bind the collectible registry and settlement token (administrator only)
    ///
    /// # Errors
    /// * `Error::AccessDenied` - If `caller` is not the administrator
    pub fn set_ledger_addresses(
        e: &Env,
        caller: Address,
        collectible: Address,
        settlement: Address,
    ) -> Result<(), Error> {
        admin::set_ledger_addresses(e, caller, collectible, settlement)?;
        extend_instance_ttl(e);
        Ok(())
    }

    /// Get ledger bindings and administrator
    pub fn get_config(e: &Env) -> Result<RegistryConfig, Error> {
        load_config(e)
    }

    /// Mint a new item to `owner` in the collectible registry.
    ///
    /// # Returns
    /// * The new item ID
    pub fn create_item(e: &Env, metadata_uri: String, owner: Address) -> Result<u64, Error> {
        let config = load_config(e)?;
        let gateway = TokenGateway::connect(e, &config)?;

        let item_id = gateway.mint_item(&owner, &metadata_uri);

        ItemCreatedEventData {
            item_id,
            owner,
            metadata_uri,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(item_id)
    }

    // ========================================================================
    // ORDER BOOK
    // ========================================================================

    /// List an item for sale at a fixed price.
    ///
    /// The escrow must already be approved on the item in the registry.
    ///
    /// # Errors
    /// * `Error::InvalidState` - If the item is already listed or on auction
    /// * `Error::AccessDenied` - If the seller or the escrow may not move the item
    /// * `Error::InvalidAmount` - If `price` is not positive
    pub fn list_item(e: &Env, seller: Address, item_id: u64, price: i128) -> Result<(), Error> {
        order_book::list_item(e, seller, item_id, price)
    }

    /// Buy a listed item at its price
    ///
    /// # Errors
    /// * `Error::InvalidState` - If the item is not listed
    pub fn buy_item(e: &Env, buyer: Address, item_id: u64) -> Result<(), Error> {
        order_book::buy_item(e, buyer, item_id)
    }

    /// Cancel a listing (seller only)
    ///
    /// # Errors
    /// * `Error::AccessDenied` - If no order exists or `seller` did not list the item
    /// * `Error::InvalidState` - If the item is not currently listed
    pub fn cancel(e: &Env, seller: Address, item_id: u64) -> Result<(), Error> {
        order_book::cancel(e, seller, item_id)
    }

    /// Get the sell order recorded for an item
    pub fn get_sell_order(e: &Env, item_id: u64) -> Result<SellOrder, Error> {
        get_sell_order(e, item_id).ok_or(Error::OrderNotFound)
    }

    // ========================================================================
    // AUCTION HOUSE
    // ========================================================================

    /// Start a 72 hour auction on an item.
    ///
    /// # Errors
    /// * `Error::InvalidState` - If the item is already on auction or listed
    /// * `Error::AccessDenied` - If the creator or the escrow may not move the item
    pub fn list_item_on_auction(
        e: &Env,
        creator: Address,
        item_id: u64,
        min_price: i128,
    ) -> Result<(), Error> {
        auction_house::list_item_on_auction(e, creator, item_id, min_price)
    }

    /// Place a bid strictly above both the minimum price and the leading bid.
    ///
    /// # Errors
    /// * `Error::InvalidState` - If no auction is running or it has expired
    /// * `Error::InsufficientBid` - If `amount` does not exceed the threshold
    pub fn make_bid(e: &Env, bidder: Address, item_id: u64, amount: i128) -> Result<(), Error> {
        auction_house::make_bid(e, bidder, item_id, amount)
    }

    /// Settle an expired auction. Anyone may call this.
    ///
    /// # Errors
    /// * `Error::InvalidState` - If no auction is running or `end_time` has not been reached
    pub fn finish_auction(e: &Env, item_id: u64) -> Result<(), Error> {
        auction_house::finish_auction(e, item_id)
    }

    /// Cancel a running auction (creator only)
    ///
    /// # Errors
    /// * `Error::AccessDenied` - If `creator` did not start the auction
    /// * `Error::InvalidState` - If no auction is running or it has expired
    pub fn cancel_auction(e: &Env, creator: Address, item_id: u64) -> Result<(), Error> {
        auction_house::cancel_auction(e, creator, item_id)
    }

    /// Get the auction recorded for an item
    pub fn get_auction(e: &Env, item_id: u64) -> Result<Auction, Error> {
        get_auction(e, item_id).ok_or(Error::AuctionNotFound)
    }

    /// Settlement balance currently held in escrow
    pub fn get_escrow_balance(e: &Env) -> Result<i128, Error> {
        let config = load_config(e)?;
        let gateway = TokenGateway::connect(e, &config)?;
        Ok(gateway.escrow_balance())
    }
}
