use soroban_sdk::{Address, Env};

use crate::admin::load_config;
use crate::errors::Error;
use crate::events::*;
use crate::gateway::TokenGateway;
use crate::storage::*;
use crate::types::*;

/// Put an item in escrow for a fixed-price sale.
pub fn list_item(e: &Env, seller: Address, item_id: u64, price: i128) -> Result<(), Error> {
    seller.require_auth();

    let config = load_config(e)?;
    let gateway = TokenGateway::connect(e, &config)?;

    if price <= 0 {
        return Err(Error::InvalidAmount);
    }

    if is_listed(e, item_id) || has_active_auction(e, item_id) {
        return Err(Error::InvalidState);
    }

    gateway.ensure_listable(&seller, item_id)?;
    gateway.take_custody(item_id);

    let order = SellOrder {
        item_id,
        seller: seller.clone(),
        price,
        status: OrderStatus::Listed,
    };
    set_sell_order(e, &order);

    ItemListedEventData {
        item_id,
        seller,
        price,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Pay the listed price and take the item out of escrow.
pub fn buy_item(e: &Env, buyer: Address, item_id: u64) -> Result<(), Error> {
    buyer.require_auth();

    let config = load_config(e)?;
    let gateway = TokenGateway::connect(e, &config)?;

    let order = get_sell_order(e, item_id)
        .filter(|order| order.status == OrderStatus::Listed)
        .ok_or(Error::InvalidState)?;

    // The buyer becomes the reference seller so a later re-list reuses the record.
    let settled = SellOrder {
        item_id,
        seller: buyer.clone(),
        price: order.price,
        status: OrderStatus::Owned,
    };

    gateway.pay(&buyer, &order.seller, order.price);
    gateway.release_custody(item_id, &buyer);
    set_sell_order(e, &settled);

    ItemSoldEventData {
        item_id,
        buyer,
        seller: order.seller,
        price: order.price,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Withdraw a listing and return the item to its seller.
pub fn cancel(e: &Env, seller: Address, item_id: u64) -> Result<(), Error> {
    seller.require_auth();

    let config = load_config(e)?;
    let gateway = TokenGateway::connect(e, &config)?;

    let mut order = get_sell_order(e, item_id).ok_or(Error::AccessDenied)?;

    if order.seller != seller {
        return Err(Error::AccessDenied);
    }

    if order.status != OrderStatus::Listed {
        return Err(Error::InvalidState);
    }

    gateway.release_custody(item_id, &seller);

    order.status = OrderStatus::Owned;
    set_sell_order(e, &order);

    ItemCancelledEventData { item_id, seller }.publish(e);

    extend_instance_ttl(e);
    Ok(())
}
