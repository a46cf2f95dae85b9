use soroban_sdk::{log, Address, Env};

use crate::admin::load_config;
use crate::errors::Error;
use crate::events::*;
use crate::gateway::TokenGateway;
use crate::storage::*;
use crate::types::*;

/// Put an item in escrow and open a 72 hour English auction on it.
pub fn list_item_on_auction(
    e: &Env,
    creator: Address,
    item_id: u64,
    min_price: i128,
) -> Result<(), Error> {
    creator.require_auth();

    let config = load_config(e)?;
    let gateway = TokenGateway::connect(e, &config)?;

    if min_price < 0 {
        return Err(Error::InvalidAmount);
    }

    if has_active_auction(e, item_id) || is_listed(e, item_id) {
        return Err(Error::InvalidState);
    }

    gateway.ensure_listable(&creator, item_id)?;
    gateway.take_custody(item_id);

    let start_time = e.ledger().timestamp();
    let auction = Auction {
        item_id,
        creator: creator.clone(),
        min_price,
        start_time,
        end_time: start_time + AUCTION_DURATION,
        higher_bidder: None,
        higher_bid: 0,
        bidder_count: 0,
        status: AuctionStatus::Active,
    };
    set_auction(e, &auction);

    AuctionStartedEventData {
        item_id,
        creator,
        min_price,
        end_time: auction.end_time,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Escrow a strictly higher bid and refund the bidder it displaces.
pub fn make_bid(e: &Env, bidder: Address, item_id: u64, amount: i128) -> Result<(), Error> {
    bidder.require_auth();

    let config = load_config(e)?;
    let gateway = TokenGateway::connect(e, &config)?;

    let mut auction = active_auction(e, item_id)?;

    if is_over(e, &auction) {
        return Err(Error::InvalidState);
    }

    if amount <= auction.min_price || amount <= auction.higher_bid {
        log!(
            e,
            "bid rejected: item, amount, min_price, higher_bid",
            item_id,
            amount,
            auction.min_price,
            auction.higher_bid
        );
        return Err(Error::InsufficientBid);
    }

    let displaced = auction.higher_bidder.replace(bidder.clone());
    let displaced_bid = auction.higher_bid;
    auction.higher_bid = amount;
    auction.bidder_count += 1;

    if let Some(previous) = displaced {
        gateway.disburse(&previous, displaced_bid);
    }
    gateway.collect(&bidder, amount);
    set_auction(e, &auction);

    BidPlacedEventData {
        item_id,
        bidder,
        amount,
        bidder_count: auction.bidder_count,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Settle an expired auction.
///
/// With at least [`MIN_BIDS_TO_CLEAR`] accepted bids the leader receives the
/// item and the creator receives the leading bid. Otherwise the sale is void:
/// the item returns to the creator and the leader, if any, is refunded.
pub fn finish_auction(e: &Env, item_id: u64) -> Result<(), Error> {
    let config = load_config(e)?;
    let gateway = TokenGateway::connect(e, &config)?;

    let mut auction = active_auction(e, item_id)?;

    if !is_over(e, &auction) {
        return Err(Error::InvalidState);
    }

    let (recipient, cleared) = match &auction.higher_bidder {
        Some(winner) if auction.bidder_count >= MIN_BIDS_TO_CLEAR => {
            gateway.release_custody(item_id, winner);
            gateway.disburse(&auction.creator, auction.higher_bid);
            (winner.clone(), true)
        }
        leader => {
            log!(
                e,
                "auction did not clear: item, bids",
                item_id,
                auction.bidder_count
            );
            gateway.release_custody(item_id, &auction.creator);
            if let Some(leader) = leader {
                gateway.disburse(leader, auction.higher_bid);
            }
            (auction.creator.clone(), false)
        }
    };

    auction.status = AuctionStatus::Finished;
    set_auction(e, &auction);

    AuctionFinishedEventData {
        item_id,
        recipient,
        creator: auction.creator,
        amount: auction.higher_bid,
        cleared,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Withdraw a running auction. The standing leader, if any, is refunded in full.
pub fn cancel_auction(e: &Env, creator: Address, item_id: u64) -> Result<(), Error> {
    creator.require_auth();

    let config = load_config(e)?;
    let gateway = TokenGateway::connect(e, &config)?;

    let mut auction = get_auction(e, item_id).ok_or(Error::InvalidState)?;

    if auction.creator != creator {
        return Err(Error::AccessDenied);
    }

    if auction.status != AuctionStatus::Active || is_over(e, &auction) {
        return Err(Error::InvalidState);
    }

    gateway.release_custody(item_id, &creator);

    let mut refunded_amount = 0;
    if let Some(leader) = &auction.higher_bidder {
        log!(e, "refunding leader on cancel: item, amount", item_id, auction.higher_bid);
        gateway.disburse(leader, auction.higher_bid);
        refunded_amount = auction.higher_bid;
    }

    auction.status = AuctionStatus::Cancelled;
    set_auction(e, &auction);

    AuctionCancelledEventData {
        item_id,
        creator,
        refunded_amount,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

fn active_auction(e: &Env, item_id: u64) -> Result<Auction, Error> {
    get_auction(e, item_id)
        .filter(|auction| auction.status == AuctionStatus::Active)
        .ok_or(Error::InvalidState)
}

fn is_over(e: &Env, auction: &Auction) -> bool {
    e.ledger().timestamp() >= auction.end_time
}
