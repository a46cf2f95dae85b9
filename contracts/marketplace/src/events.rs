use soroban_sdk::{contractevent, Address, String};

/// Event emitted when the marketplace is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub administrator: Address,
}

/// Event emitted when the ledger bindings change
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgersUpdatedEventData {
    #[topic]
    pub administrator: Address,
    pub collectible_ledger: Address,
    pub settlement_ledger: Address,
}

/// Event emitted when an item is minted through the marketplace
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemCreatedEventData {
    #[topic]
    pub item_id: u64,
    #[topic]
    pub owner: Address,
    pub metadata_uri: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemListedEventData {
    #[topic]
    pub item_id: u64,
    #[topic]
    pub seller: Address,
    pub price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemSoldEventData {
    #[topic]
    pub item_id: u64,
    #[topic]
    pub buyer: Address,
    pub seller: Address,
    pub price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemCancelledEventData {
    #[topic]
    pub item_id: u64,
    #[topic]
    pub seller: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEventData {
    #[topic]
    pub item_id: u64,
    #[topic]
    pub creator: Address,
    pub min_price: i128,
    pub end_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub item_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub bidder_count: u32,
}

/// Event emitted when an auction is settled.
/// `cleared` is false when the item went back to its creator.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinishedEventData {
    #[topic]
    pub item_id: u64,
    pub recipient: Address,
    pub creator: Address,
    pub amount: i128,
    pub cleared: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub item_id: u64,
    #[topic]
    pub creator: Address,
    pub refunded_amount: i128,
}
