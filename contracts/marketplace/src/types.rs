use soroban_sdk::{contracttype, Address};

/// Storage keys for the marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Ledger bindings and administrator
    Config,
    /// Direct-sale record by item ID
    SellOrder(u64),
    /// Auction record by item ID
    Auction(u64),
}

/// Direct-sale status of an item
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OrderStatus {
    /// Held by its owner, not for sale
    Owned = 0,
    /// In escrow, purchasable at the recorded price
    Listed = 1,
}

/// Auction lifecycle status
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionStatus {
    /// Accepting bids until `end_time`
    Active = 0,
    /// Settled, whether or not the sale cleared
    Finished = 1,
    /// Withdrawn by its creator
    Cancelled = 2,
}

/// Ledger bindings and the administrator allowed to change them
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Identity fixed at initialization
    pub administrator: Address,
    /// Unique-item registry
    pub collectible_ledger: Option<Address>,
    /// Fungible settlement token
    pub settlement_ledger: Option<Address>,
    /// Timestamp of last configuration update
    pub updated_at: u64,
}

/// Fixed-price sale record, one per item
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellOrder {
    pub item_id: u64,
    /// Lister while listed, last buyer once sold
    pub seller: Address,
    pub price: i128,
    pub status: OrderStatus,
}

/// English auction record, one per item
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub item_id: u64,
    pub creator: Address,
    /// Bids must be strictly above this
    pub min_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub higher_bidder: Option<Address>,
    /// Exactly the amount escrow holds for this auction while active
    pub higher_bid: i128,
    /// Accepted bids, not unique bidders
    pub bidder_count: u32,
    pub status: AuctionStatus,
}

/// Length of every auction in seconds (72 hours)
pub const AUCTION_DURATION: u64 = 72 * 60 * 60;

/// Accepted bids needed before an auction sells to its leader
pub const MIN_BIDS_TO_CLEAR: u32 = 3;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
