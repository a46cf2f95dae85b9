use soroban_sdk::Env;

use crate::types::{
    Auction, AuctionStatus, OrderStatus, RegistryConfig, SellOrder, StorageKey,
    INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Config)
}

/// Get ledger bindings and administrator
pub fn get_config(e: &Env) -> Option<RegistryConfig> {
    e.storage().instance().get::<_, RegistryConfig>(&StorageKey::Config)
}

/// Set ledger bindings and administrator
pub fn set_config(e: &Env, config: &RegistryConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

/// Extend the TTL of instance storage.
/// Called internally during state-changing operations.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// SELL ORDER STORAGE
// ============================================================================

/// Get the sell order recorded for an item
pub fn get_sell_order(e: &Env, item_id: u64) -> Option<SellOrder> {
    let key = StorageKey::SellOrder(item_id);
    let order = e.storage().persistent().get::<_, SellOrder>(&key);
    if order.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    order
}

/// Overwrite the sell order for an item
pub fn set_sell_order(e: &Env, order: &SellOrder) {
    let key = StorageKey::SellOrder(order.item_id);
    e.storage().persistent().set(&key, order);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

/// Get the auction recorded for an item
pub fn get_auction(e: &Env, item_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(item_id);
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

/// Overwrite the auction for an item
pub fn set_auction(e: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.item_id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// MUTUAL EXCLUSION
// ============================================================================

/// True while the item is in escrow for a direct sale
pub fn is_listed(e: &Env, item_id: u64) -> bool {
    matches!(
        get_sell_order(e, item_id),
        Some(SellOrder { status: OrderStatus::Listed, .. })
    )
}

/// True while the item is in escrow for an auction
pub fn has_active_auction(e: &Env, item_id: u64) -> bool {
    matches!(
        get_auction(e, item_id),
        Some(Auction { status: AuctionStatus::Active, .. })
    )
}
