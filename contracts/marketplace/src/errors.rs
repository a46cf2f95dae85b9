use soroban_sdk::contracterror;

/// Error codes for the collectible marketplace contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller lacks the role the operation requires
    AccessDenied = 3,
    /// Record is not in the state the operation requires
    InvalidState = 4,
    /// Bid does not exceed the current threshold
    InsufficientBid = 5,
    /// Collectible or settlement ledger address not bound yet
    LedgersNotConfigured = 6,
    /// Price or amount out of range
    InvalidAmount = 7,
    /// Item has never been listed for direct sale
    OrderNotFound = 8,
    /// Item has never been put on auction
    AuctionNotFound = 9,
}
