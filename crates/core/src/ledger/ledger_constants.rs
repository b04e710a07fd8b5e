// Order sides

/// Acquire quantity of an asset. Creates the holding on first buy.
pub const ORDER_SIDE_BUY: &str = "BUY";

/// Dispose of quantity from an existing holding.
pub const ORDER_SIDE_SELL: &str = "SELL";

// Order types. Only MARKET affects settlement today; LIMIT and STOP are
// accepted as metadata and settle identically.

pub const ORDER_TYPE_MARKET: &str = "MARKET";
pub const ORDER_TYPE_LIMIT: &str = "LIMIT";
pub const ORDER_TYPE_STOP: &str = "STOP";

// Trade record statuses

/// Settled and applied to the holding. The only status the synchronous
/// settlement path produces.
pub const TRADE_STATUS_COMPLETED: &str = "COMPLETED";

/// Reserved for a future asynchronous settlement path.
pub const TRADE_STATUS_PENDING: &str = "PENDING";

/// Reserved for a future asynchronous settlement path.
pub const TRADE_STATUS_FAILED: &str = "FAILED";
