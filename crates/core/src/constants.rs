/// Decimal scale used when persisting holding quantities.
///
/// Quantities carry eight fractional digits, so a fully sold holding renders
/// as `0.00000000`.
pub const QUANTITY_SCALE: u32 = 8;

/// Decimal scale for persisted prices.
pub const PRICE_SCALE: u32 = 8;

/// Decimal precision for display values (market value, market cap).
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
