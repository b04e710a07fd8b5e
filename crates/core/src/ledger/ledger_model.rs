//! Ledger domain models and settlement arithmetic.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ledger_constants::*;
use super::ledger_errors::TradeError;
use crate::assets::Asset;
use crate::constants::QUANTITY_SCALE;
use crate::holdings::Holding;

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => ORDER_SIDE_BUY,
            OrderSide::Sell => ORDER_SIDE_SELL,
        }
    }
}

impl FromStr for OrderSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ORDER_SIDE_BUY => Ok(OrderSide::Buy),
            ORDER_SIDE_SELL => Ok(OrderSide::Sell),
            other => Err(format!("Unknown order side: {}", other)),
        }
    }
}

/// Order type, kept as a tagged variant for extensibility.
///
/// Only `Market` affects settlement: with no matching engine, limit and stop
/// orders are accepted as metadata and settle immediately at the current
/// quoted price regardless of order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    #[default]
    Market,
    Limit,
    Stop,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => ORDER_TYPE_MARKET,
            OrderType::Limit => ORDER_TYPE_LIMIT,
            OrderType::Stop => ORDER_TYPE_STOP,
        }
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ORDER_TYPE_MARKET => Ok(OrderType::Market),
            ORDER_TYPE_LIMIT => Ok(OrderType::Limit),
            ORDER_TYPE_STOP => Ok(OrderType::Stop),
            other => Err(format!("Unknown order type: {}", other)),
        }
    }
}

/// Lifecycle status of a trade record.
///
/// `Pending` and `Failed` exist in the data model for a future asynchronous
/// settlement path; the synchronous path only ever writes `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    #[default]
    Completed,
    Pending,
    Failed,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Completed => TRADE_STATUS_COMPLETED,
            TradeStatus::Pending => TRADE_STATUS_PENDING,
            TradeStatus::Failed => TRADE_STATUS_FAILED,
        }
    }
}

impl FromStr for TradeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TRADE_STATUS_COMPLETED => Ok(TradeStatus::Completed),
            TRADE_STATUS_PENDING => Ok(TradeStatus::Pending),
            TRADE_STATUS_FAILED => Ok(TradeStatus::Failed),
            other => Err(format!("Unknown trade status: {}", other)),
        }
    }
}

/// Input model for placing an order.
///
/// The quantity arrives as a string from the caller and is parsed to a
/// decimal during validation, never through binary floating point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub account_id: String,
    pub asset_id: String,
    pub side: OrderSide,
    pub quantity: String,
    #[serde(default)]
    pub order_type: OrderType,
    /// Accepted as metadata; not consulted during settlement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<String>,
    /// Accepted as metadata; not consulted during settlement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
}

impl NewOrder {
    /// Parses and validates the order quantity.
    ///
    /// Fails with [`TradeError::InvalidQuantity`] for anything that is not a
    /// strictly positive decimal at the persisted quantity scale or coarser.
    /// This runs before any lookup.
    pub fn validated_quantity(&self) -> Result<Decimal, TradeError> {
        let quantity = Decimal::from_str(self.quantity.trim())
            .map_err(|_| TradeError::InvalidQuantity(self.quantity.clone()))?;
        if quantity <= Decimal::ZERO {
            return Err(TradeError::InvalidQuantity(self.quantity.clone()));
        }
        // Quantities persist at scale 8; anything finer is rejected rather
        // than rounded. Trailing zeros normalize away first.
        let quantity = quantity.normalize();
        if quantity.scale() > QUANTITY_SCALE {
            return Err(TradeError::InvalidQuantity(self.quantity.clone()));
        }
        Ok(quantity)
    }
}

/// A validated order handed to the storage layer for atomic settlement.
///
/// The asset price and holding quantity are deliberately absent: the
/// settlement transaction reads both inside one consistent view so the
/// executed price and the sufficiency check come from the same snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRequest {
    pub account_id: String,
    pub asset_id: String,
    pub side: OrderSide,
    pub quantity: Decimal,
    pub order_type: OrderType,
}

/// Immutable log entry of a settled order. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    pub account_id: String,
    pub asset_id: String,
    pub side: OrderSide,
    pub quantity: Decimal,
    /// Asset price at the settlement snapshot.
    pub price: Decimal,
    pub status: TradeStatus,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a settled order: the appended trade record, the updated
/// holding, and the asset snapshot used to price the trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResult {
    pub record: TradeRecord,
    pub holding: Holding,
    pub asset: Asset,
}

/// Computes the post-settlement holding quantity.
///
/// * buy: held quantity (zero if the holding does not exist yet) plus the
///   requested quantity;
/// * sell: held minus requested, rejected with [`TradeError::NoHoldingToSell`]
///   when the holding is absent and [`TradeError::InsufficientHolding`] when
///   the result would be negative.
///
/// The result is rescaled to the persisted quantity scale so a fully sold
/// holding reads back as `0.00000000`.
pub fn settled_quantity(
    side: OrderSide,
    requested: Decimal,
    held: Option<Decimal>,
    asset_id: &str,
) -> Result<Decimal, TradeError> {
    let mut new_quantity = match side {
        OrderSide::Buy => held.unwrap_or(Decimal::ZERO) + requested,
        OrderSide::Sell => {
            let held = held.ok_or_else(|| TradeError::NoHoldingToSell(asset_id.to_string()))?;
            if requested > held {
                return Err(TradeError::InsufficientHolding { held, requested });
            }
            held - requested
        }
    };
    if new_quantity.scale() < QUANTITY_SCALE {
        new_quantity.rescale(QUANTITY_SCALE);
    }
    Ok(new_quantity)
}
