//! # Transaction Summaries
//!
//! What a lane reports when a sale closes.
//!
//! ## Two Totals
//! ```text
//! subtotal_cents ── rule-adjusted, what the shopper pays
//! total_cents    ── raw sum printed on the receipt
//! ```
//! Both are kept: with a 3-for-2 deal on beans they legitimately differ.

use chrono::{DateTime, Utc};
use register_core::{Money, Receipt};
use serde::Serialize;
use uuid::Uuid;

use crate::error::LaneResult;

/// A closed transaction.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionSummary {
    /// Unique transaction identifier (UUID v4).
    pub id: String,

    /// Lane that rang up the sale.
    pub lane_id: String,

    /// Pricing scheme active at close.
    pub pricing: String,

    /// The receipt, frozen at close.
    pub receipt: Receipt,

    /// Number of scanned items.
    pub item_count: usize,

    /// Rule-adjusted subtotal at close.
    pub subtotal_cents: i64,

    /// Raw receipt total.
    pub total_cents: i64,

    /// When the transaction was closed.
    pub closed_at: DateTime<Utc>,
}

impl TransactionSummary {
    /// Builds a summary for a receipt that has just been taken off the register.
    pub fn new(lane_id: &str, pricing: &str, receipt: Receipt, subtotal: Money) -> Self {
        TransactionSummary {
            id: Uuid::new_v4().to_string(),
            lane_id: lane_id.to_string(),
            pricing: pricing.to_string(),
            item_count: receipt.len(),
            subtotal_cents: subtotal.cents(),
            total_cents: receipt.total().cents(),
            receipt,
            closed_at: Utc::now(),
        }
    }

    /// Rule-adjusted subtotal as Money.
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Raw receipt total as Money.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// What the pricing scheme saved the shopper.
    pub fn savings(&self) -> Money {
        self.total() - self.subtotal()
    }

    /// Serializes the summary as JSON.
    pub fn to_json(&self) -> LaneResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
