//! # Register State
//!
//! Shares one lane's register between threads.
//!
//! ## Thread Safety
//! The register is wrapped in `Arc<Mutex<T>>` because:
//! 1. A scanner thread and a tender thread may both touch the register
//! 2. `scan` and `close_transaction` must never interleave, or an item could
//!    land on a receipt that is already being handed out
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register State Operations                            │
//! │                                                                         │
//! │  Scanner beep ───────────► scan() ──────────────► receipt.push(item)    │
//! │                                                                         │
//! │  Display refresh ────────► subtotal() ──────────► (read only)           │
//! │                                                                         │
//! │  Cashier presses TOTAL ──► close_transaction() ─► subtotal + swap       │
//! │                                                                         │
//! │  NOTE: Every operation takes the same lock, so the subtotal recorded   │
//! │        at close always matches the receipt that is handed out.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use register_core::{Money, PricingScheme, Register, Sku};
use tracing::{debug, info};

use crate::config::LaneConfig;
use crate::error::LaneResult;
use crate::transaction::TransactionSummary;

/// Lock-guarded register for one lane.
///
/// Cloning shares the same register.
#[derive(Debug, Clone)]
pub struct RegisterState {
    lane_id: String,
    register: Arc<Mutex<Register>>,
}

impl RegisterState {
    /// Wraps an existing register.
    pub fn new(lane_id: impl Into<String>, register: Register) -> Self {
        RegisterState {
            lane_id: lane_id.into(),
            register: Arc::new(Mutex::new(register)),
        }
    }

    /// Builds the register described by a lane config.
    pub fn from_config(config: &LaneConfig) -> LaneResult<Self> {
        let register = config.build_register()?;
        info!(
            lane_id = %config.lane.id,
            pricing = register.pricing_name(),
            "Register opened"
        );
        Ok(Self::new(config.lane.id.clone(), register))
    }

    /// Lane this register belongs to.
    pub fn lane_id(&self) -> &str {
        &self.lane_id
    }

    /// Executes a function with read access to the register.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_register(|register| register.item_count());
    /// ```
    pub fn with_register<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Register) -> R,
    {
        // The register holds plain data; a panic mid-scan cannot leave it torn.
        let register = self.register.lock().unwrap_or_else(PoisonError::into_inner);
        f(&register)
    }

    /// Executes a function with write access to the register.
    pub fn with_register_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Register) -> R,
    {
        let mut register = self.register.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut register)
    }

    /// Scans an item onto the current receipt.
    pub fn scan(&self, item: impl Into<Sku>) {
        let item = item.into();
        debug!(lane_id = %self.lane_id, item = %item, "Item scanned");
        self.with_register_mut(|register| register.scan(item));
    }

    /// Rule-adjusted running total.
    pub fn subtotal(&self) -> Money {
        self.with_register(Register::subtotal)
    }

    /// Replaces the pricing scheme mid-shift.
    pub fn set_pricing(&self, scheme: Box<dyn PricingScheme>) {
        let name = scheme.name();
        self.with_register_mut(|register| register.set_pricing(scheme));
        info!(lane_id = %self.lane_id, pricing = name, "Pricing scheme changed");
    }

    /// Closes the current transaction and starts a new one.
    ///
    /// The subtotal is computed under the same lock as the receipt swap.
    pub fn close_transaction(&self) -> TransactionSummary {
        let summary = self.with_register_mut(|register| {
            let subtotal = register.subtotal();
            let pricing = register.pricing_name();
            let receipt = register.total();
            TransactionSummary::new(&self.lane_id, pricing, receipt, subtotal)
        });

        info!(
            lane_id = %self.lane_id,
            transaction_id = %summary.id,
            items = summary.item_count,
            subtotal = %summary.subtotal(),
            total = %summary.total(),
            "Transaction closed"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use register_core::pricing::{Coupon, MultiBuyPricing};
    use register_core::{DiscountRate, Item, WeightedItem};
    use std::thread;

    #[test]
    fn test_scan_and_close() {
        let state = RegisterState::new("lane-1", Register::new());
        state.scan(Item::new("Beans (8oz Can)", 199).unwrap());
        state.scan(Item::new("Pencil", 99).unwrap());
        assert_eq!(state.subtotal().cents(), 298);

        let summary = state.close_transaction();
        assert_eq!(summary.lane_id, "lane-1");
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_cents, 298);
        assert_eq!(summary.subtotal_cents, 298);

        // The register starts fresh
        assert!(state.subtotal().is_zero());
        assert_eq!(state.with_register(|r| r.item_count()), 0);
    }

    #[test]
    fn test_close_records_rule_adjusted_subtotal() {
        let deal = MultiBuyPricing::new("Beans", 199).unwrap();
        let state = RegisterState::new("lane-2", Register::with_pricing(Box::new(deal)));
        for _ in 0..4 {
            state.scan(Item::new("Beans", 199).unwrap());
        }

        let summary = state.close_transaction();
        assert_eq!(summary.pricing, "multi_buy");
        assert_eq!(summary.subtotal_cents, 597);
        assert_eq!(summary.total_cents, 796);
        assert_eq!(
            summary.receipt.output().lines().last(),
            Some("TOTAL: $7.96")
        );
    }

    #[test]
    fn test_set_pricing_applies_to_open_transaction() {
        let state = RegisterState::new("lane-1", Register::new());
        state.scan(Item::new("Orange", 100).unwrap());
        state.scan(Item::new("Orange", 100).unwrap());
        assert_eq!(state.subtotal().cents(), 200);

        let coupon = Coupon::new("Orange", DiscountRate::from_fraction(0.15).unwrap()).unwrap();
        state.set_pricing(Box::new(coupon));
        assert_eq!(state.subtotal().cents(), 185);
    }

    #[test]
    fn test_from_config() {
        let config: LaneConfig = toml::from_str(
            r#"
            [lane]
            id = "lane-4"

            [pricing]
            kind = "rain_check"
            item_name = "Watermelon"
            promised_price_cents = 80
            weight = 3.0
            "#,
        )
        .unwrap();

        let state = RegisterState::from_config(&config).unwrap();
        assert_eq!(state.lane_id(), "lane-4");

        state.scan(WeightedItem::new("Watermelon", 3.0, 100).unwrap());
        assert_eq!(state.subtotal().cents(), 240);
    }

    #[test]
    fn test_concurrent_scans_are_not_lost() {
        let state = RegisterState::new("lane-1", Register::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        state.scan(Item::new("Pencil", 99).unwrap());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let summary = state.close_transaction();
        assert_eq!(summary.item_count, 100);
        assert_eq!(summary.total_cents, 9900);
    }

    #[test]
    fn test_scans_split_cleanly_across_closes() {
        let state = RegisterState::new("lane-1", Register::new());
        let scanner = {
            let state = state.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    state.scan(Item::new("Pencil", 1).unwrap());
                }
            })
        };

        let mut closed = 0;
        for _ in 0..20 {
            closed += state.close_transaction().item_count;
        }
        scanner.join().unwrap();
        closed += state.close_transaction().item_count;

        // Every scanned item ends up on exactly one receipt.
        assert_eq!(closed, 200);
    }
}
