//! Ticket tier data and quantity bounds

use serde::{Deserialize, Serialize};

/// A purchasable ticket category for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTier {
    pub tier_id: String,
    pub name: String,
    /// Price per ticket in IDRX base units
    pub price: u64,
    /// Tickets remaining in this tier
    pub available: u32,
    /// Per-purchase cap set by the organizer
    pub max_per_purchase: u32,
}

impl TicketTier {
    pub fn new(
        tier_id: impl Into<String>,
        name: impl Into<String>,
        price: u64,
        available: u32,
        max_per_purchase: u32,
    ) -> Self {
        Self {
            tier_id: tier_id.into(),
            name: name.into(),
            price,
            available,
            max_per_purchase,
        }
    }

    pub fn is_sold_out(&self) -> bool {
        self.available == 0
    }

    /// Clamp a requested quantity to `[1, min(max_per_purchase, available)]`.
    ///
    /// A sold-out tier clamps to 1; callers must reject the purchase via
    /// [`is_sold_out`] before relying on the result.
    ///
    /// [`is_sold_out`]: TicketTier::is_sold_out
    pub fn clamp_quantity(&self, requested: u32) -> u32 {
        let cap = self.max_per_purchase.min(self.available).max(1);
        requested.clamp(1, cap)
    }
}
