//! Checkout wizard state machine
//!
//! A linear four-step flow — Connect, Review, Payment, Confirmation — with
//! a single backward edge from Payment to Review. One session covers one
//! event/tier/quantity selection; Confirmation is terminal and the only way
//! out is external navigation, which ends the session.

mod tier;

pub use tier::TicketTier;

use crate::error::CheckoutError;
use crate::handle::WalletHandle;
use crate::wallet::{TransactionResult, TxHash};
use serde::{Deserialize, Serialize};

/// Steps of the checkout wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutStep {
    Connect,
    Review,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    /// Zero-based position for step indicators in the UI.
    pub fn index(self) -> u8 {
        match self {
            Self::Connect => 0,
            Self::Review => 1,
            Self::Payment => 2,
            Self::Confirmation => 3,
        }
    }
}

/// One user's traversal of the purchase wizard.
///
/// The starting step is derived from the wallet's connection status at
/// entry, so "wallet connected" and "checkout step" cannot disagree at
/// mount. All state exposed to the UI is a read-only projection.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    event_id: String,
    tier: TicketTier,
    quantity: u32,
    step: CheckoutStep,
    tx_hash: Option<TxHash>,
    last_error: Option<String>,
}

impl CheckoutSession {
    /// Start a session for a selected tier.
    ///
    /// Begins at Review when the wallet is already connected, else at
    /// Connect.
    pub fn begin(event_id: impl Into<String>, tier: TicketTier, wallet_ready: bool) -> Self {
        let step = if wallet_ready {
            CheckoutStep::Review
        } else {
            CheckoutStep::Connect
        };
        let quantity = tier.clamp_quantity(1);
        Self {
            event_id: event_id.into(),
            tier,
            quantity,
            step,
            tx_hash: None,
            last_error: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn tier(&self) -> &TicketTier {
        &self.tier
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Hash of the completed purchase, present once Confirmation is
    /// reached.
    pub fn transaction_hash(&self) -> Option<&TxHash> {
        self.tx_hash.as_ref()
    }

    /// Error from the most recent failed payment attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Confirmation
    }

    /// Total price for the current selection.
    ///
    /// Recomputed on every call so it can never go stale across a quantity
    /// or tier change.
    pub fn total_price(&self) -> u64 {
        self.tier.price.saturating_mul(u64::from(self.quantity))
    }

    /// Advance Connect → Review after the wallet façade reports ready.
    pub fn wallet_connected(&mut self) -> Result<(), CheckoutError> {
        match self.step {
            CheckoutStep::Connect => {
                self.step = CheckoutStep::Review;
                Ok(())
            }
            step => Err(CheckoutError::invalid_transition(step, "wallet_connected")),
        }
    }

    /// Set the quantity while reviewing. Always clamped to the tier's
    /// bounds; returns the quantity actually stored.
    pub fn set_quantity(&mut self, requested: u32) -> Result<u32, CheckoutError> {
        match self.step {
            CheckoutStep::Review => {
                self.quantity = self.tier.clamp_quantity(requested);
                Ok(self.quantity)
            }
            step => Err(CheckoutError::invalid_transition(step, "set_quantity")),
        }
    }

    /// Switch to a different tier while reviewing.
    ///
    /// Only one tier may be active per session, so replacing the current
    /// selection requires `confirmed = true`. The quantity is re-clamped to
    /// the new tier's bounds.
    pub fn switch_tier(&mut self, tier: TicketTier, confirmed: bool) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Review {
            return Err(CheckoutError::invalid_transition(self.step, "switch_tier"));
        }
        if !confirmed {
            return Err(CheckoutError::TierChangeUnconfirmed(
                self.tier.tier_id.clone(),
            ));
        }
        self.quantity = tier.clamp_quantity(self.quantity);
        self.tier = tier;
        Ok(())
    }

    /// Advance Review → Payment, clamping the quantity first.
    pub fn proceed_to_payment(&mut self) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Review {
            return Err(CheckoutError::invalid_transition(
                self.step,
                "proceed_to_payment",
            ));
        }
        if self.tier.is_sold_out() {
            return Err(CheckoutError::SoldOut(self.tier.tier_id.clone()));
        }
        self.quantity = self.tier.clamp_quantity(self.quantity);
        self.step = CheckoutStep::Payment;
        log::debug!(
            "Checkout {}: entering payment, {} x tier {}",
            self.event_id,
            self.quantity,
            self.tier.tier_id
        );
        Ok(())
    }

    /// The single backward edge: Payment → Review, preserving the chosen
    /// quantity.
    pub fn back_to_review(&mut self) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Payment {
            return Err(CheckoutError::invalid_transition(self.step, "back_to_review"));
        }
        self.step = CheckoutStep::Review;
        Ok(())
    }

    /// Attempt the purchase.
    ///
    /// On a confirmed result the session advances to Confirmation carrying
    /// the transaction hash. On a rejected result it stays in Payment with
    /// the error recorded for the UI; retry is a fresh user action, never
    /// automatic.
    pub async fn pay(&mut self, wallet: &WalletHandle) -> Result<TransactionResult, CheckoutError> {
        if self.step != CheckoutStep::Payment {
            return Err(CheckoutError::invalid_transition(self.step, "pay"));
        }

        let result = wallet
            .buy_ticket(
                &self.event_id,
                &self.tier.tier_id,
                self.tier.price,
                self.quantity,
            )
            .await;

        match &result {
            TransactionResult::Confirmed { tx_hash } => {
                self.tx_hash = Some(tx_hash.clone());
                self.last_error = None;
                self.step = CheckoutStep::Confirmation;
                log::info!(
                    "Checkout {} complete: {} x tier {} ({})",
                    self.event_id,
                    self.quantity,
                    self.tier.tier_id,
                    tx_hash
                );
            }
            TransactionResult::Rejected { error } => {
                self.last_error = Some(error.clone());
                log::debug!("Checkout {} payment rejected: {}", self.event_id, error);
            }
        }
        Ok(result)
    }
}
