//! Error types for wallet and checkout operations

use crate::checkout::CheckoutStep;
use thiserror::Error;

/// Errors reported by the wallet client and its façades.
///
/// Display strings for `NotConnected` and `InsufficientBalance` are the
/// exact user-facing messages surfaced by the UI layer, so they are part of
/// the contract here.
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet not connected")]
    NotConnected,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Transaction timed out")]
    Timeout,

    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from the checkout wizard state machine.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Action '{action}' is not allowed at checkout step {step:?}")]
    InvalidTransition {
        step: CheckoutStep,
        action: &'static str,
    },

    #[error("Switching away from tier '{0}' requires explicit confirmation")]
    TierChangeUnconfirmed(String),

    #[error("Tier '{0}' is sold out")]
    SoldOut(String),
}

impl CheckoutError {
    /// Create an invalid-transition error for the given step and action
    pub fn invalid_transition(step: CheckoutStep, action: &'static str) -> Self {
        Self::InvalidTransition { step, action }
    }
}
