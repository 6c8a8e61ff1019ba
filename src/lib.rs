//! Ticketing-Wallet: wallet and checkout core for an NFT ticketing marketplace
//!
//! This crate provides the non-presentational core of a ticketing
//! marketplace front end: a simulated wallet client with token balances,
//! a transaction façade for the marketplace's domain actions, and the
//! checkout wizard state machine.
//!
//! # Architecture
//!
//! - **WalletClient**: simulated wallet SDK owning connection state and
//!   balances; the single mutation path for funds
//! - **TransactionService**: translates domain actions (buy, resell,
//!   transfer) into wallet transactions
//! - **WalletHandle**: reactive façade with pre-flight guards, consumed by
//!   UI callers
//! - **CheckoutSession**: the Connect → Review → Payment → Confirmation
//!   wizard
//!
//! # Example
//!
//! ```ignore
//! use ticketing_wallet::{WalletClient, WalletConfig, WalletHandle};
//!
//! let client = WalletClient::new(WalletConfig::from_env());
//! let handle = WalletHandle::new(client).await;
//!
//! handle.connect().await?;
//! let result = handle.buy_ticket("evt1", "tier1", 250, 1).await;
//! ```

// Public modules
pub mod checkout;
pub mod config;
pub mod error;
pub mod handle;
pub mod transactions;
pub mod wallet;

// Re-exports for convenience
pub use checkout::{CheckoutSession, CheckoutStep, TicketTier};
pub use config::WalletConfig;
pub use error::{CheckoutError, WalletError};
pub use handle::WalletHandle;
pub use transactions::{TicketAction, TransactionService};
pub use wallet::{
    BalanceMap, TransactionParams, TransactionResult, TxHash, Wallet, WalletClient,
    WalletSnapshot, DEFAULT_TOKEN,
};

// Common result type
pub type Result<T> = std::result::Result<T, WalletError>;
