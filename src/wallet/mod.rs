//! Simulated wallet client
//!
//! - Connection lifecycle and identity
//! - Token balances (single mutation path: `send_transaction`)
//! - Snapshot fan-out to subscribers

mod client;
mod types;

pub use client::WalletClient;
pub use types::{
    BalanceMap, TransactionParams, TransactionResult, TxHash, Wallet, WalletSnapshot,
    DEFAULT_TOKEN,
};
