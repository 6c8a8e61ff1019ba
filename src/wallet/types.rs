//! Core wallet data types

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Token used to price and settle all ticket purchases.
pub const DEFAULT_TOKEN: &str = "IDRX";

/// Token symbol → amount in base units.
pub type BalanceMap = HashMap<String, u64>;

/// A connected wallet identity.
///
/// Presence of a `Wallet` value is the connection flag; the client stores
/// `Option<Wallet>` and clears it on disconnect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    pub network: String,
    pub chain_id: u64,
    pub connected_at: DateTime<Utc>,
}

/// Parameters for a single wallet transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionParams {
    /// Counterparty address
    pub to: String,
    /// Amount in base units of `token`
    pub amount: u64,
    /// Token to debit; `None` means [`DEFAULT_TOKEN`]
    pub token: Option<String>,
    /// Opaque call data attached to the transaction
    pub data: Option<String>,
}

impl TransactionParams {
    pub fn new(to: impl Into<String>, amount: u64) -> Self {
        Self {
            to: to.into(),
            amount,
            token: None,
            data: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Token this transaction debits, defaulting to [`DEFAULT_TOKEN`]
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or(DEFAULT_TOKEN)
    }
}

/// Transaction hash, `0x`-prefixed hex over 20 random bytes.
///
/// The simulation has no chain to derive a real hash from, so hashes are
/// random identifiers with the same shape the UI expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    pub(crate) fn random() -> Self {
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a domain transaction.
///
/// A closed variant: a confirmed result always carries a hash and never an
/// error, a rejected result always carries an error and never a hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TransactionResult {
    #[serde(rename_all = "camelCase")]
    Confirmed { tx_hash: TxHash },
    #[serde(rename_all = "camelCase")]
    Rejected { error: String },
}

impl TransactionResult {
    pub fn confirmed(tx_hash: TxHash) -> Self {
        Self::Confirmed { tx_hash }
    }

    pub fn rejected(error: impl ToString) -> Self {
        Self::Rejected {
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn tx_hash(&self) -> Option<&TxHash> {
        match self {
            Self::Confirmed { tx_hash } => Some(tx_hash),
            Self::Rejected { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Confirmed { .. } => None,
            Self::Rejected { error } => Some(error),
        }
    }
}

impl From<crate::error::WalletError> for TransactionResult {
    fn from(err: crate::error::WalletError) -> Self {
        Self::rejected(err)
    }
}

/// Point-in-time view of the wallet published to subscribers.
///
/// Snapshots are published under the client's state lock, so a subscriber
/// reading one always observes fully post-mutation state.
#[derive(Debug, Clone, Default)]
pub struct WalletSnapshot {
    pub wallet: Option<Wallet>,
    pub balances: BalanceMap,
}

impl WalletSnapshot {
    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_hash_shape() {
        let hash = TxHash::random();
        assert!(hash.as_str().starts_with("0x"));
        // 20 bytes hex-encoded after the prefix
        assert_eq!(hash.as_str().len(), 42);
    }

    #[test]
    fn test_result_exclusivity() {
        let ok = TransactionResult::confirmed(TxHash::random());
        assert!(ok.is_success());
        assert!(ok.tx_hash().is_some());
        assert!(ok.error().is_none());

        let err = TransactionResult::rejected("Insufficient balance");
        assert!(!err.is_success());
        assert!(err.tx_hash().is_none());
        assert_eq!(err.error(), Some("Insufficient balance"));
    }

    #[test]
    fn test_params_default_token() {
        let params = TransactionParams::new("0xabc", 10);
        assert_eq!(params.token(), DEFAULT_TOKEN);
        let params = params.with_token("LSK");
        assert_eq!(params.token(), "LSK");
    }
}
