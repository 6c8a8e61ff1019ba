//! Simulated wallet client
//!
//! Stands in for the real wallet SDK during development: connection,
//! balances and transaction submission all behave like the real thing,
//! including the asynchronous latency boundary, but no network I/O occurs.
//!
//! The client is explicitly constructed and cheaply clonable; hold one per
//! application and inject it where needed. Tests get isolation by building
//! a fresh client per test instead of resetting shared state.

use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::wallet::types::{BalanceMap, TransactionParams, TxHash, Wallet, WalletSnapshot};
use chrono::Utc;
use rand::RngCore;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::time::{sleep, timeout};

struct ClientState {
    wallet: Option<Wallet>,
    balances: BalanceMap,
}

/// Simulated wallet SDK client.
///
/// All operations suspend for the configured latency before touching
/// state, preserving the asynchronous boundary UI loading states depend
/// on. Balance mutation happens only in [`send_transaction`] (and the
/// connect/disconnect resets), under a single lock acquisition, so the
/// check-then-debit sequence is atomic: two concurrent spends can never
/// both pass the balance check against a stale value.
///
/// [`send_transaction`]: WalletClient::send_transaction
#[derive(Clone)]
pub struct WalletClient {
    config: WalletConfig,
    state: Arc<Mutex<ClientState>>,
    updates: watch::Sender<WalletSnapshot>,
}

impl WalletClient {
    pub fn new(config: WalletConfig) -> Self {
        let (updates, _) = watch::channel(WalletSnapshot::default());
        Self {
            config,
            state: Arc::new(Mutex::new(ClientState {
                wallet: None,
                balances: BalanceMap::new(),
            })),
            updates,
        }
    }

    /// Connect the wallet, seeding balances from configuration.
    ///
    /// Calling while already connected replaces the wallet record and
    /// re-seeds balances.
    pub async fn connect(&self) -> crate::Result<Wallet> {
        sleep(self.config.simulated_latency).await;

        let mut state = self.state.lock().await;
        let wallet = Wallet {
            address: random_address(),
            network: self.config.network.clone(),
            chain_id: self.config.chain_id,
            connected_at: Utc::now(),
        };
        state.wallet = Some(wallet.clone());
        state.balances = self.config.seed_balances.iter().cloned().collect();
        self.publish(&state);

        log::info!(
            "Wallet connected: {} on {} (chain {})",
            wallet.address,
            wallet.network,
            wallet.chain_id
        );
        Ok(wallet)
    }

    /// Disconnect, clearing the wallet and zeroing all balances.
    pub async fn disconnect(&self) -> crate::Result<()> {
        sleep(self.config.simulated_latency).await;

        let mut state = self.state.lock().await;
        if let Some(wallet) = state.wallet.take() {
            log::info!("Wallet disconnected: {}", wallet.address);
        }
        for amount in state.balances.values_mut() {
            *amount = 0;
        }
        self.publish(&state);
        Ok(())
    }

    /// Balance for a single token; unknown tokens read as zero.
    pub async fn balance(&self, token: &str) -> crate::Result<u64> {
        sleep(self.config.simulated_latency).await;

        let state = self.state.lock().await;
        if state.wallet.is_none() {
            return Err(WalletError::NotConnected);
        }
        Ok(state.balances.get(token).copied().unwrap_or(0))
    }

    /// Snapshot copy of all balances.
    ///
    /// Mutating the returned map does not affect client state. Fails with
    /// [`WalletError::NotConnected`] rather than returning a zeroed map.
    pub async fn balances(&self) -> crate::Result<BalanceMap> {
        sleep(self.config.simulated_latency).await;

        let state = self.state.lock().await;
        if state.wallet.is_none() {
            return Err(WalletError::NotConnected);
        }
        Ok(state.balances.clone())
    }

    /// Submit a transaction, debiting the token balance on success.
    ///
    /// The submission is bounded by the configured send timeout; a timeout
    /// leaves balances untouched. An amount exceeding the current balance
    /// fails with [`WalletError::InsufficientBalance`] without mutating
    /// state.
    pub async fn send_transaction(&self, params: &TransactionParams) -> crate::Result<TxHash> {
        match timeout(self.config.send_timeout, self.submit(params)).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("Transaction to {} timed out", params.to);
                Err(WalletError::Timeout)
            }
        }
    }

    async fn submit(&self, params: &TransactionParams) -> crate::Result<TxHash> {
        sleep(self.config.simulated_latency).await;

        let mut state = self.state.lock().await;
        if state.wallet.is_none() {
            return Err(WalletError::NotConnected);
        }

        let token = params.token();
        let available = state.balances.get(token).copied().unwrap_or(0);
        if available < params.amount {
            log::debug!(
                "Rejecting transaction: {} {} requested, {} available",
                params.amount,
                token,
                available
            );
            return Err(WalletError::InsufficientBalance);
        }

        state.balances.insert(token.to_string(), available - params.amount);
        self.publish(&state);

        let tx_hash = TxHash::random();
        log::info!(
            "Transaction submitted: {} ({} {} to {})",
            tx_hash,
            params.amount,
            token,
            params.to
        );
        Ok(tx_hash)
    }

    /// Subscribe to wallet snapshots.
    ///
    /// The current snapshot is readable immediately, so a new subscriber
    /// never races a separate fetch. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<WalletSnapshot> {
        self.updates.subscribe()
    }

    /// Cheap synchronous peek at the connected wallet, if any.
    pub fn wallet(&self) -> Option<Wallet> {
        self.updates.borrow().wallet.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.updates.borrow().is_connected()
    }

    /// Marketplace counterparty address from this client's configuration.
    pub fn marketplace_address(&self) -> &str {
        &self.config.marketplace_address
    }

    // Must be called while holding the state lock so no subscriber can
    // observe an intermediate state.
    fn publish(&self, state: &ClientState) {
        self.updates.send_replace(WalletSnapshot {
            wallet: state.wallet.clone(),
            balances: state.balances.clone(),
        });
    }
}

fn random_address() -> String {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_address_shape() {
        let address = random_address();
        assert!(address.starts_with("0x"));
        assert_eq!(address.len(), 42);
    }

    #[tokio::test]
    async fn test_starts_disconnected() {
        let client = WalletClient::new(WalletConfig::default());
        assert!(!client.is_connected());
        assert!(client.wallet().is_none());
    }
}
