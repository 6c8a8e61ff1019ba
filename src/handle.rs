//! Reactive wallet façade for UI callers
//!
//! [`WalletHandle`] is what pages and components consume: it tracks
//! connection progress, caches the balance map for synchronous reads, and
//! guards domain operations with pre-flight checks so a doomed call fails
//! with a user-facing message before incurring the simulated network
//! latency. The guards deliberately duplicate the client's own checks —
//! defense in depth, not redundancy to remove.

use crate::error::WalletError;
use crate::transactions::TransactionService;
use crate::wallet::{
    BalanceMap, TransactionResult, Wallet, WalletClient, WalletSnapshot, DEFAULT_TOKEN,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::watch;

/// Tokens the UI renders balances for even before any connect.
const KNOWN_TOKENS: [&str; 2] = [DEFAULT_TOKEN, "LSK"];

/// Reactive façade over a [`WalletClient`].
///
/// One handle per consumer; the subscription it holds is dropped with it,
/// so no callbacks outlive the consumer.
pub struct WalletHandle {
    client: WalletClient,
    service: TransactionService,
    // Held for its Drop: keeping the receiver ties the subscription to the
    // handle's lifetime.
    _updates: watch::Receiver<WalletSnapshot>,
    is_connecting: AtomicBool,
    balances: Mutex<BalanceMap>,
}

impl WalletHandle {
    /// Build a handle, picking up a pre-existing connected wallet if the
    /// client already has one.
    pub async fn new(client: WalletClient) -> Self {
        let handle = Self {
            service: TransactionService::new(client.clone()),
            _updates: client.subscribe(),
            client,
            is_connecting: AtomicBool::new(false),
            balances: Mutex::new(zeroed_balances()),
        };
        if handle.client.is_connected() {
            if let Err(e) = handle.refresh_balance().await {
                log::warn!("Initial balance refresh failed: {}", e);
            }
        }
        handle
    }

    /// Connect the wallet and refresh the cached balances.
    ///
    /// `is_connecting` is cleared on every exit path.
    pub async fn connect(&self) -> crate::Result<Wallet> {
        self.is_connecting.store(true, Ordering::SeqCst);
        let _guard = ConnectingGuard(&self.is_connecting);

        let wallet = self.client.connect().await?;
        self.refresh_balance().await?;
        Ok(wallet)
    }

    /// Disconnect and reset the cached balances to zero.
    pub async fn disconnect(&self) -> crate::Result<()> {
        self.client.disconnect().await?;
        *self.lock_balances() = zeroed_balances();
        Ok(())
    }

    /// Replace the cached balance map with a fresh fetch.
    ///
    /// No-op when disconnected.
    pub async fn refresh_balance(&self) -> crate::Result<()> {
        if !self.client.is_connected() {
            return Ok(());
        }
        let fresh = self.client.balances().await?;
        *self.lock_balances() = fresh;
        Ok(())
    }

    pub fn wallet(&self) -> Option<Wallet> {
        self.client.wallet()
    }

    pub fn is_connecting(&self) -> bool {
        self.is_connecting.load(Ordering::SeqCst)
    }

    /// Connected and not mid-connect.
    pub fn is_wallet_ready(&self) -> bool {
        self.client.is_connected() && !self.is_connecting()
    }

    /// Compare against the cached balance — deliberately tolerant of
    /// staleness. Callers needing freshness call [`refresh_balance`] first.
    ///
    /// [`refresh_balance`]: WalletHandle::refresh_balance
    pub fn has_enough_balance(&self, amount: u64, token: &str) -> bool {
        self.lock_balances().get(token).copied().unwrap_or(0) >= amount
    }

    /// Clone of the cached balance map, for rendering.
    pub fn cached_balances(&self) -> BalanceMap {
        self.lock_balances().clone()
    }

    /// Purchase tickets, with local wallet-ready and balance guards.
    ///
    /// On success the cached balances are refreshed before returning, so
    /// the caller observes the post-transaction state.
    pub async fn buy_ticket(
        &self,
        event_id: &str,
        tier_id: &str,
        price: u64,
        quantity: u32,
    ) -> TransactionResult {
        if !self.is_wallet_ready() {
            return WalletError::NotConnected.into();
        }
        let total = match price.checked_mul(u64::from(quantity)) {
            Some(total) => total,
            None => {
                return WalletError::InvalidInput(format!(
                    "total price overflows: {} x {}",
                    price, quantity
                ))
                .into()
            }
        };
        if !self.has_enough_balance(total, DEFAULT_TOKEN) {
            return WalletError::InsufficientBalance.into();
        }

        let result = self
            .service
            .buy_ticket(event_id, tier_id, price, quantity)
            .await;
        self.refresh_after(&result).await;
        result
    }

    /// List a ticket for resale.
    pub async fn resell_ticket(&self, ticket_id: &str, price: u64) -> TransactionResult {
        if !self.is_wallet_ready() {
            return WalletError::NotConnected.into();
        }
        let result = self.service.resell_ticket(ticket_id, price).await;
        self.refresh_after(&result).await;
        result
    }

    /// Transfer a ticket to another address.
    pub async fn transfer_ticket(&self, ticket_id: &str, to: &str) -> TransactionResult {
        if !self.is_wallet_ready() {
            return WalletError::NotConnected.into();
        }
        let result = self.service.transfer_ticket(ticket_id, to).await;
        self.refresh_after(&result).await;
        result
    }

    async fn refresh_after(&self, result: &TransactionResult) {
        if result.is_success() {
            if let Err(e) = self.refresh_balance().await {
                log::warn!("Post-transaction balance refresh failed: {}", e);
            }
        }
    }

    fn lock_balances(&self) -> std::sync::MutexGuard<'_, BalanceMap> {
        // Recover rather than propagate poisoning: the cache holds plain
        // numbers and stays usable.
        self.balances
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn zeroed_balances() -> BalanceMap {
    KNOWN_TOKENS.iter().map(|t| (t.to_string(), 0)).collect()
}

struct ConnectingGuard<'a>(&'a AtomicBool);

impl Drop for ConnectingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
