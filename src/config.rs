/// Wallet configuration from environment variables
///
/// Controls the simulated network identity, latency characteristics and
/// seed balances of the wallet client. Defaults match the Lisk Sepolia
/// testnet the marketplace targets.
use std::env;
use std::time::Duration;

/// Counterparty address used for marketplace transactions when none is
/// configured.
const DEFAULT_MARKETPLACE_ADDRESS: &str = "0x1f9f6a9c55ef72d6dbba7b85763c2e7c19c694d5";

#[derive(Clone, Debug)]
pub struct WalletConfig {
    /// Human-readable network name reported on connected wallets
    pub network: String,
    /// EVM chain id reported on connected wallets
    pub chain_id: u64,
    /// Simulated round-trip latency for every wallet operation
    pub simulated_latency: Duration,
    /// Upper bound on a transaction submission before it times out
    pub send_timeout: Duration,
    /// Marketplace contract address used as the transaction counterparty
    pub marketplace_address: String,
    /// Token balances seeded on every successful connect
    pub seed_balances: Vec<(String, u64)>,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `WALLET_NETWORK`: network name (default "lisk-sepolia")
    /// - `WALLET_CHAIN_ID`: chain id (default 4202)
    /// - `SIMULATED_LATENCY_MS`: per-operation latency (default 600)
    /// - `SEND_TIMEOUT_MS`: transaction timeout (default 10000)
    /// - `MARKETPLACE_ADDRESS`: transaction counterparty address
    pub fn from_env() -> Self {
        let network = env::var("WALLET_NETWORK").unwrap_or_else(|_| "lisk-sepolia".to_string());
        log::info!("🌐 Wallet network: {}", network);

        let chain_id = env::var("WALLET_CHAIN_ID")
            .ok()
            .and_then(|v| match v.parse::<u64>() {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("Invalid WALLET_CHAIN_ID '{}': {}, using default", v, e);
                    None
                }
            })
            .unwrap_or(4202);

        let simulated_latency = Duration::from_millis(
            env::var("SIMULATED_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
        );

        let send_timeout = Duration::from_millis(
            env::var("SEND_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        );

        let marketplace_address = env::var("MARKETPLACE_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_MARKETPLACE_ADDRESS.to_string());
        log::info!("🎟️  Marketplace address: {}", marketplace_address);

        Self {
            network,
            chain_id,
            simulated_latency,
            send_timeout,
            marketplace_address,
            seed_balances: Self::default_seed_balances(),
        }
    }

    /// Balances granted to a freshly connected wallet
    ///
    /// IDRX is the payment token for all ticket purchases; LSK is held for
    /// gas on the real network and is never spent by this simulation.
    fn default_seed_balances() -> Vec<(String, u64)> {
        vec![("IDRX".to_string(), 1000), ("LSK".to_string(), 50)]
    }
}

impl Default for WalletConfig {
    /// Default configuration (Lisk Sepolia)
    fn default() -> Self {
        Self {
            network: "lisk-sepolia".to_string(),
            chain_id: 4202,
            simulated_latency: Duration::from_millis(600),
            send_timeout: Duration::from_millis(10_000),
            marketplace_address: DEFAULT_MARKETPLACE_ADDRESS.to_string(),
            seed_balances: Self::default_seed_balances(),
        }
    }
}
