/// Common test utilities for ticketing wallet integration tests
///
/// Provides fast-latency client configurations so the simulated network
/// delay stays out of the test critical path, plus logging setup shared by
/// every test binary.
use std::time::Duration;
use ticketing_wallet::{WalletClient, WalletConfig};

pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Default config with latency shrunk to keep tests quick
pub fn fast_config() -> WalletConfig {
    WalletConfig {
        simulated_latency: Duration::from_millis(5),
        send_timeout: Duration::from_secs(2),
        ..WalletConfig::default()
    }
}

/// Fast config with a custom IDRX seed balance
pub fn seeded_config(idrx: u64) -> WalletConfig {
    WalletConfig {
        seed_balances: vec![("IDRX".to_string(), idrx), ("LSK".to_string(), 50)],
        ..fast_config()
    }
}

pub fn test_client() -> WalletClient {
    init_logging();
    WalletClient::new(fast_config())
}

pub fn seeded_client(idrx: u64) -> WalletClient {
    init_logging();
    WalletClient::new(seeded_config(idrx))
}
