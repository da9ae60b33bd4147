//! Configuration for the simulation harness

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Simulation configuration
///
/// Only the reference driver reads this; the ledger itself takes no
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Starting balance
    pub initial_balance: Decimal,

    /// Number of concurrent workers
    pub workers: usize,

    /// Deposit/withdraw rounds per worker
    pub rounds: u32,

    /// Amount deposited each round
    pub deposit_amount: Decimal,

    /// Amount withdrawn each round
    pub withdraw_amount: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_balance: Decimal::ZERO,
            workers: 2,
            rounds: 5,
            deposit_amount: Decimal::from(100),
            withdraw_amount: Decimal::from(50),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(workers) = std::env::var("LEDGER_WORKERS") {
            config.workers = workers
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid LEDGER_WORKERS: {}", e)))?;
        }

        if let Ok(rounds) = std::env::var("LEDGER_ROUNDS") {
            config.rounds = rounds
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid LEDGER_ROUNDS: {}", e)))?;
        }

        if let Ok(initial) = std::env::var("LEDGER_INITIAL_BALANCE") {
            config.initial_balance = initial.parse().map_err(|e| {
                crate::Error::Config(format!("Invalid LEDGER_INITIAL_BALANCE: {}", e))
            })?;
        }

        if let Ok(deposit) = std::env::var("LEDGER_DEPOSIT_AMOUNT") {
            config.deposit_amount = deposit.parse().map_err(|e| {
                crate::Error::Config(format!("Invalid LEDGER_DEPOSIT_AMOUNT: {}", e))
            })?;
        }

        if let Ok(withdraw) = std::env::var("LEDGER_WITHDRAW_AMOUNT") {
            config.withdraw_amount = withdraw.parse().map_err(|e| {
                crate::Error::Config(format!("Invalid LEDGER_WITHDRAW_AMOUNT: {}", e))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check amount invariants
    ///
    /// The ledger rejects non-positive amounts per call; catching them
    /// here fails a bad harness setup once at load time instead of on
    /// every round.
    pub fn validate(&self) -> crate::Result<()> {
        if self.deposit_amount <= Decimal::ZERO {
            return Err(crate::Error::Config(format!(
                "deposit_amount must be positive, got {}",
                self.deposit_amount
            )));
        }

        if self.withdraw_amount <= Decimal::ZERO {
            return Err(crate::Error::Config(format!(
                "withdraw_amount must be positive, got {}",
                self.withdraw_amount
            )));
        }

        Ok(())
    }
}
