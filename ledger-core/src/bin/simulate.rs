//! Reference simulation driver
//!
//! Spawns a fixed number of worker threads over one shared ledger, each
//! running a deposit/withdraw loop, then joins them and reports the
//! final balance. With the default config the result is deterministic:
//! 2 workers x 5 rounds of (deposit 100, withdraw 50) from a zero
//! balance always ends at 500, whatever the interleaving.

use anyhow::Result;
use ledger_core::{Config, Ledger};
use std::thread;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Config file path as optional first argument, env overrides otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    tracing::info!(
        workers = config.workers,
        rounds = config.rounds,
        "Starting ledger simulation"
    );

    let ledger = Ledger::with_balance(config.initial_balance)?;

    thread::scope(|s| {
        for worker in 0..config.workers {
            let ledger = ledger.clone();
            let config = &config;

            s.spawn(move || {
                for _ in 0..config.rounds {
                    if let Err(e) = ledger.deposit(config.deposit_amount) {
                        tracing::error!(worker, error = %e, "deposit rejected");
                        continue;
                    }
                    match ledger.withdraw(config.withdraw_amount) {
                        Ok(true) => {}
                        Ok(false) => tracing::warn!(worker, "withdrawal skipped, insufficient funds"),
                        Err(e) => tracing::error!(worker, error = %e, "withdrawal rejected"),
                    }
                }
            });
        }
    });

    let final_balance = ledger.balance();
    tracing::info!(%final_balance, "All workers joined");
    println!("Final balance: {final_balance}");

    Ok(())
}
