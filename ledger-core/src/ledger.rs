//! Thread-safe single-account ledger
//!
//! This module owns the one piece of shared mutable state in the crate:
//! a single balance guarded by a mutex. Workers clone the `Ledger`
//! handle and call `deposit`/`withdraw` concurrently; the guard
//! serializes every read-modify-write.
//!
//! # Example
//!
//! ```
//! use ledger_core::Ledger;
//!
//! fn main() -> ledger_core::Result<()> {
//!     let ledger = Ledger::new();
//!
//!     ledger.deposit(100.into())?;
//!     let applied = ledger.withdraw(50.into())?;
//!     assert!(applied);
//!     assert_eq!(ledger.balance(), 50.into());
//!
//!     Ok(())
//! }
//! ```

use crate::{Error, Result};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Shared handle to one account's balance
///
/// Cloning is cheap and every clone refers to the same balance. The
/// guard is private; callers can only reach the balance through
/// [`deposit`](Ledger::deposit), [`withdraw`](Ledger::withdraw) and
/// [`balance`](Ledger::balance).
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Balance behind the exclusion guard
    balance: Arc<Mutex<Decimal>>,
}

impl Ledger {
    /// Create a ledger with a zero balance
    pub fn new() -> Self {
        Self {
            balance: Arc::new(Mutex::new(Decimal::ZERO)),
        }
    }

    /// Create a ledger with a starting balance
    ///
    /// A negative starting balance would break the non-negativity
    /// invariant before the first operation, so it is rejected.
    pub fn with_balance(initial: Decimal) -> Result<Self> {
        if initial < Decimal::ZERO {
            return Err(Error::InvalidAmount(format!(
                "Initial balance must be non-negative, got {initial}"
            )));
        }

        Ok(Self {
            balance: Arc::new(Mutex::new(initial)),
        })
    }

    /// Deposit funds into the account
    ///
    /// The new balance is observable by other callers only after the
    /// guard is released; there is no partial-update visibility.
    pub fn deposit(&self, amount: Decimal) -> Result<()> {
        validate_amount(amount)?;

        let mut balance = self.balance.lock();
        *balance += amount;
        tracing::debug!(%amount, balance = %*balance, "deposit applied");

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Returns `Ok(true)` if the withdrawal applied and `Ok(false)` if
    /// the balance was insufficient. Insufficient funds is an expected
    /// outcome, not an error; the balance is left untouched and the
    /// caller decides whether to retry.
    pub fn withdraw(&self, amount: Decimal) -> Result<bool> {
        validate_amount(amount)?;

        let mut balance = self.balance.lock();
        if *balance < amount {
            tracing::debug!(%amount, balance = %*balance, "insufficient funds");
            return Ok(false);
        }

        *balance -= amount;
        debug_assert!(*balance >= Decimal::ZERO);
        tracing::debug!(%amount, balance = %*balance, "withdrawal applied");

        Ok(true)
    }

    /// Current balance
    ///
    /// Takes the same guard as the mutating operations, so the value is
    /// never a torn read. Under concurrent mutation it is still only a
    /// point-in-time snapshot, not a guaranteed "latest".
    pub fn balance(&self) -> Decimal {
        *self.balance.lock()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate amount invariants
///
/// Runs before any lock acquisition, so a rejected call never leaves
/// the ledger in a partially mutated state.
fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "Amount must be positive, got {amount}"
        )));
    }

    Ok(())
}
