//! Property-based tests for ledger invariants
//!
//! These tests use proptest to verify critical invariants:
//! - Non-negative balance: balance >= 0 for all reachable states
//! - Sequential determinism: final balance equals the sum of applied deltas
//! - Concurrency safety: balanced workloads end at a deterministic balance
//!   regardless of thread interleaving

use ledger_core::Ledger;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::thread;

/// A single ledger operation
#[derive(Debug, Clone)]
enum Op {
    Deposit(Decimal),
    Withdraw(Decimal),
}

/// Strategy for generating valid amounts (positive whole units)
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1u64..1_000_000u64).prop_map(Decimal::from)
}

/// Strategy for generating operations
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        amount_strategy().prop_map(Op::Deposit),
        amount_strategy().prop_map(Op::Withdraw),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: a single-threaded op sequence lands exactly on the
    /// arithmetic sum of the deltas that applied, and the balance never
    /// goes negative along the way
    #[test]
    fn prop_sequential_determinism(ops in prop::collection::vec(op_strategy(), 1..100)) {
        let ledger = Ledger::new();
        let mut model = Decimal::ZERO;

        for op in &ops {
            match op {
                Op::Deposit(amount) => {
                    ledger.deposit(*amount).unwrap();
                    model += amount;
                }
                Op::Withdraw(amount) => {
                    let applied = ledger.withdraw(*amount).unwrap();
                    // The withdrawal applies exactly when the model says
                    // funds were available
                    prop_assert_eq!(applied, model >= *amount);
                    if applied {
                        model -= amount;
                    }
                }
            }

            prop_assert!(ledger.balance() >= Decimal::ZERO);
        }

        prop_assert_eq!(ledger.balance(), model);
    }

    /// Property: invalid amounts never mutate the balance
    #[test]
    fn prop_invalid_amounts_leave_balance_unchanged(
        initial in amount_strategy(),
        bogus in -1_000_000i64..=0,
    ) {
        let ledger = Ledger::with_balance(initial).unwrap();
        let bogus = Decimal::from(bogus);

        prop_assert!(ledger.deposit(bogus).is_err());
        prop_assert!(ledger.withdraw(bogus).is_err());
        prop_assert_eq!(ledger.balance(), initial);
    }

    /// Property: k workers each running n balanced rounds of
    /// (deposit d, withdraw d) always end at the initial balance.
    ///
    /// Every withdraw is preceded by that worker's own deposit of the
    /// same amount, so each withdraw finds sufficient funds and the net
    /// effect of every round is zero, whatever the interleaving.
    #[test]
    fn prop_balanced_concurrent_workload_is_deterministic(
        workers in 2usize..6,
        rounds in 1u32..200,
        amount in amount_strategy(),
        initial in amount_strategy(),
    ) {
        let ledger = Ledger::with_balance(initial).unwrap();

        let failed_withdrawals: u32 = thread::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let ledger = ledger.clone();
                    s.spawn(move || {
                        let mut failed = 0u32;
                        for _ in 0..rounds {
                            ledger.deposit(amount).unwrap();
                            if !ledger.withdraw(amount).unwrap() {
                                failed += 1;
                            }
                        }
                        failed
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        prop_assert_eq!(failed_withdrawals, 0);
        prop_assert_eq!(ledger.balance(), initial);
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Two workers each run [deposit(100), withdraw(50)] x 5 from a zero
    /// balance; the surplus is 2 x 5 x 50 = 500 in every interleaving.
    #[test]
    fn test_two_worker_surplus_scenario() {
        let ledger = Ledger::new();

        thread::scope(|s| {
            for _ in 0..2 {
                let ledger = ledger.clone();
                s.spawn(move || {
                    for _ in 0..5 {
                        ledger.deposit(Decimal::from(100)).unwrap();
                        assert!(ledger.withdraw(Decimal::from(50)).unwrap());
                    }
                });
            }
        });

        assert_eq!(ledger.balance(), Decimal::from(500));
    }

    /// Heavier contention: many workers hammering one ledger with
    /// balanced rounds still land exactly on the initial balance.
    #[test]
    fn test_contended_balanced_workload() {
        let ledger = Ledger::with_balance(Decimal::from(1_000)).unwrap();

        thread::scope(|s| {
            for _ in 0..8 {
                let ledger = ledger.clone();
                s.spawn(move || {
                    for _ in 0..1_000 {
                        ledger.deposit(Decimal::from(7)).unwrap();
                        assert!(ledger.withdraw(Decimal::from(7)).unwrap());
                    }
                });
            }
        });

        assert_eq!(ledger.balance(), Decimal::from(1_000));
    }
}
