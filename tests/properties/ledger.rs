//! Property tests for the debt matrix.

use proptest::prelude::*;

use debtbook::{Ledger, LedgerError};

/// (lender, borrower, amount in cents) with lender != borrower, for `n` members.
fn transactions(n: usize) -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
    proptest::collection::vec((0..n, 0..n, 1u32..1_000_000), 0..40)
        .prop_map(|txs| txs.into_iter().filter(|(l, b, _)| l != b).collect())
}

fn ledger_with(n: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for i in 1..n {
        ledger.add_member(&format!("Member {i}")).unwrap();
    }
    ledger
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Net balances always sum to (approximately) zero.
    #[test]
    fn property_net_balances_sum_to_zero(
        (n, txs) in (2usize..8).prop_flat_map(|n| (Just(n), transactions(n)))
    ) {
        let mut ledger = ledger_with(n);
        for (l, b, cents) in &txs {
            ledger.record_transaction(*l, *b, f64::from(*cents) / 100.0).unwrap();
        }

        let total: f64 = ledger.all_net_balances().iter().sum();
        prop_assert!(total.abs() < 1e-6, "sum was {}", total);
    }

    /// PROPERTY: Each gross entry equals the sum of the loans recorded for that pair.
    #[test]
    fn property_entries_accumulate(
        (n, txs) in (2usize..6).prop_flat_map(|n| (Just(n), transactions(n)))
    ) {
        let mut ledger = ledger_with(n);
        let mut expected = vec![vec![0u64; n]; n];
        for (l, b, cents) in &txs {
            ledger.record_transaction(*l, *b, f64::from(*cents) / 100.0).unwrap();
            expected[*l][*b] += u64::from(*cents);
        }

        for l in 0..n {
            for b in 0..n {
                let actual = ledger.entry(l, b).unwrap();
                let want = expected[l][b] as f64 / 100.0;
                prop_assert!((actual - want).abs() < 1e-6, "[{}][{}]: {} != {}", l, b, actual, want);
            }
        }
    }

    /// PROPERTY: Adding a member never changes existing entries.
    #[test]
    fn property_growth_preserves_history(
        (n, txs) in (2usize..6).prop_flat_map(|n| (Just(n), transactions(n)))
    ) {
        let mut ledger = ledger_with(n);
        for (l, b, cents) in &txs {
            ledger.record_transaction(*l, *b, f64::from(*cents) / 100.0).unwrap();
        }
        let before = ledger.matrix().to_vec();
        let nets_before = ledger.all_net_balances();

        let added = ledger.add_member("Newcomer").unwrap();

        prop_assert_eq!(added, n);
        for l in 0..n {
            prop_assert_eq!(&ledger.matrix()[l][..n], &before[l][..]);
            prop_assert_eq!(ledger.matrix()[l][n], 0.0);
            prop_assert_eq!(ledger.matrix()[n][l], 0.0);
        }
        prop_assert_eq!(&ledger.all_net_balances()[..n], &nets_before[..]);
        prop_assert_eq!(ledger.net_balance(n), Some(0.0));
    }

    /// PROPERTY: Rejected amounts never mutate the ledger.
    #[test]
    fn property_non_positive_amounts_are_rejected(amount in -1.0e9f64..=0.0) {
        let mut ledger = ledger_with(2);
        prop_assert!(ledger.record_transaction(0, 1, amount).is_err());
        prop_assert_eq!(ledger.matrix(), &[vec![0.0, 0.0], vec![0.0, 0.0]][..]);
    }

    /// PROPERTY: Huge amounts never drive an entry or a net balance to
    /// infinity; a loan that would is rejected and changes nothing.
    #[test]
    fn property_accumulation_stays_finite(
        txs in proptest::collection::vec((0usize..3, 0usize..3, 1.0e306f64..f64::MAX), 0..12)
    ) {
        let mut ledger = ledger_with(3);
        for (l, b, amount) in txs {
            if l == b {
                continue;
            }
            let before = ledger.matrix().to_vec();
            match ledger.record_transaction(l, b, amount) {
                Ok(()) => {}
                Err(LedgerError::AmountOverflow { .. }) => {
                    prop_assert_eq!(ledger.matrix(), &before[..]);
                }
                Err(other) => {
                    prop_assert!(false, "unexpected error: {}", other);
                }
            }
            prop_assert!(ledger.matrix().iter().flatten().all(|v| v.is_finite()));
            prop_assert!(ledger.all_net_balances().iter().all(|n| n.is_finite()));
        }
    }
}
