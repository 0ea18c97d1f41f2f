//! Property tests for the JSON ledger document.

use std::path::Path;

use proptest::prelude::*;

use debtbook::infrastructure::repositories::{decode, encode};
use debtbook::{JsonLedgerStore, LedgerStore, Registry};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,12}").unwrap()
}

/// Everyday amounts plus magnitudes near `f64::MAX`, where accumulation
/// would overflow if it were not rejected.
fn amount() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.01f64..1.0e6,
        1 => 1.0e300f64..f64::MAX,
        1 => Just(f64::MAX),
        1 => Just(f64::MIN_POSITIVE),
    ]
}

fn registry() -> impl Strategy<Value = Registry> {
    let group = (
        name(),
        proptest::collection::vec(name(), 0..4),
        proptest::collection::vec((0usize..5, 0usize..5, amount()), 0..12),
    );
    proptest::collection::vec(group, 0..4).prop_map(|groups| {
        let mut registry = Registry::new();
        for (group_name, members, txs) in groups {
            let group = registry.create_group(&group_name).unwrap();
            for member in members {
                // Duplicates are rejected; skip them.
                let _ = group.ledger.add_member(&member);
            }
            let n = group.ledger.len();
            for (l, b, amount) in txs {
                // Self transactions and overflowing totals are rejected; skip them.
                let _ = group.ledger.record_transaction(l % n, b % n, amount);
            }
        }
        registry
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Encoding then decoding yields an identical registry.
    #[test]
    fn property_document_round_trip(registry in registry()) {
        let content = encode(&registry).unwrap();
        let decoded = decode(&content, Path::new("debts.json")).unwrap();
        prop_assert_eq!(decoded, registry);
    }

    /// PROPERTY: Arbitrary text never panics the decoder.
    #[test]
    fn property_decode_never_panics(content in ".{0,200}") {
        let _ = decode(&content, Path::new("debts.json"));
    }

    /// PROPERTY: Every stored value is finite, so saving never writes `null`.
    #[test]
    fn property_encoded_document_has_no_null(registry in registry()) {
        let content = encode(&registry).unwrap();
        prop_assert!(!content.contains("null"));
        for group in registry.groups() {
            prop_assert!(group.ledger.all_net_balances().iter().all(|n| n.is_finite()));
        }
    }

    /// PROPERTY: Loading arbitrary file bytes never panics, and anything that
    /// fails to load is reported as corruption (so it gets moved aside).
    #[test]
    fn property_load_arbitrary_bytes_is_ok_or_corrupted(
        content in prop_oneof![
            proptest::collection::vec(any::<u8>(), 0..256),
            ".{0,120}".prop_map(String::into_bytes),
            Just(b"{\"groups\":[{\"name\":\"Trip\xff\"}]}".to_vec()),
        ]
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debts.json");
        std::fs::write(&path, &content).unwrap();

        match JsonLedgerStore::with_path(path).load() {
            Ok(_) => {}
            Err(err) => {
                prop_assert!(err.is_corrupted(), "unexpected error: {:?}", err);
            }
        }
    }
}
