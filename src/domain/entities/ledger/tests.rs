use super::*;

fn ledger_with(names: &[&str]) -> Ledger {
    let mut ledger = Ledger::new();
    for name in names {
        ledger.add_member(name).unwrap();
    }
    ledger
}

fn assert_square(ledger: &Ledger) {
    let n = ledger.members().len();
    assert_eq!(ledger.matrix().len(), n);
    for row in ledger.matrix() {
        assert_eq!(row.len(), n);
    }
}

#[test]
fn new_ledger_is_seeded_with_you() {
    let ledger = Ledger::new();
    assert_eq!(ledger.members(), ["You".to_string()]);
    assert_eq!(ledger.matrix(), [vec![0.0]]);
    assert_eq!(ledger.net_balance(0), Some(0.0));
}

#[test]
fn add_member_appends_zero_row_and_column() {
    let mut ledger = Ledger::new();
    let idx = ledger.add_member("Alex").unwrap();
    assert_eq!(idx, 1);
    assert_eq!(ledger.matrix(), [vec![0.0, 0.0], vec![0.0, 0.0]]);
    assert_square(&ledger);
}

#[test]
fn add_member_preserves_existing_entries() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(0, 1, 20.0).unwrap();
    ledger.record_transaction(1, 0, 7.5).unwrap();

    ledger.add_member("Sam").unwrap();

    assert_eq!(ledger.entry(0, 1), Some(20.0));
    assert_eq!(ledger.entry(1, 0), Some(7.5));
    for i in 0..3 {
        assert_eq!(ledger.entry(2, i), Some(0.0));
        assert_eq!(ledger.entry(i, 2), Some(0.0));
    }
    assert_square(&ledger);
}

#[test]
fn add_member_rejects_duplicate_without_mutation() {
    let mut ledger = ledger_with(&["Alex"]);
    let before = ledger.clone();

    let err = ledger.add_member("Alex").unwrap_err();
    assert_eq!(
        err,
        LedgerError::DuplicateMember {
            name: "Alex".to_string()
        }
    );
    assert_eq!(ledger, before);
}

#[test]
fn add_member_rejects_blank_name() {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.add_member("   ").unwrap_err(), LedgerError::EmptyName);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn add_member_trims_name_before_duplicate_check() {
    let mut ledger = ledger_with(&["Alex"]);
    assert!(matches!(
        ledger.add_member(" Alex "),
        Err(LedgerError::DuplicateMember { .. })
    ));
}

#[test]
fn rename_changes_label_only() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(0, 1, 20.0).unwrap();

    ledger.rename_member(1, "Alexandra").unwrap();

    assert_eq!(ledger.member(1), Some("Alexandra"));
    assert_eq!(ledger.entry(0, 1), Some(20.0));
    assert_eq!(ledger.net_balance(1), Some(-20.0));
}

#[test]
fn rename_to_own_name_is_allowed() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.rename_member(1, "Alex").unwrap();
    assert_eq!(ledger.member(1), Some("Alex"));
}

#[test]
fn rename_onto_other_member_is_rejected() {
    let mut ledger = ledger_with(&["Alex"]);
    assert!(matches!(
        ledger.rename_member(1, "You"),
        Err(LedgerError::DuplicateMember { .. })
    ));
    assert_eq!(ledger.member(1), Some("Alex"));
}

#[test]
fn rename_out_of_range_is_rejected() {
    let mut ledger = Ledger::new();
    assert_eq!(
        ledger.rename_member(3, "Zed").unwrap_err(),
        LedgerError::MemberOutOfRange { index: 3, len: 1 }
    );
}

#[test]
fn transactions_accumulate_in_one_direction() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(0, 1, 10.0).unwrap();
    ledger.record_transaction(0, 1, 5.0).unwrap();

    assert_eq!(ledger.entry(0, 1), Some(15.0));
    assert_eq!(ledger.entry(1, 0), Some(0.0));
}

#[test]
fn reverse_loans_are_not_netted() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(0, 1, 10.0).unwrap();
    ledger.record_transaction(1, 0, 4.0).unwrap();

    assert_eq!(ledger.entry(0, 1), Some(10.0));
    assert_eq!(ledger.entry(1, 0), Some(4.0));
    assert_eq!(ledger.net_balance(0), Some(6.0));
    assert_eq!(ledger.net_balance(1), Some(-6.0));
}

#[test]
fn scenario_you_lends_alex_twenty() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(0, 1, 20.0).unwrap();

    assert_eq!(ledger.matrix(), [vec![0.0, 20.0], vec![0.0, 0.0]]);
    assert_eq!(ledger.all_net_balances(), vec![20.0, -20.0]);
}

#[test]
fn invalid_transactions_leave_matrix_unchanged() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(0, 1, 3.0).unwrap();
    let before = ledger.clone();

    assert_eq!(
        ledger.record_transaction(0, 0, 10.0).unwrap_err(),
        LedgerError::SelfTransaction {
            member: "You".to_string()
        }
    );
    assert_eq!(
        ledger.record_transaction(0, 1, 0.0).unwrap_err(),
        LedgerError::NonPositiveAmount { amount: 0.0 }
    );
    assert_eq!(
        ledger.record_transaction(0, 1, -5.0).unwrap_err(),
        LedgerError::NonPositiveAmount { amount: -5.0 }
    );
    assert!(matches!(
        ledger.record_transaction(0, 1, f64::NAN),
        Err(LedgerError::InvalidAmount { .. })
    ));
    assert_eq!(
        ledger.record_transaction(0, 9, 1.0).unwrap_err(),
        LedgerError::MemberOutOfRange { index: 9, len: 2 }
    );

    assert_eq!(ledger, before);
}

#[test]
fn net_balances_sum_to_zero() {
    let mut ledger = ledger_with(&["Alex", "Sam", "Kim"]);
    ledger.record_transaction(0, 1, 12.25).unwrap();
    ledger.record_transaction(2, 3, 40.0).unwrap();
    ledger.record_transaction(3, 0, 3.1).unwrap();
    ledger.record_transaction(1, 2, 0.01).unwrap();

    let total: f64 = ledger.all_net_balances().iter().sum();
    assert!(total.abs() < 1e-9, "nets summed to {total}");
}

#[test]
fn net_balance_out_of_range_is_none() {
    assert_eq!(Ledger::new().net_balance(1), None);
}

#[test]
fn display_matrix_puts_nets_on_diagonal() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(0, 1, 20.0).unwrap();

    assert_eq!(
        ledger.display_matrix(),
        vec![vec![20.0, 20.0], vec![0.0, -20.0]]
    );
    assert_eq!(ledger.entry(0, 0), Some(0.0));
}

#[test]
fn total_lent_ignores_diagonal() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(0, 1, 20.0).unwrap();
    ledger.record_transaction(1, 0, 2.5).unwrap();
    assert_eq!(ledger.total_lent(), 22.5);
}

#[test]
fn resolve_by_name_or_index() {
    let ledger = ledger_with(&["Alex"]);
    assert_eq!(ledger.resolve(&MemberRef::new("Alex")), Ok(1));
    assert_eq!(ledger.resolve(&MemberRef::index(0)), Ok(0));
    assert_eq!(
        ledger.resolve(&MemberRef::new("Sam")),
        Err(LedgerError::UnknownMember {
            reference: "Sam".to_string()
        })
    );
}

#[test]
fn from_parts_zeroes_diagonal() {
    let ledger = Ledger::from_parts(
        vec!["You".to_string(), "Alex".to_string()],
        vec![vec![20.0, 20.0], vec![0.0, -20.0]],
    )
    .unwrap();
    assert_eq!(ledger.matrix(), [vec![0.0, 20.0], vec![0.0, 0.0]]);
}

#[test]
fn from_parts_rejects_non_square() {
    let err = Ledger::from_parts(
        vec!["You".to_string(), "Alex".to_string()],
        vec![vec![0.0, 1.0], vec![0.0]],
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidShape { .. }));

    let err = Ledger::from_parts(vec!["You".to_string()], vec![]).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidShape { .. }));
}

#[test]
fn from_parts_rejects_negative_entries() {
    let err = Ledger::from_parts(
        vec!["You".to_string(), "Alex".to_string()],
        vec![vec![0.0, -1.0], vec![0.0, 0.0]],
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidShape { .. }));
}

#[test]
fn accumulation_past_max_is_rejected_without_mutation() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(0, 1, 1e308).unwrap();

    let err = ledger.record_transaction(0, 1, 1e308).unwrap_err();

    assert_eq!(
        err,
        LedgerError::AmountOverflow {
            lender: "You".to_string(),
            borrower: "Alex".to_string(),
        }
    );
    assert_eq!(ledger.entry(0, 1), Some(1e308));
    assert_eq!(ledger.all_net_balances(), vec![1e308, -1e308]);
}

#[test]
fn overflow_in_a_different_cell_is_rejected() {
    // Each cell stays finite, but the member's net balance would not.
    let mut ledger = ledger_with(&["Alex", "Sam"]);
    ledger.record_transaction(0, 1, 1e308).unwrap();

    assert!(matches!(
        ledger.record_transaction(0, 2, 1e308),
        Err(LedgerError::AmountOverflow { .. })
    ));
    assert_eq!(ledger.entry(0, 2), Some(0.0));
    assert!(ledger.all_net_balances().iter().all(|n| n.is_finite()));
}

#[test]
fn largest_finite_amount_is_accepted_once() {
    let mut ledger = ledger_with(&["Alex"]);
    ledger.record_transaction(1, 0, f64::MAX).unwrap();
    assert_eq!(ledger.net_balance(1), Some(f64::MAX));
}

#[test]
fn from_parts_rejects_entries_whose_total_overflows() {
    let err = Ledger::from_parts(
        vec!["You".to_string(), "Alex".to_string()],
        vec![vec![0.0, 1e308], vec![1e308, 0.0]],
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidShape { .. }));
}
