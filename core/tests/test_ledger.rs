//! Ledger Tests
//!
//! Covers registration, expense application, the remainder-to-payer split
//! policy, the exact zero-sum invariant, and the no-partial-mutation
//! guarantee for rejected operations.

use split_settle_core::{Ledger, LedgerError, TransactionLog};

// ============================================================================
// Test Helpers
// ============================================================================

fn ledger_with(users: &[&str]) -> Ledger {
    let mut ledger = Ledger::new();
    for name in users {
        ledger.register_user(name).unwrap();
    }
    ledger
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn register_user_starts_at_zero() {
    let ledger = ledger_with(&["ALICE"]);
    assert_eq!(ledger.balance_of("ALICE"), Some(0));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn duplicate_name_is_rejected() {
    let mut ledger = ledger_with(&["ALICE"]);
    let result = ledger.register_user("ALICE");
    assert_eq!(
        result,
        Err(LedgerError::DuplicateUser {
            name: "ALICE".to_string()
        })
    );
}

#[test]
fn snapshot_preserves_registration_order() {
    let ledger = ledger_with(&["CAROL", "ALICE", "BOB"]);
    let names: Vec<String> = ledger.snapshot().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["CAROL", "ALICE", "BOB"]);
}

// ============================================================================
// Expense application
// ============================================================================

#[test]
fn even_split_across_three_users() {
    // Scenario A setup: Alice pays 30.00 split among all three
    let mut ledger = ledger_with(&["ALICE", "BOB", "CAROL"]);
    let mut log = TransactionLog::new();

    ledger
        .apply_expense(
            "ALICE",
            &["ALICE", "BOB", "CAROL"],
            "dinner",
            3_000,
            &mut log,
        )
        .unwrap();

    assert_eq!(ledger.balance_of("ALICE"), Some(2_000));
    assert_eq!(ledger.balance_of("BOB"), Some(-1_000));
    assert_eq!(ledger.balance_of("CAROL"), Some(-1_000));
    assert_eq!(ledger.total_balance(), 0);
}

#[test]
fn self_paid_expense_is_not_double_counted() {
    // Scenario B: payer is also a participant; net = credit minus own share
    let mut ledger = ledger_with(&["ALICE", "BOB"]);
    let mut log = TransactionLog::new();

    ledger
        .apply_expense("ALICE", &["ALICE", "BOB"], "cab", 1_000, &mut log)
        .unwrap();

    assert_eq!(ledger.balance_of("ALICE"), Some(500));
    assert_eq!(ledger.balance_of("BOB"), Some(-500));
}

#[test]
fn payer_outside_participant_set() {
    let mut ledger = ledger_with(&["ALICE", "BOB", "CAROL"]);
    let mut log = TransactionLog::new();

    ledger
        .apply_expense("ALICE", &["BOB", "CAROL"], "gift", 2_000, &mut log)
        .unwrap();

    assert_eq!(ledger.balance_of("ALICE"), Some(2_000));
    assert_eq!(ledger.balance_of("BOB"), Some(-1_000));
    assert_eq!(ledger.balance_of("CAROL"), Some(-1_000));
}

#[test]
fn uneven_split_assigns_leftover_cents_to_payer() {
    let mut ledger = ledger_with(&["A", "B", "C"]);
    let mut log = TransactionLog::new();

    // 0.07 over 3 participants: share 0.02, remainder 0.01
    ledger
        .apply_expense("A", &["A", "B", "C"], "coffee", 7, &mut log)
        .unwrap();

    // Payer credited 7 - 1 = 6, debited own share 2
    assert_eq!(ledger.balance_of("A"), Some(4));
    assert_eq!(ledger.balance_of("B"), Some(-2));
    assert_eq!(ledger.balance_of("C"), Some(-2));
    assert_eq!(ledger.total_balance(), 0);
}

#[test]
fn zero_sum_holds_across_a_sequence_of_expenses() {
    let mut ledger = ledger_with(&["A", "B", "C", "D"]);
    let mut log = TransactionLog::new();

    ledger
        .apply_expense("A", &["A", "B", "C", "D"], "rent", 100_001, &mut log)
        .unwrap();
    ledger
        .apply_expense("B", &["B", "C"], "groceries", 5_555, &mut log)
        .unwrap();
    ledger
        .apply_expense("D", &["A"], "repayment", 1_234, &mut log)
        .unwrap();

    assert_eq!(ledger.total_balance(), 0);
    assert_eq!(log.len(), 3);
}

// ============================================================================
// Validation and no-partial-mutation
// ============================================================================

#[test]
fn non_positive_amount_is_rejected() {
    let mut ledger = ledger_with(&["A", "B"]);
    let mut log = TransactionLog::new();

    for amount in [0, -500] {
        let result = ledger.apply_expense("A", &["B"], "bad", amount, &mut log);
        assert_eq!(result, Err(LedgerError::InvalidAmount { amount }));
    }
    assert!(log.is_empty());
}

#[test]
fn empty_participant_set_is_rejected() {
    let mut ledger = ledger_with(&["A"]);
    let mut log = TransactionLog::new();

    let result = ledger.apply_expense("A", &[], "nobody", 1_000, &mut log);
    assert_eq!(result, Err(LedgerError::NoParticipants));
}

#[test]
fn unknown_payer_is_rejected() {
    let mut ledger = ledger_with(&["A"]);
    let mut log = TransactionLog::new();

    let result = ledger.apply_expense("GHOST", &["A"], "spooky", 1_000, &mut log);
    assert_eq!(
        result,
        Err(LedgerError::UnknownUser {
            name: "GHOST".to_string()
        })
    );
}

#[test]
fn unknown_participant_leaves_ledger_untouched() {
    let mut ledger = ledger_with(&["A", "B"]);
    let mut log = TransactionLog::new();

    let result = ledger.apply_expense("A", &["B", "GHOST"], "dinner", 3_000, &mut log);
    assert_eq!(
        result,
        Err(LedgerError::UnknownUser {
            name: "GHOST".to_string()
        })
    );

    // No partial mutation: every balance unchanged, nothing logged
    assert_eq!(ledger.balance_of("A"), Some(0));
    assert_eq!(ledger.balance_of("B"), Some(0));
    assert!(log.is_empty());
}

#[test]
fn duplicate_participant_is_rejected() {
    let mut ledger = ledger_with(&["A", "B"]);
    let mut log = TransactionLog::new();

    let result = ledger.apply_expense("A", &["B", "B"], "dinner", 3_000, &mut log);
    assert_eq!(
        result,
        Err(LedgerError::DuplicateParticipant {
            name: "B".to_string()
        })
    );
    assert_eq!(ledger.balance_of("B"), Some(0));
}

// ============================================================================
// Recorder contract
// ============================================================================

#[test]
fn recorder_sees_full_amount_after_balances_update() {
    let mut ledger = ledger_with(&["A", "B"]);
    let mut log = TransactionLog::new();

    ledger
        .apply_expense("A", &["A", "B"], "team dinner", 3_000, &mut log)
        .unwrap();

    assert_eq!(log.len(), 1);
    let record = &log.records()[0];
    assert_eq!(record.payer(), "A");
    assert_eq!(record.description(), "team dinner");
    assert_eq!(record.amount(), 3_000);
}
