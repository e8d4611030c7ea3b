//! Settlement engine
//!
//! Consumes the ledger and produces an ordered list of payment instructions
//! that zeroes every non-zero balance.
//!
//! # Settlement Flow
//!
//! ```text
//! Ledger ──▶ build min-heap over non-zero balances
//!              │
//!              ▼ while more than one entry remains
//!          extract min (debtor), extract min again (creditor)
//!          transfer min(|debtor|, |creditor|), emit instruction
//!          reinsert whichever side is still non-zero
//!              │
//!              ▼
//!          commit final balances back to the ledger
//! ```
//!
//! # Pairing rule
//!
//! Both extractions take the current *minimum* balance, so each round pairs
//! the two most negative remaining entries and the less indebted of the two
//! acts as a stand-in creditor. This greedy min-min rule zeroes at least one
//! side per round and terminates, but it is not the textbook
//! largest-debtor-vs-largest-creditor pairing and does not minimize the
//! instruction count. It is kept deliberately; `min_min_pairing_is_pinned`
//! in the settlement tests locks the behavior in.
//!
//! # Critical Invariants
//!
//! 1. Instruction amounts are always non-negative
//! 2. Every user that entered the heap is committed back (zero, or the one
//!    residual balance)
//! 3. A leftover non-zero entry is reported as a residual, never dropped:
//!    with exact cents arithmetic it means the ledger was not zero-sum going
//!    in, not that the run misbehaved

use crate::heap::{BalanceHeap, HeapEntry, HeapError};
use crate::models::ledger::Ledger;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a settlement run
///
/// A heap fault is an internal invariant violation: the run aborts loudly
/// rather than continuing with a corrupted structure. The ledger is left
/// untouched in that case (balances are only committed at the end).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettlementError {
    #[error("heap error: {0}")]
    Heap(#[from] HeapError),
}

/// One payment instruction: `payer` pays `payee` `amount` cents.
///
/// Amounts are always non-negative; the sequence is suitable for direct
/// display or for piping to a payments API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstruction {
    pub payer: String,
    pub payee: String,
    pub amount: i64,
}

/// A non-zero balance left over after the settlement loop drained the heap.
///
/// Indicates an upstream ledger imbalance; surfaced to the caller as data
/// (plus a warning log) rather than an error, since the run itself completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residual {
    pub user: String,
    pub amount: i64,
}

/// Outcome of one settlement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Payment instructions in emission order
    pub instructions: Vec<PaymentInstruction>,

    /// Leftover non-zero balance, if the ledger was not zero-sum
    pub residual: Option<Residual>,
}

impl SettlementReport {
    /// True if the run zeroed every balance it saw
    pub fn is_clean(&self) -> bool {
        self.residual.is_none()
    }

    /// Total value moved by the emitted instructions (cents)
    pub fn total_paid(&self) -> i64 {
        self.instructions.iter().map(|i| i.amount).sum()
    }
}

/// Settle all outstanding balances in the ledger.
///
/// Builds a transient min-heap over every non-zero balance, repeatedly pairs
/// the two minimum entries, and emits one instruction per pair. Working
/// balances are committed back to the ledger when the loop ends, so after a
/// clean run every user is at zero and a second call emits nothing.
///
/// Runs to completion synchronously; the caller must hold exclusive access
/// to the ledger for the duration (a concurrent expense would corrupt the
/// zero-sum invariant mid-run).
///
/// # Example
/// ```
/// use split_settle_core::{settle, Ledger, TransactionLog};
///
/// let mut ledger = Ledger::new();
/// ledger.register_user("ALICE").unwrap();
/// ledger.register_user("BOB").unwrap();
///
/// let mut log = TransactionLog::new();
/// ledger
///     .apply_expense("ALICE", &["ALICE", "BOB"], "cab", 3_000, &mut log)
///     .unwrap();
///
/// let report = settle(&mut ledger).unwrap();
/// assert_eq!(report.instructions.len(), 1);
/// assert_eq!(report.instructions[0].payer, "BOB");
/// assert_eq!(report.instructions[0].payee, "ALICE");
/// assert_eq!(report.instructions[0].amount, 1_500);
/// assert!(report.is_clean());
/// assert_eq!(ledger.balance_of("BOB"), Some(0));
/// ```
pub fn settle(ledger: &mut Ledger) -> Result<SettlementReport, SettlementError> {
    let mut heap = BalanceHeap::with_capacity(ledger.len());
    let mut touched = Vec::new();

    for (index, user) in ledger.users().iter().enumerate() {
        if user.balance() != 0 {
            heap.insert(HeapEntry::new(index, user.balance()));
            touched.push(index);
        }
    }

    let mut instructions = Vec::new();
    while heap.len() > 1 {
        let mut debtor = heap.extract_min()?;
        let mut creditor = heap.extract_min()?;

        // Signed transfer: the full debt if the debtor owes more than the
        // creditor can absorb, otherwise the creditor's full claim
        let settlement = if debtor.balance < -creditor.balance {
            debtor.balance
        } else {
            -creditor.balance
        };

        debtor.balance -= settlement;
        creditor.balance += settlement;

        instructions.push(PaymentInstruction {
            payer: ledger.users()[debtor.user_index].name().to_string(),
            payee: ledger.users()[creditor.user_index].name().to_string(),
            amount: -settlement,
        });

        if debtor.balance != 0 {
            heap.insert(debtor);
        }
        if creditor.balance != 0 {
            heap.insert(creditor);
        }
    }

    // At most one entry can remain, and only when the ledger was imbalanced
    let residual = heap.peek().copied();

    for index in touched {
        ledger.commit_balance(index, 0);
    }
    if let Some(entry) = residual {
        ledger.commit_balance(entry.user_index, entry.balance);
    }

    let residual = residual.map(|entry| Residual {
        user: ledger.users()[entry.user_index].name().to_string(),
        amount: entry.balance,
    });
    if let Some(ref leftover) = residual {
        tracing::warn!(
            user = %leftover.user,
            amount = leftover.amount,
            "settlement left a residual balance; ledger was not zero-sum"
        );
    }
    tracing::debug!(
        instructions = instructions.len(),
        clean = residual.is_none(),
        "settlement run complete"
    );

    Ok(SettlementReport {
        instructions,
        residual,
    })
}
