//! Audit trail
//!
//! Pure write-behind expense log. The ledger appends one record per applied
//! expense through the [`ExpenseRecorder`] trait; nothing on the settlement
//! path ever reads the log back, and appending never blocks or fails an
//! expense.
//!
//! Retention policy: records are kept for the life of the process (no
//! on-disk persistence in scope) and can be exported as JSON.

use crate::models::expense::ExpenseRecord;

/// Sink for expense audit records.
///
/// Contract: implementations only append. They receive the record after the
/// ledger balances are already updated and must not fail the expense path.
pub trait ExpenseRecorder {
    /// Append one record
    fn record(&mut self, record: ExpenseRecord);
}

/// In-memory append-only expense log, insertion ordered.
///
/// # Example
/// ```
/// use split_settle_core::{ExpenseRecord, ExpenseRecorder, TransactionLog};
///
/// let mut log = TransactionLog::new();
/// log.record(ExpenseRecord::new("ALICE", "dinner", 3_000));
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.records()[0].payer(), "ALICE");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    records: Vec<ExpenseRecord>,
}

impl TransactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export the full log as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }
}

impl ExpenseRecorder for TransactionLog {
    fn record(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }
}
