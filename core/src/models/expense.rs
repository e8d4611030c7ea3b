//! Expense record model
//!
//! A write-once audit record created every time an expense is applied to the
//! ledger. Records are appended through the [`ExpenseRecorder`] trait and are
//! never read back by the settlement engine.
//!
//! [`ExpenseRecorder`]: crate::audit::ExpenseRecorder

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit record for a single recorded expense.
///
/// Insertion-ordered inside the log, never mutated after creation.
///
/// # Example
/// ```
/// use split_settle_core::ExpenseRecord;
///
/// let record = ExpenseRecord::new("ALICE", "team dinner", 3_000);
/// assert_eq!(record.payer(), "ALICE");
/// assert_eq!(record.amount(), 3_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique record identifier
    id: Uuid,

    /// Name of the user who paid
    payer: String,

    /// Free-text description ("team dinner")
    description: String,

    /// Full expense amount in cents (always positive)
    amount: i64,
}

impl ExpenseRecord {
    /// Create a new record with a fresh v4 id
    pub fn new(payer: &str, description: &str, amount: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            payer: payer.to_string(),
            description: description.to_string(),
            amount,
        }
    }

    /// Record identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name of the paying user
    pub fn payer(&self) -> &str {
        &self.payer
    }

    /// Free-text description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Expense amount in cents
    pub fn amount(&self) -> i64 {
        self.amount
    }
}
