//! User model
//!
//! Represents a participant in the expense-sharing group. The display name is
//! the primary key; there is no separate numeric ID.
//!
//! A user's `balance` is the signed net amount they are owed across all
//! recorded expenses:
//! - Positive: the group owes this user money
//! - Negative: this user owes the group money
//! - Zero: settled
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// A participant with a running signed balance.
///
/// Balances are mutated only by expense recording ([`Ledger::apply_expense`])
/// and by the settlement commit; users are never deleted.
///
/// [`Ledger::apply_expense`]: crate::models::ledger::Ledger::apply_expense
///
/// # Example
/// ```
/// use split_settle_core::User;
///
/// let mut user = User::new("ALICE".to_string());
/// assert_eq!(user.balance(), 0);
///
/// user.apply_delta(2_000); // Owed $20.00
/// assert_eq!(user.balance(), 2_000);
/// assert!(!user.is_settled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique display name (primary key)
    name: String,

    /// Signed net balance in cents
    /// Positive = is owed money, negative = owes money, zero = settled
    balance: i64,
}

impl User {
    /// Create a new user with a zero balance
    pub fn new(name: String) -> Self {
        Self { name, balance: 0 }
    }

    /// Get the user's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current balance (i64 cents)
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// True if the balance is exactly zero
    pub fn is_settled(&self) -> bool {
        self.balance == 0
    }

    /// Adjust the balance directly (positive = credit, negative = debit)
    ///
    /// This bypasses the ledger's zero-sum bookkeeping. The ledger itself
    /// always applies offsetting deltas; external callers that mutate a
    /// single user this way own the resulting imbalance, which `settle`
    /// will surface as a residual rather than silently absorb.
    pub fn apply_delta(&mut self, delta: i64) {
        self.balance += delta;
    }

    /// Overwrite the balance (settlement commit path)
    pub(crate) fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_starts_settled() {
        let user = User::new("ALICE".to_string());
        assert_eq!(user.name(), "ALICE");
        assert_eq!(user.balance(), 0);
        assert!(user.is_settled());
    }

    #[test]
    fn deltas_accumulate() {
        let mut user = User::new("BOB".to_string());
        user.apply_delta(1_500);
        user.apply_delta(-2_000);
        assert_eq!(user.balance(), -500);
        assert!(!user.is_settled());
    }
}
