//! Ledger
//!
//! Owns every [`User`] in the group and maps expenses onto their balances.
//! Storage is dynamically sized (no fixed capacity, no process-wide globals)
//! and preserves registration order for display.
//!
//! # Critical Invariants
//!
//! 1. **Zero-sum**: the balances of all users sum to exactly zero after every
//!    successful `apply_expense` call. Leftover cents from an uneven split
//!    are assigned to the payer, so the invariant is exact under integer
//!    arithmetic.
//! 2. **Name uniqueness**: each name maps to exactly one user; duplicate
//!    registration is rejected.
//! 3. **No partial mutation**: a failed operation leaves every balance
//!    untouched.

use crate::audit::ExpenseRecorder;
use crate::models::expense::ExpenseRecord;
use crate::models::user::User;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that can occur during ledger operations
///
/// All of these are recoverable: the offending call is a no-op on the ledger
/// and the caller decides how to report it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("user {name} is already registered")]
    DuplicateUser { name: String },

    #[error("unknown user {name}")]
    UnknownUser { name: String },

    #[error("expense amount must be positive, got {amount}")]
    InvalidAmount { amount: i64 },

    #[error("expense must have at least one participant")]
    NoParticipants,

    #[error("participant {name} listed more than once")]
    DuplicateParticipant { name: String },
}

/// One row of a ledger snapshot: a name and its balance in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub name: String,
    pub balance: i64,
}

/// The balance ledger: user identity -> signed balance.
///
/// Users live in registration order; a name index provides O(1) lookup.
///
/// # Example
/// ```
/// use split_settle_core::{Ledger, TransactionLog};
///
/// let mut ledger = Ledger::new();
/// ledger.register_user("ALICE").unwrap();
/// ledger.register_user("BOB").unwrap();
/// ledger.register_user("CAROL").unwrap();
///
/// let mut log = TransactionLog::new();
/// ledger
///     .apply_expense("ALICE", &["ALICE", "BOB", "CAROL"], "dinner", 3_000, &mut log)
///     .unwrap();
///
/// assert_eq!(ledger.balance_of("ALICE"), Some(2_000));
/// assert_eq!(ledger.balance_of("BOB"), Some(-1_000));
/// assert_eq!(ledger.total_balance(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// All users in registration order
    users: Vec<User>,

    /// Name -> position in `users`
    index: HashMap<String, usize>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user with a zero balance
    ///
    /// # Errors
    ///
    /// `DuplicateUser` if the name is already registered.
    pub fn register_user(&mut self, name: &str) -> Result<(), LedgerError> {
        if self.index.contains_key(name) {
            return Err(LedgerError::DuplicateUser {
                name: name.to_string(),
            });
        }
        self.index.insert(name.to_string(), self.users.len());
        self.users.push(User::new(name.to_string()));
        Ok(())
    }

    /// Apply an expense paid by `payer` and split evenly across `participants`
    ///
    /// Each participant is debited `amount / n` (integer floor); the payer is
    /// credited the full amount minus the division remainder, i.e. the payer
    /// absorbs the leftover cents. This keeps the zero-sum invariant exact.
    /// The payer may also appear in `participants`, in which case they are
    /// debited their own share like everyone else.
    ///
    /// On success one [`ExpenseRecord`] is appended through `recorder`
    /// (write-behind: the recorder only appends and cannot fail the call).
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `NoParticipants` if `participants` is empty
    /// - `UnknownUser` if the payer or any participant is not registered
    /// - `DuplicateParticipant` if a name appears twice
    ///
    /// All validation happens before any balance is touched; a failed call
    /// leaves the ledger unchanged.
    pub fn apply_expense(
        &mut self,
        payer: &str,
        participants: &[&str],
        description: &str,
        amount: i64,
        recorder: &mut dyn ExpenseRecorder,
    ) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount { amount });
        }
        if participants.is_empty() {
            return Err(LedgerError::NoParticipants);
        }

        let payer_index = self.lookup(payer)?;
        let mut seen = HashSet::with_capacity(participants.len());
        let mut participant_indices = Vec::with_capacity(participants.len());
        for name in participants {
            let index = self.lookup(name)?;
            if !seen.insert(index) {
                return Err(LedgerError::DuplicateParticipant {
                    name: name.to_string(),
                });
            }
            participant_indices.push(index);
        }

        // share = floor(amount / n); the remainder stays with the payer
        let count = participant_indices.len() as i64;
        let share = amount / count;
        let remainder = amount - share * count;

        for index in &participant_indices {
            self.users[*index].apply_delta(-share);
        }
        self.users[payer_index].apply_delta(amount - remainder);

        recorder.record(ExpenseRecord::new(payer, description, amount));
        Ok(())
    }

    /// Snapshot of (name, balance) pairs in registration order
    ///
    /// Read-only view, no side effects.
    pub fn snapshot(&self) -> Vec<BalanceEntry> {
        self.users
            .iter()
            .map(|user| BalanceEntry {
                name: user.name().to_string(),
                balance: user.balance(),
            })
            .collect()
    }

    /// Balance of a single user, if registered
    pub fn balance_of(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&i| self.users[i].balance())
    }

    /// Reference to a user by name
    pub fn user(&self, name: &str) -> Option<&User> {
        self.index.get(name).map(|&i| &self.users[i])
    }

    /// Mutable reference to a user by name
    ///
    /// Direct balance access for callers that own the ledger. The ledger's
    /// own operations keep balances zero-sum; mutations made through this
    /// handle are the caller's responsibility.
    pub fn user_mut(&mut self, name: &str) -> Option<&mut User> {
        let index = *self.index.get(name)?;
        Some(&mut self.users[index])
    }

    /// All users in registration order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True if no user has been registered
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Sum of all balances (diagnostic; zero for a healthy ledger)
    pub fn total_balance(&self) -> i64 {
        self.users.iter().map(|user| user.balance()).sum()
    }

    /// Overwrite one user's balance by position (settlement commit path)
    pub(crate) fn commit_balance(&mut self, index: usize, balance: i64) {
        self.users[index].set_balance(balance);
    }

    fn lookup(&self, name: &str) -> Result<usize, LedgerError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| LedgerError::UnknownUser {
                name: name.to_string(),
            })
    }
}
