//! Split Settle Core - Debt Settlement Engine
//!
//! Tracks shared expenses among a small group of users and computes a set of
//! pairwise payments that settles every outstanding balance.
//!
//! # Architecture
//!
//! - **models**: Domain types (User, Ledger, ExpenseRecord)
//! - **heap**: Binary min-heap over balance entries
//! - **settlement**: Greedy settlement engine
//! - **audit**: Append-only expense log (write-behind, never read back)
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. The sum of all ledger balances is exactly zero at every observation
//!    point (expense splitting assigns leftover cents to the payer)
//! 3. The heap is transient: built from the ledger at the start of a
//!    settlement run, discarded at the end, balances committed back explicitly

// Module declarations
pub mod audit;
pub mod heap;
pub mod models;
pub mod settlement;

// Re-exports for convenience
pub use audit::{ExpenseRecorder, TransactionLog};
pub use heap::{BalanceHeap, HeapEntry, HeapError};
pub use models::{
    expense::ExpenseRecord,
    ledger::{BalanceEntry, Ledger, LedgerError},
    user::User,
};
pub use settlement::{settle, PaymentInstruction, Residual, SettlementError, SettlementReport};
