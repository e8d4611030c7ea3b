//! Domain models
//!
//! - **user**: A participant with a signed running balance
//! - **ledger**: Owns all users, applies expenses, serves snapshots
//! - **expense**: Write-once audit record of a recorded expense

pub mod expense;
pub mod ledger;
pub mod user;

pub use expense::ExpenseRecord;
pub use ledger::{BalanceEntry, Ledger, LedgerError};
pub use user::User;
