//! Double-entry journal posting rules and balance math.
//!
//! A journal entry is a balanced pair of ledger postings: one debit line
//! and one credit line for the same amount. This module owns the entry
//! validation rules and the account balance delta rules; persistence
//! lives in the db crate.

pub mod balance;
pub mod entry;
pub mod error;
pub mod types;

pub use balance::{balance_change, is_debit_normal};
pub use entry::NewJournalEntry;
pub use error::LedgerError;
pub use types::AccountType;
