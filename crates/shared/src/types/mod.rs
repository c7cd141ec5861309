//! Shared domain types.

pub mod id;

pub use id::{
    AccountId, DisposalId, EntityId, FixedAssetId, JournalEntryId, LedgerPostingId,
    ManualJournalId, TransactionId,
};
