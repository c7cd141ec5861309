//! Journal posting primitive.
//!
//! Persists one balanced journal entry as exactly two ledger postings and
//! applies the running-balance delta to both accounts. The caller supplies
//! the database transaction; entry, postings, and balance updates are
//! never observable partially.

use chrono::{NaiveDate, Utc};
use grootboek_core::ledger::{self, LedgerError, NewJournalEntry};
use grootboek_shared::types::AccountId;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::{accounts, journal_entries, ledger_postings};

/// Error types for the posting primitive.
#[derive(Debug, thiserror::Error)]
pub enum PostingError {
    /// Double-entry precondition violated.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for posting one journal entry.
///
/// Accounts are passed as resolved rows so the primitive can apply
/// balance deltas without re-querying; the enclosing transaction already
/// loaded them.
#[derive(Debug, Clone)]
pub struct JournalEntryInput {
    /// Entity whose books are affected.
    pub entity_id: Uuid,
    /// Entry date.
    pub entry_date: NaiveDate,
    /// Resolved debit account row.
    pub debit_account: accounts::Model,
    /// Resolved credit account row.
    pub credit_account: accounts::Model,
    /// Entry amount (must be positive).
    pub amount: Decimal,
    /// Entry memo.
    pub memo: String,
    /// Source transaction, when the entry was posted for one.
    pub transaction_id: Option<Uuid>,
}

/// Atomically posts one journal entry with its two ledger postings.
///
/// # Errors
///
/// Returns an error if validation fails (zero/negative amount, same
/// account on both sides, inactive account) or the database rejects a
/// write. The caller's transaction must then be rolled back.
pub async fn post_journal_entry(
    txn: &DatabaseTransaction,
    input: JournalEntryInput,
) -> Result<journal_entries::Model, PostingError> {
    let spec = NewJournalEntry {
        entry_date: input.entry_date,
        debit_account_id: AccountId::from_uuid(input.debit_account.id),
        credit_account_id: AccountId::from_uuid(input.credit_account.id),
        amount: input.amount,
        memo: input.memo,
    };
    spec.validate()?;

    for account in [&input.debit_account, &input.credit_account] {
        if !account.is_active {
            return Err(LedgerError::AccountInactive(AccountId::from_uuid(account.id)).into());
        }
    }

    let now = Utc::now();
    let entry_id = Uuid::now_v7();

    let entry = journal_entries::ActiveModel {
        id: Set(entry_id),
        entity_id: Set(input.entity_id),
        entry_date: Set(spec.entry_date),
        debit_account_id: Set(input.debit_account.id),
        credit_account_id: Set(input.credit_account.id),
        amount: Set(spec.amount),
        memo: Set(spec.memo.clone()),
        transaction_id: Set(input.transaction_id),
        created_at: Set(now.into()),
    };
    let inserted = entry.insert(txn).await?;

    // One debit line, one credit line; each carries the full amount.
    for line in spec.posting_lines() {
        let posting = ledger_postings::ActiveModel {
            id: Set(Uuid::now_v7()),
            journal_entry_id: Set(entry_id),
            account_id: Set(line.account_id.into_inner()),
            debit: Set(line.debit),
            credit: Set(line.credit),
            created_at: Set(now.into()),
        };
        posting.insert(txn).await?;

        let account = if line.account_id.into_inner() == input.debit_account.id {
            &input.debit_account
        } else {
            &input.credit_account
        };
        apply_balance_delta(txn, account, line.debit, line.credit).await?;
    }

    Ok(inserted)
}

/// Applies a posting's balance delta to an account with an atomic
/// `balance = balance + delta` update.
async fn apply_balance_delta(
    txn: &DatabaseTransaction,
    account: &accounts::Model,
    debit: Decimal,
    credit: Decimal,
) -> Result<(), DbErr> {
    let delta = ledger::balance_change((&account.account_type).into(), debit, credit);

    accounts::Entity::update_many()
        .col_expr(
            accounts::Column::Balance,
            Expr::col(accounts::Column::Balance).add(delta),
        )
        .col_expr(accounts::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(accounts::Column::Id.eq(account.id))
        .exec(txn)
        .await?;

    Ok(())
}
