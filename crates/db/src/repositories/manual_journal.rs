//! Manual journal repository: drafts, approval, and posting.
//!
//! The interactive journal manager stores multi-line drafts and walks
//! them through draft → approved/rejected → posted. Posting applies each
//! line's balance delta inside one database transaction.

use chrono::{NaiveDate, Utc};
use grootboek_core::journal::{
    self, JournalError, JournalLine, ManualJournalStatus as CoreStatus,
};
use grootboek_shared::types::AccountId;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::{
    accounts, manual_journal_lines, manual_journals, sea_orm_active_enums::ManualJournalStatus,
};

/// Error types for manual journal operations.
#[derive(Debug, thiserror::Error)]
pub enum ManualJournalError {
    /// Journal not found.
    #[error("Journal not found: {0}")]
    NotFound(Uuid),

    /// Validation or transition error from the core workflow rules.
    #[error(transparent)]
    Journal(#[from] JournalError),

    /// A line references an account outside the entity's chart.
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    /// A line references an inactive account.
    #[error("Account {0} is inactive")]
    AccountInactive(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input line for a new draft.
#[derive(Debug, Clone)]
pub struct NewJournalLine {
    /// Account the line posts to.
    pub account_id: Uuid,
    /// Debit column value.
    pub debit: Decimal,
    /// Credit column value.
    pub credit: Decimal,
    /// Optional line memo.
    pub memo: Option<String>,
}

/// Input for creating a draft journal.
#[derive(Debug, Clone)]
pub struct NewManualJournal {
    /// Entity the journal belongs to.
    pub entity_id: Uuid,
    /// Journal date.
    pub journal_date: NaiveDate,
    /// Journal description.
    pub description: String,
    /// Journal lines (at least two, balanced).
    pub lines: Vec<NewJournalLine>,
}

/// A journal with its lines.
#[derive(Debug)]
pub struct JournalWithLines {
    /// The journal header.
    pub journal: manual_journals::Model,
    /// The lines, ordered by position.
    pub lines: Vec<manual_journal_lines::Model>,
}

/// Manual journal repository.
#[derive(Debug, Clone)]
pub struct ManualJournalRepository {
    db: DatabaseConnection,
}

impl ManualJournalRepository {
    /// Creates a new manual journal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft journal after validating lines and accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the line set violates the balance rules or
    /// references unknown/inactive accounts.
    pub async fn create_draft(
        &self,
        input: NewManualJournal,
    ) -> Result<JournalWithLines, ManualJournalError> {
        let core_lines: Vec<JournalLine> = input
            .lines
            .iter()
            .map(|l| JournalLine {
                account_id: AccountId::from_uuid(l.account_id),
                debit: l.debit,
                credit: l.credit,
                memo: l.memo.clone(),
            })
            .collect();
        journal::validate_lines(&core_lines)?;

        for new_line in &input.lines {
            let account = accounts::Entity::find_by_id(new_line.account_id)
                .filter(accounts::Column::EntityId.eq(input.entity_id))
                .one(&self.db)
                .await?
                .ok_or(ManualJournalError::AccountNotFound(new_line.account_id))?;
            if !account.is_active {
                return Err(ManualJournalError::AccountInactive(account.id));
            }
        }

        let txn = self.db.begin().await?;
        let now = Utc::now();
        let journal_id = Uuid::now_v7();

        let journal = manual_journals::ActiveModel {
            id: Set(journal_id),
            entity_id: Set(input.entity_id),
            journal_date: Set(input.journal_date),
            description: Set(input.description),
            status: Set(ManualJournalStatus::Draft),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&txn)
        .await?;

        let mut lines = Vec::with_capacity(input.lines.len());
        for (position, new_line) in input.lines.into_iter().enumerate() {
            let position = i32::try_from(position).unwrap_or(i32::MAX);
            let line = manual_journal_lines::ActiveModel {
                id: Set(Uuid::now_v7()),
                journal_id: Set(journal_id),
                account_id: Set(new_line.account_id),
                debit: Set(new_line.debit),
                credit: Set(new_line.credit),
                memo: Set(new_line.memo),
                position: Set(position),
            }
            .insert(&txn)
            .await?;
            lines.push(line);
        }

        txn.commit().await?;

        info!(journal_id = %journal_id, lines = lines.len(), "Manual journal drafted");

        Ok(JournalWithLines { journal, lines })
    }

    /// Approves a draft journal.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal is missing or not a draft.
    pub async fn approve(
        &self,
        entity_id: Uuid,
        journal_id: Uuid,
    ) -> Result<manual_journals::Model, ManualJournalError> {
        self.review(entity_id, journal_id, ManualJournalStatus::Approved)
            .await
    }

    /// Rejects a draft journal; terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal is missing or not a draft.
    pub async fn reject(
        &self,
        entity_id: Uuid,
        journal_id: Uuid,
    ) -> Result<manual_journals::Model, ManualJournalError> {
        self.review(entity_id, journal_id, ManualJournalStatus::Rejected)
            .await
    }

    async fn review(
        &self,
        entity_id: Uuid,
        journal_id: Uuid,
        next: ManualJournalStatus,
    ) -> Result<manual_journals::Model, ManualJournalError> {
        let journal = self.require(entity_id, journal_id).await?;
        journal::validate_can_review(CoreStatus::from(&journal.status))?;

        let mut active: manual_journals::ActiveModel = journal.into();
        active.status = Set(next);
        active.updated_at = Set(Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Posts an approved journal: applies every line's balance delta and
    /// marks the journal posted, in one database transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal is missing, not approved, or its
    /// lines no longer balance.
    pub async fn post(
        &self,
        entity_id: Uuid,
        journal_id: Uuid,
    ) -> Result<JournalWithLines, ManualJournalError> {
        let txn = self.db.begin().await?;

        let outcome = Self::post_in_txn(&txn, entity_id, journal_id).await;
        match outcome {
            Ok(result) => {
                txn.commit().await?;
                info!(journal_id = %journal_id, "Manual journal posted");
                Ok(result)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn post_in_txn(
        txn: &DatabaseTransaction,
        entity_id: Uuid,
        journal_id: Uuid,
    ) -> Result<JournalWithLines, ManualJournalError> {
        let journal = manual_journals::Entity::find_by_id(journal_id)
            .filter(manual_journals::Column::EntityId.eq(entity_id))
            .one(txn)
            .await?
            .ok_or(ManualJournalError::NotFound(journal_id))?;

        journal::validate_can_post(CoreStatus::from(&journal.status))?;

        let lines = manual_journal_lines::Entity::find()
            .filter(manual_journal_lines::Column::JournalId.eq(journal_id))
            .order_by_asc(manual_journal_lines::Column::Position)
            .all(txn)
            .await?;

        // Re-check the balance invariant at posting time.
        let core_lines: Vec<JournalLine> = lines
            .iter()
            .map(|l| JournalLine {
                account_id: AccountId::from_uuid(l.account_id),
                debit: l.debit,
                credit: l.credit,
                memo: l.memo.clone(),
            })
            .collect();
        journal::validate_lines(&core_lines)?;

        for line in &lines {
            let account = accounts::Entity::find_by_id(line.account_id)
                .one(txn)
                .await?
                .ok_or(ManualJournalError::AccountNotFound(line.account_id))?;
            if !account.is_active {
                return Err(ManualJournalError::AccountInactive(account.id));
            }

            let delta = grootboek_core::ledger::balance_change(
                (&account.account_type).into(),
                line.debit,
                line.credit,
            );
            accounts::Entity::update_many()
                .col_expr(
                    accounts::Column::Balance,
                    Expr::col(accounts::Column::Balance).add(delta),
                )
                .col_expr(accounts::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(accounts::Column::Id.eq(account.id))
                .exec(txn)
                .await?;
        }

        let mut active: manual_journals::ActiveModel = journal.into();
        active.status = Set(ManualJournalStatus::Posted);
        active.updated_at = Set(Utc::now().into());
        let journal = active.update(txn).await?;

        Ok(JournalWithLines { journal, lines })
    }

    /// Loads a journal with its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal does not exist for the entity.
    pub async fn get_with_lines(
        &self,
        entity_id: Uuid,
        journal_id: Uuid,
    ) -> Result<JournalWithLines, ManualJournalError> {
        let journal = self.require(entity_id, journal_id).await?;

        let lines = manual_journal_lines::Entity::find()
            .filter(manual_journal_lines::Column::JournalId.eq(journal_id))
            .order_by_asc(manual_journal_lines::Column::Position)
            .all(&self.db)
            .await?;

        Ok(JournalWithLines { journal, lines })
    }

    async fn require(
        &self,
        entity_id: Uuid,
        journal_id: Uuid,
    ) -> Result<manual_journals::Model, ManualJournalError> {
        manual_journals::Entity::find_by_id(journal_id)
            .filter(manual_journals::Column::EntityId.eq(entity_id))
            .one(&self.db)
            .await?
            .ok_or(ManualJournalError::NotFound(journal_id))
    }
}
