//! Transaction recording service.
//!
//! Resolves a business event through the mapping table and the entity's
//! account directory, then records the transaction row, the primary
//! journal entry, and the VAT side entry in one database transaction.
//! A failure at any point leaves nothing behind.

use chrono::{NaiveDate, Utc};
use grootboek_core::mapping::TransactionKind;
use grootboek_core::tax;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use super::account::{self, AccountError};
use super::mapping::{self, MappingError};
use super::posting::{self, JournalEntryInput, PostingError};
use crate::entities::{accounts, business_entities, journal_entries, tax_configs, transactions};

/// Error types for transaction recording.
#[derive(Debug, thiserror::Error)]
pub enum RecordingError {
    /// Amount must be positive; rejected before anything is resolved.
    #[error("Transaction amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    /// Entity not found.
    #[error("Entity not found: {0}")]
    EntityNotFound(Uuid),

    /// Mapping resolution failed (missing or inactive row).
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Account resolution failed (code not seeded for the entity).
    #[error(transparent)]
    Account(#[from] AccountError),

    /// The entity records VAT-liable transactions but has no tax config.
    /// A hard failure: silently skipping VAT would corrupt the books.
    #[error("No tax configuration for entity {0}")]
    TaxConfigMissing(Uuid),

    /// Journal posting failed.
    #[error(transparent)]
    Posting(#[from] PostingError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for recording a business transaction.
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    /// Entity whose books are affected.
    pub entity_id: Uuid,
    /// Semantic transaction kind.
    pub kind: TransactionKind,
    /// Transaction amount (must be positive).
    pub amount: Decimal,
    /// Transaction date.
    pub txn_date: NaiveDate,
    /// Description, carried onto the journal memo.
    pub description: String,
}

/// Result of recording a transaction.
#[derive(Debug)]
pub struct RecordedTransaction {
    /// The immutable transaction row.
    pub transaction: transactions::Model,
    /// The primary journal entry.
    pub journal: journal_entries::Model,
    /// The account debited by the primary entry.
    pub debit_account: accounts::Model,
    /// The account credited by the primary entry.
    pub credit_account: accounts::Model,
    /// VAT amount posted, when the mapping applies VAT.
    pub vat_amount: Option<Decimal>,
    /// The VAT journal entry, when one was posted.
    pub vat_journal: Option<journal_entries::Model>,
}

/// Transaction recording service.
#[derive(Debug, Clone)]
pub struct RecordingRepository {
    db: DatabaseConnection,
}

impl RecordingRepository {
    /// Creates a new recording repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a business transaction and its journal entries atomically.
    ///
    /// # Errors
    ///
    /// Fails fast on an unknown entity, a missing/inactive mapping, an
    /// unseeded account code, or a missing tax config. No rows are
    /// written on failure.
    pub async fn record(
        &self,
        input: RecordTransactionInput,
    ) -> Result<RecordedTransaction, RecordingError> {
        if input.amount <= Decimal::ZERO {
            return Err(RecordingError::InvalidAmount(input.amount));
        }

        business_entities::Entity::find_by_id(input.entity_id)
            .one(&self.db)
            .await?
            .ok_or(RecordingError::EntityNotFound(input.entity_id))?;

        let txn = self.db.begin().await?;

        let outcome = Self::record_in_txn(&txn, &input).await;
        match outcome {
            Ok(recorded) => {
                txn.commit().await?;
                info!(
                    entity_id = %input.entity_id,
                    kind = %input.kind,
                    amount = %input.amount,
                    vat = ?recorded.vat_amount,
                    "Transaction recorded"
                );
                Ok(recorded)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn record_in_txn(
        txn: &DatabaseTransaction,
        input: &RecordTransactionInput,
    ) -> Result<RecordedTransaction, RecordingError> {
        // 1. Resolve the mapping; fail fast if unknown or deactivated.
        let mapping_row = mapping::find_active(txn, input.kind).await?;

        // 2. Resolve the debit/credit pair from the entity's chart.
        let (debit_account, credit_account) = account::resolve_pair(
            txn,
            input.entity_id,
            &mapping_row.debit_code,
            &mapping_row.credit_code,
        )
        .await?;

        // 3. Resolve VAT up front so nothing posts when config is broken.
        let vat = if mapping_row.apply_vat {
            let tax_config = tax_configs::Entity::find()
                .filter(tax_configs::Column::EntityId.eq(input.entity_id))
                .one(txn)
                .await?
                .ok_or(RecordingError::TaxConfigMissing(input.entity_id))?;

            let vat_amount = tax::vat_amount(input.amount, tax_config.vat_rate);
            let (vat_debit, vat_credit) = account::resolve_pair(
                txn,
                input.entity_id,
                tax::VAT_EXPENSE_CODE,
                tax::VAT_CONTROL_CODE,
            )
            .await?;
            Some((vat_amount, vat_debit, vat_credit))
        } else {
            None
        };

        // 4. Create the transaction row with the tax rule snapshot.
        let now = Utc::now();
        let transaction = transactions::ActiveModel {
            id: Set(Uuid::now_v7()),
            entity_id: Set(input.entity_id),
            txn_type: Set(input.kind.into()),
            amount: Set(input.amount),
            txn_date: Set(input.txn_date),
            description: Set(input.description.clone()),
            apply_vat: Set(mapping_row.apply_vat),
            created_at: Set(now.into()),
        }
        .insert(txn)
        .await?;

        // 5. Post the primary entry.
        let journal = posting::post_journal_entry(
            txn,
            JournalEntryInput {
                entity_id: input.entity_id,
                entry_date: input.txn_date,
                debit_account: debit_account.clone(),
                credit_account: credit_account.clone(),
                amount: input.amount,
                memo: input.description.clone(),
                transaction_id: Some(transaction.id),
            },
        )
        .await?;

        // 6. Post the VAT side entry. A rate of zero posts nothing.
        let (vat_amount, vat_journal) = match vat {
            Some((amount, vat_debit, vat_credit)) if amount > Decimal::ZERO => {
                let entry = posting::post_journal_entry(
                    txn,
                    JournalEntryInput {
                        entity_id: input.entity_id,
                        entry_date: input.txn_date,
                        debit_account: vat_debit,
                        credit_account: vat_credit,
                        amount,
                        memo: format!("VAT on {}", input.description),
                        transaction_id: Some(transaction.id),
                    },
                )
                .await?;
                (Some(amount), Some(entry))
            }
            Some((amount, _, _)) => (Some(amount), None),
            None => (None, None),
        };

        Ok(RecordedTransaction {
            transaction,
            journal,
            debit_account,
            credit_account,
            vat_amount,
            vat_journal,
        })
    }
}
