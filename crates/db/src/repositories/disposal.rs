//! Fixed-asset disposal workflow executor.
//!
//! The plan (depreciation catch-up, cost removal, proceeds, gain/loss)
//! comes from `grootboek-core`; this repository executes every planned
//! posting, the disposal record, and the asset finalization in ONE
//! database transaction. Either all effects are visible or none.

use chrono::{NaiveDate, Utc};
use grootboek_core::asset::{
    self, AssetFacts, DisposalError, DisposalMethod, DisposalPlan,
};
use grootboek_core::mapping::TransactionKind;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::account::{self, AccountError};
use super::mapping::{self, MappingError};
use super::posting::{self, JournalEntryInput, PostingError};
use crate::entities::{
    disposals, fixed_assets, sea_orm_active_enums::DisposalStatus, transactions,
};

/// Error types for the disposal workflow.
#[derive(Debug, thiserror::Error)]
pub enum DisposalRepoError {
    /// Domain error from disposal planning or the re-disposal guard.
    #[error(transparent)]
    Disposal(#[from] DisposalError),

    /// Mapping resolution failed for a planned posting.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Account resolution failed for a planned posting.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Journal posting failed.
    #[error(transparent)]
    Posting(#[from] PostingError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for disposing a fixed asset.
#[derive(Debug, Clone)]
pub struct DisposeAssetInput {
    /// Entity whose books are affected.
    pub entity_id: Uuid,
    /// The asset being disposed.
    pub asset_id: Uuid,
    /// Date of the disposal event.
    pub disposal_date: NaiveDate,
    /// Proceeds of the sale (zero for scrapping).
    pub selling_price: Decimal,
    /// How the proceeds are settled.
    pub method: DisposalMethod,
}

/// Result of a completed disposal.
#[derive(Debug)]
pub struct DisposalOutcome {
    /// The disposal record.
    pub disposal: disposals::Model,
    /// The finalized asset row.
    pub asset: fixed_assets::Model,
    /// The derived plan, for response figures.
    pub plan: DisposalPlan,
}

/// Disposal workflow repository.
#[derive(Debug, Clone)]
pub struct DisposalRepository {
    db: DatabaseConnection,
}

impl DisposalRepository {
    /// Creates a new disposal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Disposes a fixed asset: catch-up depreciation, cost removal,
    /// proceeds, gain/loss, disposal record, and asset finalization, all
    /// in one database transaction.
    ///
    /// The asset row is locked for the duration; the unique constraint on
    /// `disposals.asset_id` backstops any concurrent attempt that slips
    /// past the status check.
    ///
    /// # Errors
    ///
    /// Fails without side effects if the asset is missing, already
    /// disposed, or any step cannot resolve its mapping or accounts.
    pub async fn dispose(
        &self,
        input: DisposeAssetInput,
    ) -> Result<DisposalOutcome, DisposalRepoError> {
        let txn = self.db.begin().await?;

        let outcome = Self::dispose_in_txn(&txn, &input).await;
        match outcome {
            Ok(result) => {
                txn.commit().await?;
                info!(
                    entity_id = %input.entity_id,
                    asset_id = %input.asset_id,
                    profit_loss = %result.plan.profit_loss,
                    "Asset disposed"
                );
                Ok(result)
            }
            Err(err) => {
                warn!(
                    entity_id = %input.entity_id,
                    asset_id = %input.asset_id,
                    error = %err,
                    "Disposal rolled back"
                );
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn dispose_in_txn(
        txn: &DatabaseTransaction,
        input: &DisposeAssetInput,
    ) -> Result<DisposalOutcome, DisposalRepoError> {
        // Lock the asset row so concurrent disposals serialize here.
        let asset = fixed_assets::Entity::find_by_id(input.asset_id)
            .filter(fixed_assets::Column::EntityId.eq(input.entity_id))
            .lock_exclusive()
            .one(txn)
            .await?
            .ok_or(DisposalError::AssetNotFound(input.asset_id))?;

        if asset.disposal_status == DisposalStatus::Disposed {
            return Err(DisposalError::AlreadyDisposed(asset.id).into());
        }

        let facts = AssetFacts {
            cost_price: asset.cost_price,
            depreciation_rate: asset.depreciation_rate,
            purchase_date: asset.purchase_date,
            accum_depreciation: asset.accum_depreciation,
        };
        let plan = asset::plan_disposal(&facts, input.disposal_date, input.selling_price, input.method)?;

        // Execute every planned posting in order, each with its own
        // synthetic transaction row.
        let mut gain_loss_entry_id = None;
        for planned in &plan.postings {
            let mapping_row = mapping::find_active(txn, planned.kind).await?;
            let (debit_account, credit_account) = account::resolve_pair(
                txn,
                input.entity_id,
                &mapping_row.debit_code,
                &mapping_row.credit_code,
            )
            .await?;

            let now = Utc::now();
            let transaction = transactions::ActiveModel {
                id: Set(Uuid::now_v7()),
                entity_id: Set(input.entity_id),
                txn_type: Set(planned.kind.into()),
                amount: Set(planned.amount),
                txn_date: Set(input.disposal_date),
                description: Set(planned.memo.clone()),
                apply_vat: Set(false),
                created_at: Set(now.into()),
            }
            .insert(txn)
            .await?;

            let entry = posting::post_journal_entry(
                txn,
                JournalEntryInput {
                    entity_id: input.entity_id,
                    entry_date: input.disposal_date,
                    debit_account,
                    credit_account,
                    amount: planned.amount,
                    memo: planned.memo.clone(),
                    transaction_id: Some(transaction.id),
                },
            )
            .await?;

            if matches!(
                planned.kind,
                TransactionKind::DisposalGain | TransactionKind::DisposalLoss
            ) {
                gain_loss_entry_id = Some(entry.id);
            }
        }

        // One disposal row per asset; journal ref iff a gain/loss posted.
        let now = Utc::now();
        let disposal = disposals::ActiveModel {
            id: Set(Uuid::now_v7()),
            asset_id: Set(asset.id),
            disposal_date: Set(input.disposal_date),
            selling_price: Set(input.selling_price),
            method: Set(input.method.into()),
            profit_loss: Set(plan.profit_loss),
            journal_entry_id: Set(gain_loss_entry_id),
            created_at: Set(now.into()),
        }
        .insert(txn)
        .await?;

        // Finalize the asset: one-way transition to disposed.
        let mut active: fixed_assets::ActiveModel = asset.into();
        active.disposal_status = Set(DisposalStatus::Disposed);
        active.disposal_date = Set(Some(input.disposal_date));
        active.selling_price = Set(Some(input.selling_price));
        active.accum_depreciation = Set(plan.total_depreciation);
        active.updated_at = Set(now.into());
        let asset = active.update(txn).await?;

        Ok(DisposalOutcome {
            disposal,
            asset,
            plan,
        })
    }
}
