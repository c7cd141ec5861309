//! Transaction-type mapping lookups.
//!
//! The mapping table is global business-rule configuration seeded by the
//! bootstrap migration; at transaction time it is read-only.

use grootboek_core::mapping::TransactionKind;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::entities::{sea_orm_active_enums, transaction_type_mappings};

/// Error types for mapping lookups.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// No mapping row exists for the kind. The bootstrap migration has
    /// not run; this is a deployment-integrity problem.
    #[error("No mapping configured for transaction type '{0}'")]
    NotFound(TransactionKind),

    /// The mapping row exists but has been deactivated.
    #[error("Mapping for transaction type '{0}' is inactive")]
    Inactive(TransactionKind),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Finds the active mapping row for a transaction kind.
///
/// # Errors
///
/// Returns an error if the row is absent or deactivated; both abort the
/// enclosing operation before anything is posted.
pub async fn find_active<C: ConnectionTrait>(
    conn: &C,
    kind: TransactionKind,
) -> Result<transaction_type_mappings::Model, MappingError> {
    let db_kind = sea_orm_active_enums::TransactionKind::from(kind);

    let mapping = transaction_type_mappings::Entity::find()
        .filter(transaction_type_mappings::Column::TxnType.eq(db_kind))
        .one(conn)
        .await?
        .ok_or(MappingError::NotFound(kind))?;

    if !mapping.is_active {
        return Err(MappingError::Inactive(kind));
    }

    Ok(mapping)
}
