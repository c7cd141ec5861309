//! Account directory: lookups by (entity, code) and chart listing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::accounts;

/// Error types for account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// A mapping referenced a code this entity's chart never seeded.
    /// This is seed/config drift, never silently defaulted.
    #[error("Account code '{code}' is not seeded for entity {entity_id}")]
    CodeNotSeeded {
        /// The entity whose chart was searched.
        entity_id: Uuid,
        /// The missing code.
        code: String,
    },

    /// Account not found by id.
    #[error("Account not found: {0}")]
    NotFound(Uuid),

    /// Seeded accounts cannot be deactivated.
    #[error("Account {0} is protected and cannot be deactivated")]
    Protected(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Finds an active account by its code within an entity's chart.
///
/// # Errors
///
/// Returns `CodeNotSeeded` if no active account carries the code; the
/// caller must abort its operation.
pub async fn require_by_code<C: ConnectionTrait>(
    conn: &C,
    entity_id: Uuid,
    code: &str,
) -> Result<accounts::Model, AccountError> {
    accounts::Entity::find()
        .filter(accounts::Column::EntityId.eq(entity_id))
        .filter(accounts::Column::Code.eq(code))
        .filter(accounts::Column::IsActive.eq(true))
        .one(conn)
        .await?
        .ok_or_else(|| AccountError::CodeNotSeeded {
            entity_id,
            code: code.to_string(),
        })
}

/// Resolves the debit/credit account pair a mapping refers to.
///
/// # Errors
///
/// Fails with `CodeNotSeeded` if either side is absent.
pub async fn resolve_pair<C: ConnectionTrait>(
    conn: &C,
    entity_id: Uuid,
    debit_code: &str,
    credit_code: &str,
) -> Result<(accounts::Model, accounts::Model), AccountError> {
    let debit = require_by_code(conn, entity_id, debit_code).await?;
    let credit = require_by_code(conn, entity_id, credit_code).await?;
    Ok((debit, credit))
}

/// Account repository for chart queries and maintenance.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists an entity's chart of accounts ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_entity(&self, entity_id: Uuid) -> Result<Vec<accounts::Model>, DbErr> {
        accounts::Entity::find()
            .filter(accounts::Column::EntityId.eq(entity_id))
            .order_by_asc(accounts::Column::Code)
            .all(&self.db)
            .await
    }

    /// Soft-deactivates a non-protected account.
    ///
    /// Accounts are never physically deleted; seeded (protected) codes
    /// cannot be deactivated at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is missing or protected.
    pub async fn deactivate(
        &self,
        entity_id: Uuid,
        account_id: Uuid,
    ) -> Result<accounts::Model, AccountError> {
        let account = accounts::Entity::find_by_id(account_id)
            .filter(accounts::Column::EntityId.eq(entity_id))
            .one(&self.db)
            .await?
            .ok_or(AccountError::NotFound(account_id))?;

        if account.is_protected {
            return Err(AccountError::Protected(account_id));
        }

        let mut active: accounts::ActiveModel = account.into();
        active.is_active = Set(false);
        active.updated_at = Set(Utc::now().into());

        Ok(active.update(&self.db).await?)
    }
}
