//! Entity setup: business entity, tax configuration, and chart seeding.
//!
//! Runs once per entity at creation. The chart comes from the bootstrap
//! migration's template rows; a missing template is a deployment-integrity
//! error, not an occasion to fall back to defaults.

use chrono::Utc;
use grootboek_core::coa::OwnershipForm;
use grootboek_core::tax;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::{
    accounts, business_entities, coa_template_lines, coa_templates, sea_orm_active_enums,
    tax_configs,
};

/// Error types for entity setup.
#[derive(Debug, thiserror::Error)]
pub enum EntitySetupError {
    /// No chart template is seeded for the ownership form.
    #[error("No chart-of-accounts template for ownership form '{0}'")]
    TemplateNotFound(OwnershipForm),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a new business entity.
#[derive(Debug, Clone)]
pub struct SetupEntityInput {
    /// Entity display name.
    pub name: String,
    /// Legal ownership form; selects the chart template.
    pub ownership_form: OwnershipForm,
    /// Optional postal address.
    pub address: Option<String>,
    /// Optional fiscal year start month (1-12).
    pub fiscal_year_start_month: Option<i16>,
}

/// Result of entity setup.
#[derive(Debug)]
pub struct EntitySetup {
    /// The created entity.
    pub entity: business_entities::Model,
    /// The created tax configuration (default VAT rate).
    pub tax_config: tax_configs::Model,
    /// The seeded chart, ordered by code.
    pub accounts: Vec<accounts::Model>,
}

/// Entity repository for setup and lookups.
#[derive(Debug, Clone)]
pub struct EntityRepository {
    db: DatabaseConnection,
}

impl EntityRepository {
    /// Creates a new entity repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an entity by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_id(
        &self,
        entity_id: Uuid,
    ) -> Result<Option<business_entities::Model>, DbErr> {
        business_entities::Entity::find_by_id(entity_id)
            .one(&self.db)
            .await
    }

    /// Creates an entity with its tax config and starter chart, atomically.
    ///
    /// The `(entity_id, code)` unique constraint makes accidental re-seeding
    /// fail loudly instead of duplicating accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the ownership form has no seeded template or a
    /// write fails; nothing is created in that case.
    pub async fn setup(&self, input: SetupEntityInput) -> Result<EntitySetup, EntitySetupError> {
        let template = coa_templates::Entity::find()
            .filter(
                coa_templates::Column::OwnershipForm
                    .eq(sea_orm_active_enums::OwnershipForm::from(input.ownership_form)),
            )
            .one(&self.db)
            .await?
            .ok_or(EntitySetupError::TemplateNotFound(input.ownership_form))?;

        let lines = coa_template_lines::Entity::find()
            .filter(coa_template_lines::Column::TemplateId.eq(template.id))
            .order_by_asc(coa_template_lines::Column::Position)
            .all(&self.db)
            .await?;

        if lines.is_empty() {
            return Err(EntitySetupError::TemplateNotFound(input.ownership_form));
        }

        let txn = self.db.begin().await?;
        let now = Utc::now();
        let entity_id = Uuid::now_v7();

        let entity = business_entities::ActiveModel {
            id: Set(entity_id),
            name: Set(input.name),
            ownership_form: Set(sea_orm_active_enums::OwnershipForm::from(
                input.ownership_form,
            )),
            address: Set(input.address),
            fiscal_year_start_month: Set(input.fiscal_year_start_month),
            is_active: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&txn)
        .await?;

        let tax_config = tax_configs::ActiveModel {
            id: Set(Uuid::now_v7()),
            entity_id: Set(entity_id),
            vat_rate: Set(tax::default_vat_rate()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&txn)
        .await?;

        let mut seeded = Vec::with_capacity(lines.len());
        for template_line in lines {
            let account = accounts::ActiveModel {
                id: Set(Uuid::now_v7()),
                entity_id: Set(entity_id),
                code: Set(template_line.code),
                name: Set(template_line.name),
                account_type: Set(template_line.account_type),
                balance: Set(Decimal::ZERO),
                is_protected: Set(true),
                is_active: Set(true),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            }
            .insert(&txn)
            .await?;
            seeded.push(account);
        }

        txn.commit().await?;

        info!(
            entity_id = %entity.id,
            ownership_form = %input.ownership_form,
            accounts = seeded.len(),
            "Entity chart seeded"
        );

        Ok(EntitySetup {
            entity,
            tax_config,
            accounts: seeded,
        })
    }
}
