//! `SeaORM` Entity for the accounts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::AccountType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub entity_id: Uuid,
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    pub balance: Decimal,
    pub is_protected: bool,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business_entities::Entity",
        from = "Column::EntityId",
        to = "super::business_entities::Column::Id"
    )]
    BusinessEntities,
    #[sea_orm(has_many = "super::ledger_postings::Entity")]
    LedgerPostings,
}

impl Related<super::business_entities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessEntities.def()
    }
}

impl Related<super::ledger_postings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LedgerPostings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
