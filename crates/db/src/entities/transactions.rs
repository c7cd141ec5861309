//! `SeaORM` Entity for the transactions table.
//!
//! A transaction is the immutable record of a business event; journal
//! entries link back to the transaction they were posted for.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::TransactionKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub entity_id: Uuid,
    pub txn_type: TransactionKind,
    pub amount: Decimal,
    pub txn_date: Date,
    pub description: String,
    pub apply_vat: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business_entities::Entity",
        from = "Column::EntityId",
        to = "super::business_entities::Column::Id"
    )]
    BusinessEntities,
    #[sea_orm(has_many = "super::journal_entries::Entity")]
    JournalEntries,
}

impl Related<super::business_entities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessEntities.def()
    }
}

impl Related<super::journal_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JournalEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
