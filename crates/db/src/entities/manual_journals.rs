//! `SeaORM` Entity for the manual_journals table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ManualJournalStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "manual_journals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub entity_id: Uuid,
    pub journal_date: Date,
    pub description: String,
    pub status: ManualJournalStatus,
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
    #[sea_orm(has_many = "super::manual_journal_lines::Entity")]
    ManualJournalLines,
}

impl Related<super::business_entities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessEntities.def()
    }
}

impl Related<super::manual_journal_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ManualJournalLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
