//! `SeaORM` Entity for the tax_configs table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tax_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub entity_id: Uuid,
    pub vat_rate: Decimal,
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
}

impl Related<super::business_entities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessEntities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
