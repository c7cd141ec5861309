//! `SeaORM` Entity for the fixed_assets table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::DisposalStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "fixed_assets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub entity_id: Uuid,
    pub name: String,
    pub cost_price: Decimal,
    pub depreciation_rate: Decimal,
    pub purchase_date: Date,
    pub accum_depreciation: Decimal,
    pub disposal_status: DisposalStatus,
    pub disposal_date: Option<Date>,
    pub selling_price: Option<Decimal>,
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
    #[sea_orm(has_many = "super::disposals::Entity")]
    Disposals,
}

impl Related<super::business_entities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessEntities.def()
    }
}

impl Related<super::disposals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Disposals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
