//! `SeaORM` Entity for the coa_template_lines table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::AccountType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "coa_template_lines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub template_id: Uuid,
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::coa_templates::Entity",
        from = "Column::TemplateId",
        to = "super::coa_templates::Column::Id"
    )]
    CoaTemplates,
}

impl Related<super::coa_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoaTemplates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
