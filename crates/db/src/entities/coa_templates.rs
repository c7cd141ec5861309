//! `SeaORM` Entity for the coa_templates table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::OwnershipForm;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "coa_templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ownership_form: OwnershipForm,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::coa_template_lines::Entity")]
    CoaTemplateLines,
}

impl Related<super::coa_template_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoaTemplateLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
