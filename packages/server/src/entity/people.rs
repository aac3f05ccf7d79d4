use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A character from the catalog.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(has_many)]
    pub favorites: HasMany<super::favorite_people::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
