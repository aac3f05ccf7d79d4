use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub username: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Stored as received. There is no login flow reading it back.
    pub password: String,

    #[sea_orm(has_many)]
    pub favorite_planets: HasMany<super::favorite_planet::Entity>,
    #[sea_orm(has_many)]
    pub favorite_people: HasMany<super::favorite_people::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
