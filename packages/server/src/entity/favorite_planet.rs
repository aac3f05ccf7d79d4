use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// No unique index on (user_id, planet_id): the same planet may be favorited twice.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorite_planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub planet_id: i32,
    #[sea_orm(belongs_to, from = "planet_id", to = "id")]
    pub planet: HasOne<super::planet::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
