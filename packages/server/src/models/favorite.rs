use serde::{Deserialize, Serialize};

use crate::entity::{favorite_people, favorite_planet};
use crate::error::AppError;
use crate::models::catalog::{PeopleResponse, PlanetResponse};

/// Body of the add and remove favorite endpoints.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct FavoriteRequest {
    /// Owner of the favorite.
    #[schema(example = 1)]
    pub user_id: Option<i32>,
}

/// Return the positive `user_id` of a favorite request.
pub fn validate_favorite_request(payload: &FavoriteRequest) -> Result<i32, AppError> {
    match payload.user_id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(AppError::Validation("El user_id es inválido".into())),
    }
}

/// A stored favorite link. `entity_id` is the planet or person id.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FavoriteResponse {
    #[schema(example = 5)]
    pub id: i32,
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = 2)]
    pub entity_id: i32,
}

impl From<favorite_planet::Model> for FavoriteResponse {
    fn from(m: favorite_planet::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            entity_id: m.planet_id,
        }
    }
}

impl From<favorite_people::Model> for FavoriteResponse {
    fn from(m: favorite_people::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            entity_id: m.people_id,
        }
    }
}

/// Response of a successful add.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FavoriteCreatedResponse {
    #[schema(example = "Planeta guardado exitosamente")]
    pub message: String,
    pub favorite: FavoriteResponse,
}

/// Every planet and person a user has favorited, one entry per favorite row.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserFavoritesResponse {
    #[schema(example = 1)]
    pub user_id: i32,
    pub planets: Vec<PlanetResponse>,
    pub people: Vec<PeopleResponse>,
}
