use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::database;
use crate::entity::{favorite_people, favorite_planet, people, planet};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::handlers::user::find_user;
use crate::models::catalog::{PeopleResponse, PlanetResponse};
use crate::models::favorite::{
    FavoriteCreatedResponse, FavoriteRequest, FavoriteResponse, UserFavoritesResponse,
    validate_favorite_request,
};
use crate::models::shared::MessageResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = "Favorites",
    operation_id = "addFavoritePlanet",
    summary = "Mark a planet as a user's favorite",
    description = "Inserts a favorite row without checking for duplicates. A user or planet that does not exist is rejected by the database and reported as PERSISTENCE_ERROR.",
    params(("planet_id" = i32, Path, description = "Planet ID")),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Favorite stored", body = FavoriteCreatedResponse),
        (status = 400, description = "Missing user_id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Insert failed and was rolled back (PERSISTENCE_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(planet_id))]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    AppJson(payload): AppJson<FavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = validate_favorite_request(&payload)?;

    let favorite = favorite_planet::ActiveModel {
        user_id: Set(user_id),
        planet_id: Set(planet_id),
        ..Default::default()
    };

    let txn = state.db.begin().await?;
    let model = match favorite.insert(&txn).await {
        Ok(model) => model,
        Err(e) => {
            let e = database::abort(txn, e).await;
            return Err(AppError::persistence(e));
        }
    };
    txn.commit().await.map_err(AppError::persistence)?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCreatedResponse {
            message: "Planeta guardado exitosamente".into(),
            favorite: FavoriteResponse::from(model),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = "Favorites",
    operation_id = "deleteFavoritePlanet",
    summary = "Remove a planet from a user's favorites",
    description = "Deletes the first favorite row matching the user and planet. Duplicates need one call each.",
    params(("planet_id" = i32, Path, description = "Planet ID")),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 400, description = "Missing or invalid user_id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "No such favorite (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(planet_id))]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    AppJson(payload): AppJson<FavoriteRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = validate_favorite_request(&payload)?;

    let txn = state.db.begin().await?;
    let favorite = favorite_planet::Entity::find()
        .filter(favorite_planet::Column::UserId.eq(user_id))
        .filter(favorite_planet::Column::PlanetId.eq(planet_id))
        .order_by_asc(favorite_planet::Column::Id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound("Planeta favorito no encontrado".into()))?;

    let active: favorite_planet::ActiveModel = favorite.into();
    if let Err(e) = active.delete(&txn).await {
        let e = database::abort(txn, e).await;
        return Err(AppError::persistence(e));
    }
    txn.commit().await.map_err(AppError::persistence)?;

    Ok(Json(MessageResponse::new(
        "Planeta favorito eliminado exitosamente",
    )))
}

#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = "Favorites",
    operation_id = "addFavoritePeople",
    summary = "Mark a character as a user's favorite",
    description = "Inserts a favorite row without checking for duplicates. A user or character that does not exist is rejected by the database and reported as PERSISTENCE_ERROR.",
    params(("people_id" = i32, Path, description = "Character ID")),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Favorite stored", body = FavoriteCreatedResponse),
        (status = 400, description = "Missing user_id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Insert failed and was rolled back (PERSISTENCE_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(people_id))]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    AppJson(payload): AppJson<FavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = validate_favorite_request(&payload)?;

    let favorite = favorite_people::ActiveModel {
        user_id: Set(user_id),
        people_id: Set(people_id),
        ..Default::default()
    };

    let txn = state.db.begin().await?;
    let model = match favorite.insert(&txn).await {
        Ok(model) => model,
        Err(e) => {
            let e = database::abort(txn, e).await;
            return Err(AppError::persistence(e));
        }
    };
    txn.commit().await.map_err(AppError::persistence)?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCreatedResponse {
            message: "Personaje guardado exitosamente".into(),
            favorite: FavoriteResponse::from(model),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = "Favorites",
    operation_id = "deleteFavoritePeople",
    summary = "Remove a character from a user's favorites",
    params(("people_id" = i32, Path, description = "Character ID")),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 400, description = "Missing or invalid user_id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "No such favorite (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(people_id))]
pub async fn delete_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    AppJson(payload): AppJson<FavoriteRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = validate_favorite_request(&payload)?;

    let txn = state.db.begin().await?;
    let favorite = favorite_people::Entity::find()
        .filter(favorite_people::Column::UserId.eq(user_id))
        .filter(favorite_people::Column::PeopleId.eq(people_id))
        .order_by_asc(favorite_people::Column::Id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound("Personaje favorito no encontrado".into()))?;

    let active: favorite_people::ActiveModel = favorite.into();
    if let Err(e) = active.delete(&txn).await {
        let e = database::abort(txn, e).await;
        return Err(AppError::persistence(e));
    }
    txn.commit().await.map_err(AppError::persistence)?;

    Ok(Json(MessageResponse::new(
        "Personaje favorito eliminado exitosamente",
    )))
}

#[utoipa::path(
    get,
    path = "/user/{id}/favorites",
    tag = "Favorites",
    operation_id = "listUserFavorites",
    summary = "List a user's favorite planets and characters",
    description = "One entry per favorite row, in insertion order. A duplicated favorite appears twice.",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's favorites", body = UserFavoritesResponse),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(user_id))]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserFavoritesResponse>, AppError> {
    find_user(&state.db, user_id).await?;

    let planets = favorite_planet::Entity::find()
        .filter(favorite_planet::Column::UserId.eq(user_id))
        .order_by_asc(favorite_planet::Column::Id)
        .find_also_related(planet::Entity)
        .all(&state.db)
        .await?
        .into_iter()
        .filter_map(|(_, related)| related.map(PlanetResponse::from))
        .collect();

    let people = favorite_people::Entity::find()
        .filter(favorite_people::Column::UserId.eq(user_id))
        .order_by_asc(favorite_people::Column::Id)
        .find_also_related(people::Entity)
        .all(&state.db)
        .await?
        .into_iter()
        .filter_map(|(_, related)| related.map(PeopleResponse::from))
        .collect();

    Ok(Json(UserFavoritesResponse {
        user_id,
        planets,
        people,
    }))
}
