use axum::Json;
use axum::extract::{Path, State};
use sea_orm::*;
use tracing::instrument;

use crate::catalog::populate;
use crate::entity::people;
use crate::error::{AppError, ErrorBody};
use crate::models::catalog::PeopleResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/all-people",
    tag = "People",
    operation_id = "listPeople",
    summary = "List every character",
    description = "When the table is empty, the first catalog page is fetched and stored before listing. Later calls read the table only.",
    responses(
        (status = 200, description = "All characters", body = Vec<PeopleResponse>),
        (status = 500, description = "Insert failed and was rolled back (PERSISTENCE_ERROR)", body = ErrorBody),
        (status = 502, description = "Catalog unreachable or malformed (UPSTREAM_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<PeopleResponse>>, AppError> {
    populate::ensure_people(&state.db, &state.catalog).await?;

    let rows = people::Entity::find()
        .order_by_asc(people::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(rows.into_iter().map(PeopleResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "People",
    operation_id = "getPeople",
    summary = "Get a character by ID",
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character details", body = PeopleResponse),
        (status = 404, description = "Character not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_people(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PeopleResponse>, AppError> {
    let model = people::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Personaje no encontrado".into()))?;

    Ok(Json(model.into()))
}
