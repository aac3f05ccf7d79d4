use axum::Json;
use axum::extract::{Path, State};
use sea_orm::*;
use tracing::instrument;

use crate::catalog::populate;
use crate::entity::planet;
use crate::error::{AppError, ErrorBody};
use crate::models::catalog::PlanetResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/all-planets",
    tag = "Planets",
    operation_id = "listPlanets",
    summary = "List every planet",
    description = "When the table is empty, the first catalog page is fetched and stored before listing. Later calls read the table only.",
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetResponse>),
        (status = 500, description = "Insert failed and was rolled back (PERSISTENCE_ERROR)", body = ErrorBody),
        (status = 502, description = "Catalog unreachable or malformed (UPSTREAM_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, AppError> {
    populate::ensure_planets(&state.db, &state.catalog).await?;

    let rows = planet::Entity::find()
        .order_by_asc(planet::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(rows.into_iter().map(PlanetResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = "Planets",
    operation_id = "getPlanet",
    summary = "Get a planet by ID",
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet details", body = PlanetResponse),
        (status = 404, description = "Planet not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PlanetResponse>, AppError> {
    let model = planet::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Elemento planeta no encontrado".into()))?;

    Ok(Json(model.into()))
}
