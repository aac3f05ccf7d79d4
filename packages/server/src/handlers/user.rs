use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::database;
use crate::entity::user;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::user::{CreateUserRequest, UserResponse, validate_create_user};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/all-user",
    tag = "Users",
    operation_id = "listUsers",
    summary = "List every user",
    responses(
        (status = 200, description = "All users, without passwords", body = Vec<UserResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    operation_id = "createUser",
    summary = "Create a user",
    description = "Requires `username`, `name`, `email` and `password`. The first missing field is reported as `Se debe enviar correctamente el <field>`. The email must be unique.",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing field (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Email already registered (CONFLICT)", body = ErrorBody),
        (status = 500, description = "Insert failed (PERSISTENCE_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_user = validate_create_user(&payload)?;

    let model = user::ActiveModel {
        username: Set(new_user.username),
        name: Set(new_user.name),
        email: Set(new_user.email),
        password: Set(new_user.password),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let txn = state.db.begin().await?;
    let user = match model.insert(&txn).await {
        Ok(user) => user,
        Err(e) => {
            let e = database::abort(txn, e).await;
            return Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("El email ya está registrado".into())
                }
                _ => AppError::persistence(e),
            });
        }
    };
    txn.commit().await.map_err(AppError::persistence)?;

    tracing::info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    operation_id = "getUser",
    summary = "Get a user by ID",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let model = find_user(&state.db, id).await?;
    Ok(Json(model.into()))
}

pub(crate) async fn find_user<C: ConnectionTrait>(db: &C, id: i32) -> Result<user::Model, AppError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".into()))
}
