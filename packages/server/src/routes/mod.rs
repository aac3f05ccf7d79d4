use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

/// Every endpoint, mounted at the root to keep the historical paths.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(user_routes())
        .merge(catalog_routes())
        .merge(favorite_routes())
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::user::list_users))
        .routes(routes!(handlers::user::create_user))
        .routes(routes!(handlers::user::get_user))
}

fn catalog_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::people::list_people))
        .routes(routes!(handlers::people::get_people))
        .routes(routes!(handlers::planet::list_planets))
        .routes(routes!(handlers::planet::get_planet))
}

fn favorite_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::favorite::add_favorite_planet,
            handlers::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            handlers::favorite::add_favorite_people,
            handlers::favorite::delete_favorite_people
        ))
        .routes(routes!(handlers::favorite::list_user_favorites))
}
