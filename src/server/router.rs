//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/matches` / `GET /api/matches?teamId=` - Create and list matches
/// - `GET | PATCH | DELETE /api/matches/{id}` - Full match view, correction, deletion
/// - `POST /api/matches/{id}/composition` - Replace starters and substitutes
/// - `POST /api/matches/{id}/start` / `POST /api/matches/{id}/end` - Lifecycle transitions
/// - `POST /api/matches/{id}/{goal,assist,card,substitution}` - Record match events
/// - `GET /api/matches/{id}/stats`, `/api/players/{id}/stats`, `/api/teams/{id}/stats`
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Touchline", description = "Touchline match API"), tags(
        (name = controller::MATCH_TAG, description = "Match, composition and lifecycle routes"),
        (name = controller::EVENT_TAG, description = "Live match event routes"),
        (name = controller::STATS_TAG, description = "Match, player and team statistics"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::matches::create_match,
            controller::matches::list_matches
        ))
        .routes(routes!(
            controller::matches::get_match,
            controller::matches::update_match,
            controller::matches::delete_match
        ))
        .routes(routes!(controller::composition::set_composition))
        .routes(routes!(controller::lifecycle::start_match))
        .routes(routes!(controller::lifecycle::end_match))
        .routes(routes!(controller::event::add_goal))
        .routes(routes!(controller::event::add_assist))
        .routes(routes!(controller::event::add_card))
        .routes(routes!(controller::event::add_substitution))
        .routes(routes!(controller::stats::get_match_stats))
        .routes(routes!(controller::stats::get_player_stats))
        .routes(routes!(controller::stats::get_team_stats))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
