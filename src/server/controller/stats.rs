use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        stats::{MatchStatsDto, PlayerStatsDto, TeamStatsDto},
    },
    server::{
        controller::{util::get_user::get_user_id_from_session, STATS_TAG},
        error::Error,
        model::app::AppState,
        service::{roster::DbRosterGate, stats::StatsService},
    },
};

/// Get composition and event counts for a match
///
/// `possession` and `shots` are not tracked and always 0.
#[utoipa::path(
    get,
    path = "/api/matches/{id}/stats",
    tag = STATS_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match statistics", body = MatchStatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match_stats(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let stats = StatsService::new(&state.db, &gate)
        .match_stats(user_id, match_id)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Get a player's totals across every match they were selected for
#[utoipa::path(
    get,
    path = "/api/players/{id}/stats",
    tag = STATS_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Player statistics", body = PlayerStatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Player belongs to another user's team", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_stats(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let stats = StatsService::new(&state.db, &gate)
        .player_stats(user_id, player_id)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Get a team's results and scoring record
#[utoipa::path(
    get,
    path = "/api/teams/{id}/stats",
    tag = STATS_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team statistics", body = TeamStatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Team belongs to another user", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_stats(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let stats = StatsService::new(&state.db, &gate)
        .team_stats(user_id, team_id)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
