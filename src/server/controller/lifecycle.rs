use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, matches::MatchDetailDto},
    server::{
        controller::{util::get_user::get_user_id_from_session, MATCH_TAG},
        error::Error,
        model::app::AppState,
        service::{lifecycle::LifecycleService, roster::DbRosterGate},
    },
};

/// Kick off a scheduled match
#[utoipa::path(
    post,
    path = "/api/matches/{id}/start",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match is live", body = MatchDetailDto),
        (status = 400, description = "Match is not scheduled or composition incomplete", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let view = LifecycleService::new(&state.db, &gate)
        .start_match(user_id, match_id)
        .await?;

    Ok((StatusCode::OK, Json(view)))
}

/// Blow the final whistle on a live match
#[utoipa::path(
    post,
    path = "/api/matches/{id}/end",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match is finished", body = MatchDetailDto),
        (status = 400, description = "Match is not in progress", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let view = LifecycleService::new(&state.db, &gate)
        .end_match(user_id, match_id)
        .await?;

    Ok((StatusCode::OK, Json(view)))
}
