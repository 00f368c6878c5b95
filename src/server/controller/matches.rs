use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        matches::{CreateMatchDto, MatchDetailDto, MatchDto, MatchListParams, UpdateMatchDto},
    },
    server::{
        controller::{
            util::{get_user::get_user_id_from_session, json::ApiJson},
            MATCH_TAG,
        },
        error::Error,
        model::app::AppState,
        service::{matches::MatchService, roster::DbRosterGate},
    },
};

/// Create a match for a team owned by the logged in user
///
/// The match starts out SCHEDULED with a 0-0 score and no composition.
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Match created", body = MatchDto),
        (status = 400, description = "Invalid match fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Team belongs to another user", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<CreateMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let created = MatchService::new(&state.db, &gate)
        .create(user_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// List a team's matches, most recent first
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    params(MatchListParams),
    responses(
        (status = 200, description = "Matches of the team", body = Vec<MatchDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Team belongs to another user", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_matches(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MatchListParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let matches = MatchService::new(&state.db, &gate)
        .list(user_id, params.team_id)
        .await?;

    Ok((StatusCode::OK, Json(matches)))
}

/// Get a match with its composition and every recorded event
#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Full match view", body = MatchDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let view = MatchService::new(&state.db, &gate)
        .get(user_id, match_id)
        .await?;

    Ok((StatusCode::OK, Json(view)))
}

/// Correct match fields directly
///
/// Status and score changes made here bypass the start/end transitions and event recording.
#[utoipa::path(
    patch,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Match updated", body = MatchDto),
        (status = 400, description = "Invalid match fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let updated = MatchService::new(&state.db, &gate)
        .update(user_id, match_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Delete a match together with its composition and events
#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Deleted match", body = MatchDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let deleted = MatchService::new(&state.db, &gate)
        .delete(user_id, match_id)
        .await?;

    Ok((StatusCode::OK, Json(deleted)))
}
