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
        matches::{
            AddAssistDto, AddCardDto, AddGoalDto, AddSubstitutionDto, AssistDto, CardDto, GoalDto,
            SubstitutionDto,
        },
    },
    server::{
        controller::{
            util::{get_user::get_user_id_from_session, json::ApiJson},
            EVENT_TAG,
        },
        error::Error,
        model::app::AppState,
        service::{ledger::LedgerService, roster::DbRosterGate},
    },
};

/// Record a goal in a live match
///
/// Increments our score unless `isOwnGoal` is set.
#[utoipa::path(
    post,
    path = "/api/matches/{id}/goal",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = AddGoalDto,
    responses(
        (status = 201, description = "Goal recorded", body = GoalDto),
        (status = 400, description = "Malformed body, match not in progress or player not in match", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_goal(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    ApiJson(payload): ApiJson<AddGoalDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let goal = LedgerService::new(&state.db, &gate)
        .add_goal(user_id, match_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(goal)))
}

/// Record an assist in a live match
#[utoipa::path(
    post,
    path = "/api/matches/{id}/assist",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = AddAssistDto,
    responses(
        (status = 201, description = "Assist recorded", body = AssistDto),
        (status = 400, description = "Malformed body, match not in progress or player not in match", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_assist(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    ApiJson(payload): ApiJson<AddAssistDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let assist = LedgerService::new(&state.db, &gate)
        .add_assist(user_id, match_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(assist)))
}

/// Record a yellow or red card in a live match
#[utoipa::path(
    post,
    path = "/api/matches/{id}/card",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = AddCardDto,
    responses(
        (status = 201, description = "Card recorded", body = CardDto),
        (status = 400, description = "Malformed body, match not in progress or player not in match", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_card(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    ApiJson(payload): ApiJson<AddCardDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let card = LedgerService::new(&state.db, &gate)
        .add_card(user_id, match_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// Bring a substitute on for a player in a live match
#[utoipa::path(
    post,
    path = "/api/matches/{id}/substitution",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = AddSubstitutionDto,
    responses(
        (status = 201, description = "Substitution recorded", body = SubstitutionDto),
        (status = 400, description = "Malformed body, match not in progress or invalid players", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_substitution(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    ApiJson(payload): ApiJson<AddSubstitutionDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let substitution = LedgerService::new(&state.db, &gate)
        .add_substitution(user_id, match_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(substitution)))
}
