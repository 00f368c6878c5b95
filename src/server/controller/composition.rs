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
        matches::{CompositionDto, MatchDetailDto},
    },
    server::{
        controller::{
            util::{get_user::get_user_id_from_session, json::ApiJson},
            MATCH_TAG,
        },
        error::Error,
        model::app::AppState,
        service::{composition::CompositionService, roster::DbRosterGate},
    },
};

/// Replace the starters and substitutes of a scheduled match
///
/// Requires exactly 11 starters and at most 7 substitutes, all from the match's team.
#[utoipa::path(
    post,
    path = "/api/matches/{id}/composition",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = CompositionDto,
    responses(
        (status = 200, description = "Match with the new composition", body = MatchDetailDto),
        (status = 400, description = "Invalid squad or match already kicked off", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Match belongs to another user", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_composition(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    ApiJson(payload): ApiJson<CompositionDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let gate = DbRosterGate::new(&state.db);
    let view = CompositionService::new(&state.db, &gate)
        .set_composition(user_id, match_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(view)))
}
