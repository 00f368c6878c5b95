//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built from a `TestContext`, then the
//! response status and JSON body are inspected.

mod composition;
mod event;
mod lifecycle;
mod matches;
mod scenario;

use axum::response::{IntoResponse, Response};
use serde_json::Value;
use touchline::server::controller::util::json::ApiJson;
use touchline_test_utils::{model::PlayerModel, prelude::*};

/// Converts a handler result into a response the same way axum would
fn respond<T, E>(result: Result<T, E>) -> Response
where
    T: IntoResponse,
    E: IntoResponse,
{
    result.into_response()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Owner's team with `squad` players, numbered from 1
async fn owned_team(
    test: &TestContext,
    squad: usize,
) -> Result<(touchline_test_utils::model::TeamModel, Vec<PlayerModel>), TestError> {
    test.team()
        .insert_mock_team_with_players(constant::TEST_OWNER_USER_ID, squad)
        .await
}
