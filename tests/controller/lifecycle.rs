use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use touchline::server::{
    controller::lifecycle::{end_match, start_match},
    model::app::AppState,
};

use super::*;

/// Expect 200 with the match LIVE and a start time recorded
#[tokio::test]
async fn start_with_full_composition() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 11).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;
    test.matches()
        .insert_mock_composition(football_match.id, &players, &[])
        .await?;

    let response = respond(
        start_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "LIVE");
    assert!(!body["startTime"].is_null());
    assert!(body["endTime"].is_null());

    Ok(())
}

/// Expect 400 when the composition has fewer than 11 starters
#[tokio::test]
async fn start_with_incomplete_composition_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 10).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;
    test.matches()
        .insert_mock_composition(football_match.id, &players, &[])
        .await?;

    let response = respond(
        start_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when ending a match that never started
#[tokio::test]
async fn end_scheduled_match_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, _) = owned_team(&test, 0).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;

    let response = respond(
        end_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 with the match FINISHED and an end time recorded
#[tokio::test]
async fn end_live_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 11).await?;
    let football_match = test
        .matches()
        .insert_live_match_with_squad(team.id, &players)
        .await?;

    let response = respond(
        end_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "FINISHED");
    assert!(!body["endTime"].is_null());

    Ok(())
}

/// Expect 404 when starting a match that does not exist
#[tokio::test]
async fn start_missing_match_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;

    let response = respond(
        start_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(1),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
