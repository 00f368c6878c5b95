use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{Duration, Utc};
use touchline::{
    model::matches::{CreateMatchDto, MatchListParams, MatchLocation, UpdateMatchDto},
    server::{
        controller::matches::{create_match, delete_match, get_match, list_matches, update_match},
        model::app::AppState,
    },
};

use super::*;

fn new_match(team_id: i32, opponent: &str) -> CreateMatchDto {
    CreateMatchDto {
        opponent: opponent.to_string(),
        date: Utc::now().naive_utc() + Duration::days(3),
        location: MatchLocation::Home,
        team_id,
    }
}

/// Expect 201 with a SCHEDULED 0-0 match
#[tokio::test]
async fn create_returns_created_scheduled_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, _) = owned_team(&test, 0).await?;

    let response = respond(
        create_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            ApiJson(new_match(team.id, constant::TEST_OPPONENT)),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["status"], "SCHEDULED");
    assert_eq!(body["location"], "HOME");
    assert_eq!(body["ourScore"], 0);
    assert_eq!(body["opponentScore"], 0);
    assert_eq!(body["opponent"], constant::TEST_OPPONENT);

    Ok(())
}

/// Expect 401 when no user is stored in the session
#[tokio::test]
async fn create_without_session_user_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().with_match_tables().build().await?;
    let (team, _) = owned_team(&test, 0).await?;

    let response = respond(
        create_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            ApiJson(new_match(team.id, constant::TEST_OPPONENT)),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 for an empty opponent name
#[tokio::test]
async fn create_with_empty_opponent_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, _) = owned_team(&test, 0).await?;

    let response = respond(
        create_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            ApiJson(new_match(team.id, "")),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 when creating a match for another user's team
#[tokio::test]
async fn create_for_foreign_team_is_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OTHER_USER_ID)
        .build()
        .await?;
    let (team, _) = owned_team(&test, 0).await?;

    let response = respond(
        create_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            ApiJson(new_match(team.id, constant::TEST_OPPONENT)),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 for a match that does not exist
#[tokio::test]
async fn get_missing_match_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;

    let response = respond(
        get_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(404),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Match not found");

    Ok(())
}

/// Expect the full view with the composition ordered by shirt number
#[tokio::test]
async fn get_returns_match_view() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 13).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;
    test.matches()
        .insert_mock_composition(football_match.id, &players[..11], &players[11..])
        .await?;

    let response = respond(
        get_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], football_match.id);
    let rows = body["players"].as_array().unwrap();
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0]["player"]["number"], 1);
    assert_eq!(rows[12]["player"]["number"], 13);
    assert_eq!(rows[12]["isStarter"], false);
    assert!(body["goals"].as_array().unwrap().is_empty());

    Ok(())
}

/// Expect only the requested team's matches
#[tokio::test]
async fn list_returns_team_matches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, _) = owned_team(&test, 0).await?;
    let other_team = test.team().insert_mock_team(constant::TEST_OWNER_USER_ID).await?;
    test.matches().insert_mock_match(team.id).await?;
    test.matches().insert_finished_match(team.id, 2, 1).await?;
    test.matches().insert_mock_match(other_team.id).await?;

    let response = respond(
        list_matches(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Query(MatchListParams { team_id: team.id }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m["teamId"] == team.id));

    Ok(())
}

/// Expect 403 when listing another user's team
#[tokio::test]
async fn list_for_foreign_team_is_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OTHER_USER_ID)
        .build()
        .await?;
    let (team, _) = owned_team(&test, 0).await?;

    let response = respond(
        list_matches(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Query(MatchListParams { team_id: team.id }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect a partial update to change only the provided fields
#[tokio::test]
async fn update_changes_provided_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, _) = owned_team(&test, 0).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;

    let response = respond(
        update_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(UpdateMatchDto {
                opponent: Some("Athletic Club".to_string()),
                location: Some(MatchLocation::Away),
                ..Default::default()
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["opponent"], "Athletic Club");
    assert_eq!(body["location"], "AWAY");
    assert_eq!(body["status"], "SCHEDULED");

    Ok(())
}

/// Expect 400 for a negative score correction
#[tokio::test]
async fn update_with_negative_score_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, _) = owned_team(&test, 0).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;

    let response = respond(
        update_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(UpdateMatchDto {
                our_score: Some(-1),
                ..Default::default()
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the deleted match to be returned and no longer retrievable
#[tokio::test]
async fn delete_removes_match() -> Result<(), TestError> {
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
        delete_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], football_match.id);

    let response = respond(
        get_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 403 when deleting another user's match
#[tokio::test]
async fn delete_foreign_match_is_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OTHER_USER_ID)
        .build()
        .await?;
    let (team, _) = owned_team(&test, 0).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;

    let response = respond(
        delete_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
