use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::sea_orm_active_enums::MatchStatus;
use touchline::{
    model::matches::{CompositionDto, Position, StarterDto, SubstituteDto},
    server::{controller::composition::set_composition, model::app::AppState},
};

use super::*;

fn composition(starters: &[PlayerModel], substitutes: &[PlayerModel]) -> CompositionDto {
    CompositionDto {
        starters: starters
            .iter()
            .map(|p| StarterDto {
                player_id: p.id,
                position: if p.number == 1 {
                    Position::Goalkeeper
                } else {
                    Position::Midfielder
                },
            })
            .collect(),
        substitutes: substitutes
            .iter()
            .map(|p| SubstituteDto { player_id: p.id })
            .collect(),
    }
}

/// Expect 200 with 11 starters and the bench marked as SUBSTITUTE
#[tokio::test]
async fn sets_full_composition() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 15).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;

    let response = respond(
        set_composition(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(composition(&players[..11], &players[11..])),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body["players"].as_array().unwrap();
    assert_eq!(rows.len(), 15);
    assert_eq!(rows.iter().filter(|r| r["isStarter"] == true).count(), 11);
    assert!(rows
        .iter()
        .filter(|r| r["isStarter"] == false)
        .all(|r| r["position"] == "SUBSTITUTE"));

    Ok(())
}

/// Expect 400 when fewer than 11 starters are provided
#[tokio::test]
async fn ten_starters_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 11).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;

    let response = respond(
        set_composition(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(composition(&players[..10], &[])),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when a player from another team is selected
#[tokio::test]
async fn foreign_player_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 11).await?;
    let (_, outsiders) = test
        .team()
        .insert_mock_team_with_players(constant::TEST_OTHER_USER_ID, 1)
        .await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;

    let response = respond(
        set_composition(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(composition(&players, &outsiders)),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 once the match has kicked off
#[tokio::test]
async fn live_match_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 11).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;
    test.matches()
        .set_status(football_match.clone(), MatchStatus::Live)
        .await?;

    let response = respond(
        set_composition(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(composition(&players, &[])),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 for another user's match
#[tokio::test]
async fn foreign_match_is_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OTHER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 11).await?;
    let football_match = test.matches().insert_mock_match(team.id).await?;

    let response = respond(
        set_composition(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(composition(&players, &[])),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
