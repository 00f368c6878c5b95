//! A full match day driven through the HTTP handlers in order.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{Duration, Utc};
use touchline::{
    model::matches::{
        AddCardDto, AddGoalDto, CardType, CompositionDto, CreateMatchDto, MatchLocation, Position,
        StarterDto, SubstituteDto,
    },
    server::{
        controller::{
            composition::set_composition,
            event::{add_card, add_goal},
            lifecycle::{end_match, start_match},
            matches::{create_match, get_match},
            stats::get_match_stats,
        },
        model::app::AppState,
    },
};

use super::*;

/// Expect the final statistics to reflect every event recorded during the match
#[tokio::test]
async fn match_day_from_creation_to_statistics() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 15).await?;
    let state = test.to_app_state::<AppState>();

    let response = respond(
        create_match(
            State(state.clone()),
            test.session.clone(),
            ApiJson(CreateMatchDto {
                opponent: constant::TEST_OPPONENT.to_string(),
                date: Utc::now().naive_utc() + Duration::days(1),
                location: MatchLocation::Home,
                team_id: team.id,
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::CREATED);
    let match_id = body_json(response).await["id"].as_i64().unwrap() as i32;

    let starters = players[..11]
        .iter()
        .map(|p| StarterDto {
            player_id: p.id,
            position: match p.number {
                1 => Position::Goalkeeper,
                2..=5 => Position::Defender,
                6..=8 => Position::Midfielder,
                _ => Position::Forward,
            },
        })
        .collect();
    let substitutes = players[11..]
        .iter()
        .map(|p| SubstituteDto { player_id: p.id })
        .collect();
    let response = respond(
        set_composition(
            State(state.clone()),
            test.session.clone(),
            Path(match_id),
            ApiJson(CompositionDto {
                starters,
                substitutes,
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::OK);

    let response =
        respond(start_match(State(state.clone()), test.session.clone(), Path(match_id)).await);
    assert_eq!(response.status(), StatusCode::OK);

    let response = respond(
        add_goal(
            State(state.clone()),
            test.session.clone(),
            Path(match_id),
            ApiJson(AddGoalDto {
                player_id: players[9].id,
                minute: 23,
                is_own_goal: false,
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = respond(
        add_card(
            State(state.clone()),
            test.session.clone(),
            Path(match_id),
            ApiJson(AddCardDto {
                player_id: players[5].id,
                card_type: CardType::Yellow,
                minute: 40,
                reason: None,
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::CREATED);

    let response =
        respond(end_match(State(state.clone()), test.session.clone(), Path(match_id)).await);
    assert_eq!(response.status(), StatusCode::OK);

    let response =
        respond(get_match(State(state.clone()), test.session.clone(), Path(match_id)).await);
    let view = body_json(response).await;
    assert_eq!(view["status"], "FINISHED");
    assert_eq!(view["ourScore"], 1);
    assert_eq!(view["opponentScore"], 0);
    assert_eq!(view["goals"].as_array().unwrap().len(), 1);
    assert_eq!(view["cards"].as_array().unwrap().len(), 1);

    let response =
        respond(get_match_stats(State(state), test.session.clone(), Path(match_id)).await);
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;
    assert_eq!(stats["starters"], 11);
    assert_eq!(stats["substitutes"], 4);
    assert_eq!(stats["totalGoals"], 1);
    assert_eq!(stats["totalCards"], 1);
    assert_eq!(stats["yellowCards"], 1);
    assert_eq!(stats["redCards"], 0);

    Ok(())
}
