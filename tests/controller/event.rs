use axum::{
    body::Body,
    extract::{FromRequest, Path, State},
    http::{header, Request, StatusCode},
    response::IntoResponse,
};
use touchline::{
    model::matches::{AddAssistDto, AddCardDto, AddGoalDto, AddSubstitutionDto, CardType},
    server::{
        controller::{
            event::{add_assist, add_card, add_goal, add_substitution},
            matches::get_match,
        },
        model::app::AppState,
    },
};

use super::*;

/// Expect 201 for a goal by a selected player
#[tokio::test]
async fn goal_in_live_match_is_created() -> Result<(), TestError> {
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
        add_goal(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(AddGoalDto {
                player_id: players[10].id,
                minute: 23,
                is_own_goal: false,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["minute"], 23);
    assert_eq!(body["player"]["id"], players[10].id);
    assert_eq!(body["isOwnGoal"], false);

    Ok(())
}

/// Expect 400 and an unchanged score for a goal before kickoff
#[tokio::test]
async fn goal_before_kickoff_is_bad_request() -> Result<(), TestError> {
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
        add_goal(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(AddGoalDto {
                player_id: players[9].id,
                minute: 10,
                is_own_goal: false,
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = respond(
        get_match(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
        )
        .await,
    );
    let body = body_json(response).await;
    assert_eq!(body["ourScore"], 0);
    assert!(body["goals"].as_array().unwrap().is_empty());

    Ok(())
}

/// Expect 400 for a goal by a player outside the composition
#[tokio::test]
async fn goal_by_unselected_player_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 12).await?;
    let football_match = test
        .matches()
        .insert_live_match_with_squad(team.id, &players[..11])
        .await?;

    let response = respond(
        add_goal(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(AddGoalDto {
                player_id: players[11].id,
                minute: 70,
                is_own_goal: false,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 201 for an assist in a live match
#[tokio::test]
async fn assist_in_live_match_is_created() -> Result<(), TestError> {
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
        add_assist(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(AddAssistDto {
                player_id: players[7].id,
                minute: 23,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 201 with the card type serialized under `type`
#[tokio::test]
async fn card_in_live_match_is_created() -> Result<(), TestError> {
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
        add_card(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(AddCardDto {
                player_id: players[4].id,
                card_type: CardType::Red,
                minute: 88,
                reason: Some("Serious foul play".to_string()),
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["type"], "RED");
    assert_eq!(body["reason"], "Serious foul play");

    Ok(())
}

/// Expect 403 when recording a card in another user's match
#[tokio::test]
async fn card_in_foreign_match_is_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OTHER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 11).await?;
    let football_match = test
        .matches()
        .insert_live_match_with_squad(team.id, &players)
        .await?;

    let response = respond(
        add_card(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(AddCardDto {
                player_id: players[4].id,
                card_type: CardType::Yellow,
                minute: 12,
                reason: None,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 201 when a substitute replaces a starter
#[tokio::test]
async fn substitution_in_live_match_is_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;
    let (team, players) = owned_team(&test, 12).await?;
    let football_match = test
        .matches()
        .insert_live_match_with_squad(team.id, &players)
        .await?;

    let response = respond(
        add_substitution(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(football_match.id),
            ApiJson(AddSubstitutionDto {
                player_in_id: players[11].id,
                player_out_id: players[9].id,
                minute: 60,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["playerIn"]["id"], players[11].id);
    assert_eq!(body["playerOut"]["id"], players[9].id);

    Ok(())
}

/// Expect 404 for an event on a missing match
#[tokio::test]
async fn substitution_in_missing_match_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .with_authenticated_user(constant::TEST_OWNER_USER_ID)
        .build()
        .await?;

    let response = respond(
        add_substitution(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            Path(77),
            ApiJson(AddSubstitutionDto {
                player_in_id: 1,
                player_out_id: 2,
                minute: 60,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

fn goal_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/matches/1/goal")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Expect 400 with an error body when the goal minute is missing
#[tokio::test]
async fn goal_body_without_minute_is_bad_request() -> Result<(), TestError> {
    let result = ApiJson::<AddGoalDto>::from_request(goal_request(r#"{"playerId":1}"#), &()).await;

    let Err(rejection) = result else {
        panic!("body without a minute was accepted");
    };
    let response = rejection.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("minute"));

    Ok(())
}

/// Expect 400 for a non-numeric player ID
#[tokio::test]
async fn goal_body_with_text_player_id_is_bad_request() -> Result<(), TestError> {
    let result = ApiJson::<AddGoalDto>::from_request(
        goal_request(r#"{"playerId":"nine","minute":12}"#),
        &(),
    )
    .await;

    let Err(rejection) = result else {
        panic!("text player ID was accepted");
    };
    assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a card type other than YELLOW or RED
#[tokio::test]
async fn card_body_with_unknown_type_is_bad_request() -> Result<(), TestError> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/matches/1/card")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"playerId":1,"type":"GREEN","minute":12}"#))
        .unwrap();

    let Err(rejection) = ApiJson::<AddCardDto>::from_request(request, &()).await else {
        panic!("unknown card type was accepted");
    };
    assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a well-formed body to reach the handler unchanged
#[tokio::test]
async fn goal_body_with_all_fields_is_extracted() -> Result<(), TestError> {
    let result = ApiJson::<AddGoalDto>::from_request(
        goal_request(r#"{"playerId":4,"minute":23,"isOwnGoal":true}"#),
        &(),
    )
    .await;

    let Ok(ApiJson(payload)) = result else {
        panic!("well-formed goal body was rejected");
    };
    assert_eq!(payload.player_id, 4);
    assert_eq!(payload.minute, 23);
    assert!(payload.is_own_goal);

    Ok(())
}
