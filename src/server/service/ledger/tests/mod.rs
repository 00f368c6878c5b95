
use entity::sea_orm_active_enums::MatchStatus;
use touchline_test_utils::{model::PlayerModel, prelude::*};

use super::*;
use crate::server::service::roster::DbRosterGate;

/// Team of `squad` players with a LIVE match where the first 11 start
async fn live_match(
    test: &TestContext,
    squad: usize,
) -> Result<(MatchModel, Vec<PlayerModel>), TestError> {
    let (team, players) = test
        .team()
        .insert_mock_team_with_players(constant::TEST_OWNER_USER_ID, squad)
        .await?;
    let football_match = test
        .matches()
        .insert_live_match_with_squad(team.id, &players)
        .await?;

    Ok((football_match, players))
}
