use chrono::Utc;
use entity::sea_orm_active_enums::Position;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{PlayerModel, TeamModel},
    TestContext,
};

impl TestContext {
    pub fn team<'a>(&'a self) -> TeamFixtures<'a> {
        TeamFixtures { setup: self }
    }
}

pub struct TeamFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TeamFixtures<'a> {
    /// Insert a team owned by the provided user.
    pub async fn insert_mock_team(&self, owner_user_id: i32) -> Result<TeamModel, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            owner_user_id: ActiveValue::Set(owner_user_id),
            name: ActiveValue::Set(format!("Test Team {}", owner_user_id)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a player wearing `number` into the team.
    pub async fn insert_mock_player(
        &self,
        team_id: i32,
        number: i32,
    ) -> Result<PlayerModel, TestError> {
        Ok(entity::prelude::Player::insert(entity::player::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set(format!("Player {}", number)),
            number: ActiveValue::Set(number),
            position: ActiveValue::Set(position_for_number(number)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a team with `player_count` players numbered from 1.
    pub async fn insert_mock_team_with_players(
        &self,
        owner_user_id: i32,
        player_count: usize,
    ) -> Result<(TeamModel, Vec<PlayerModel>), TestError> {
        let team = self.insert_mock_team(owner_user_id).await?;

        let mut players = Vec::with_capacity(player_count);
        for number in 1..=player_count as i32 {
            players.push(self.insert_mock_player(team.id, number).await?);
        }

        Ok((team, players))
    }
}

/// Squad numbers 1, 2-5, 6-8 and the rest map onto a 4-3-3.
pub fn position_for_number(number: i32) -> Position {
    match number {
        1 => Position::Goalkeeper,
        2..=5 => Position::Defender,
        6..=8 => Position::Midfielder,
        _ => Position::Forward,
    }
}
