use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{MatchLocation, MatchStatus, Position};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{
    constant::TEST_OPPONENT,
    error::TestError,
    fixtures::team::position_for_number,
    model::{MatchModel, MatchPlayerModel, PlayerModel},
    TestContext,
};

impl TestContext {
    pub fn matches<'a>(&'a self) -> MatchFixtures<'a> {
        MatchFixtures { setup: self }
    }
}

pub struct MatchFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> MatchFixtures<'a> {
    /// Insert a scheduled home match a week from now.
    pub async fn insert_mock_match(&self, team_id: i32) -> Result<MatchModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::FootballMatch::insert(entity::football_match::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                opponent: ActiveValue::Set(TEST_OPPONENT.to_string()),
                date: ActiveValue::Set(now + Duration::days(7)),
                location: ActiveValue::Set(MatchLocation::Home),
                status: ActiveValue::Set(MatchStatus::Scheduled),
                our_score: ActiveValue::Set(0),
                opponent_score: ActiveValue::Set(0),
                start_time: ActiveValue::Set(None),
                end_time: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a finished match with the provided score.
    pub async fn insert_finished_match(
        &self,
        team_id: i32,
        our_score: i32,
        opponent_score: i32,
    ) -> Result<MatchModel, TestError> {
        let match_model = self.insert_mock_match(team_id).await?;
        let now = Utc::now().naive_utc();

        let mut match_am = match_model.into_active_model();
        match_am.status = ActiveValue::Set(MatchStatus::Finished);
        match_am.our_score = ActiveValue::Set(our_score);
        match_am.opponent_score = ActiveValue::Set(opponent_score);
        match_am.start_time = ActiveValue::Set(Some(now - Duration::minutes(95)));
        match_am.end_time = ActiveValue::Set(Some(now));

        Ok(match_am.update(&self.setup.db).await?)
    }

    /// Force a match into the provided status without any transition checks.
    pub async fn set_status(
        &self,
        match_model: MatchModel,
        status: MatchStatus,
    ) -> Result<MatchModel, TestError> {
        let mut match_am = match_model.into_active_model();
        match_am.status = ActiveValue::Set(status);
        if status != MatchStatus::Scheduled {
            match_am.start_time = ActiveValue::Set(Some(Utc::now().naive_utc()));
        }

        Ok(match_am.update(&self.setup.db).await?)
    }

    /// Insert match player rows directly, starters keep their squad position.
    pub async fn insert_mock_composition(
        &self,
        match_id: i32,
        starters: &[PlayerModel],
        substitutes: &[PlayerModel],
    ) -> Result<Vec<MatchPlayerModel>, TestError> {
        let rows = starters
            .iter()
            .map(|p| (p.id, true, position_for_number(p.number)))
            .chain(substitutes.iter().map(|p| (p.id, false, Position::Substitute)));

        let mut created = Vec::new();
        for (player_id, is_starter, position) in rows {
            created.push(
                entity::prelude::MatchPlayer::insert(entity::match_player::ActiveModel {
                    match_id: ActiveValue::Set(match_id),
                    player_id: ActiveValue::Set(player_id),
                    is_starter: ActiveValue::Set(is_starter),
                    position: ActiveValue::Set(position),
                    minutes_played: ActiveValue::Set(0),
                    ..Default::default()
                })
                .exec_with_returning(&self.setup.db)
                .await?,
            );
        }

        Ok(created)
    }

    /// Insert a live match whose first 11 players start and the rest sit on the bench.
    pub async fn insert_live_match_with_squad(
        &self,
        team_id: i32,
        players: &[PlayerModel],
    ) -> Result<MatchModel, TestError> {
        let match_model = self.insert_mock_match(team_id).await?;
        let split = players.len().min(11);
        let (starters, substitutes) = players.split_at(split);

        self.insert_mock_composition(match_model.id, starters, substitutes)
            .await?;

        self.set_status(match_model, MatchStatus::Live).await
    }
}
