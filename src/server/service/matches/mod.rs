//! Match entity store.
//!
//! Creation, the full match view, listing, administrative updates and cascading delete.
//! The view assembled here is what every other match operation returns after mutating.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::{
    model::matches::{
        AssistDto, CardDto, CreateMatchDto, GoalDto, MatchDetailDto, MatchDto, MatchPlayerDto,
        PlayerSummaryDto, SubstitutionDto, UpdateMatchDto,
    },
    server::{
        data::{
            event::MatchEventRepository, match_player::MatchPlayerRepository,
            matches::MatchRepository, player::PlayerRepository,
        },
        error::{matches::MatchError, Error},
        model::db::{MatchModel, PlayerModel},
        service::roster::{OwnedEntity, RosterGate},
    },
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
    gate: &'a dyn RosterGate,
}

impl<'a> MatchService<'a> {
    /// Creates a new instance of [`MatchService`]
    pub fn new(db: &'a DatabaseConnection, gate: &'a dyn RosterGate) -> Self {
        Self { db, gate }
    }

    /// Creates a SCHEDULED match for a team owned by the user
    ///
    /// # Returns
    /// - `Ok(MatchDto)` - The created match
    /// - `Err(MatchError::NotFound)` - Team does not exist
    /// - `Err(MatchError::Forbidden)` - Team belongs to another user
    pub async fn create(&self, user_id: i32, payload: CreateMatchDto) -> Result<MatchDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Team(payload.team_id), user_id)
            .await?;
        payload.validate()?;

        let football_match = MatchRepository::new(self.db)
            .create(
                payload.team_id,
                payload.opponent,
                payload.date,
                payload.location.into(),
            )
            .await?;

        tracing::info!(
            "Created match {} for team {} against {}",
            football_match.id,
            football_match.team_id,
            football_match.opponent
        );

        Ok(football_match.into())
    }

    /// Retrieves the full match view
    ///
    /// # Returns
    /// - `Ok(MatchDetailDto)` - Match with composition ordered by shirt number and events by minute
    /// - `Err(MatchError::NotFound)` - Match does not exist
    /// - `Err(MatchError::Forbidden)` - Match belongs to another user's team
    pub async fn get(&self, user_id: i32, match_id: i32) -> Result<MatchDetailDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;

        load_match_view(self.db, match_id).await
    }

    /// Lists a team's matches, most recent date first
    pub async fn list(&self, user_id: i32, team_id: i32) -> Result<Vec<MatchDto>, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Team(team_id), user_id)
            .await?;

        let matches = MatchRepository::new(self.db).get_by_team(team_id).await?;

        Ok(matches.into_iter().map(MatchDto::from).collect())
    }

    /// Applies a partial update to a match
    ///
    /// Status and score changes made here do not go through the lifecycle transitions, this is
    /// the correction path for mistakes made during a match.
    pub async fn update(
        &self,
        user_id: i32,
        match_id: i32,
        changes: UpdateMatchDto,
    ) -> Result<MatchDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;
        changes.validate()?;

        let Some(football_match) = MatchRepository::new(self.db)
            .update(match_id, changes)
            .await?
        else {
            return Err(match_not_found(match_id));
        };

        tracing::info!("Manually updated match {}", match_id);

        Ok(football_match.into())
    }

    /// Deletes a match with its composition and events, returning the deleted match
    pub async fn delete(&self, user_id: i32, match_id: i32) -> Result<MatchDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;

        let txn = self.db.begin().await?;

        let match_repo = MatchRepository::new(&txn);
        let Some(football_match) = match_repo.get(match_id).await? else {
            return Err(match_not_found(match_id));
        };
        match_repo.delete(match_id).await?;

        txn.commit().await?;

        tracing::info!("Deleted match {}", match_id);

        Ok(football_match.into())
    }
}

pub(super) fn match_not_found(match_id: i32) -> Error {
    MatchError::NotFound {
        entity: "match",
        id: match_id,
    }
    .into()
}

/// Loads a match or fails with NotFound
pub(super) async fn require_match<C: ConnectionTrait>(
    db: &C,
    match_id: i32,
) -> Result<MatchModel, Error> {
    MatchRepository::new(db)
        .get(match_id)
        .await?
        .ok_or_else(|| match_not_found(match_id))
}

/// Player details for every member of the match's team, keyed by player ID
pub(super) async fn team_players<C: ConnectionTrait>(
    db: &C,
    team_id: i32,
) -> Result<HashMap<i32, PlayerModel>, Error> {
    let players = PlayerRepository::new(db).get_by_team(team_id).await?;

    Ok(players.into_iter().map(|p| (p.id, p)).collect())
}

pub(super) fn player_summary(
    players: &HashMap<i32, PlayerModel>,
    player_id: i32,
) -> Result<PlayerSummaryDto, Error> {
    players
        .get(&player_id)
        .cloned()
        .map(PlayerSummaryDto::from)
        .ok_or_else(|| {
            // Players are restricted to the team when selected, a miss means the row was moved
            Error::InternalError(format!(
                "Player {} referenced by a match is not part of the match's team",
                player_id
            ))
        })
}

/// Assembles the full match view from the match and its related collections
pub(super) async fn load_match_view<C: ConnectionTrait>(
    db: &C,
    match_id: i32,
) -> Result<MatchDetailDto, Error> {
    let football_match = require_match(db, match_id).await?;
    let players = team_players(db, football_match.team_id).await?;

    let composition = MatchPlayerRepository::new(db).get_by_match(match_id).await?;
    let event_repo = MatchEventRepository::new(db);
    let goals = event_repo.get_goals(match_id).await?;
    let assists = event_repo.get_assists(match_id).await?;
    let cards = event_repo.get_cards(match_id).await?;
    let substitutions = event_repo.get_substitutions(match_id).await?;

    let players_dto = composition
        .into_iter()
        .map(|(row, player)| {
            let player = match player {
                Some(player) => PlayerSummaryDto::from(player),
                None => player_summary(&players, row.player_id)?,
            };

            Ok(MatchPlayerDto {
                id: row.id,
                player,
                is_starter: row.is_starter,
                position: row.position.into(),
                minutes_played: row.minutes_played,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let goals = goals
        .into_iter()
        .map(|goal| {
            Ok(GoalDto {
                id: goal.id,
                match_id: goal.match_id,
                player: player_summary(&players, goal.player_id)?,
                minute: goal.minute,
                is_own_goal: goal.is_own_goal,
                created_at: goal.created_at,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let assists = assists
        .into_iter()
        .map(|assist| {
            Ok(AssistDto {
                id: assist.id,
                match_id: assist.match_id,
                player: player_summary(&players, assist.player_id)?,
                minute: assist.minute,
                created_at: assist.created_at,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let cards = cards
        .into_iter()
        .map(|card| {
            Ok(CardDto {
                id: card.id,
                match_id: card.match_id,
                player: player_summary(&players, card.player_id)?,
                card_type: card.card_type.into(),
                minute: card.minute,
                reason: card.reason,
                created_at: card.created_at,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let substitutions = substitutions
        .into_iter()
        .map(|substitution| {
            Ok(SubstitutionDto {
                id: substitution.id,
                match_id: substitution.match_id,
                player_in: player_summary(&players, substitution.player_in_id)?,
                player_out: player_summary(&players, substitution.player_out_id)?,
                minute: substitution.minute,
                created_at: substitution.created_at,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(MatchDetailDto {
        fixture: football_match.into(),
        players: players_dto,
        goals,
        assists,
        cards,
        substitutions,
    })
}
