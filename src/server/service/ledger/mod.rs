//! Event ledger.
//!
//! Records goals, assists, cards and substitutions against a LIVE match. Every event is
//! checked against the match's composition, and each write together with its side effect
//! (score increment, minutes played) commits as one transaction.

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::{
    model::matches::{
        AddAssistDto, AddCardDto, AddGoalDto, AddSubstitutionDto, AssistDto, CardDto, GoalDto,
        PlayerSummaryDto, SubstitutionDto,
    },
    server::{
        data::{
            event::MatchEventRepository, match_player::MatchPlayerRepository,
            matches::MatchRepository,
        },
        error::{matches::MatchError, Error},
        model::db::{MatchModel, MatchPlayerModel},
        service::{
            matches::{player_summary, require_match, team_players},
            roster::{OwnedEntity, RosterGate},
        },
    },
};

pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
    gate: &'a dyn RosterGate,
}

impl<'a> LedgerService<'a> {
    /// Creates a new instance of [`LedgerService`]
    pub fn new(db: &'a DatabaseConnection, gate: &'a dyn RosterGate) -> Self {
        Self { db, gate }
    }

    /// Records a goal, crediting our score unless it is an own goal
    ///
    /// Own goals are stored for the scorer's record but leave both scores untouched.
    ///
    /// # Returns
    /// - `Ok(GoalDto)` - Created goal with the scorer attached
    /// - `Err(MatchError::InvalidState)` - Match is not LIVE
    /// - `Err(MatchError::Validation)` - Scorer is not selected for the match
    pub async fn add_goal(
        &self,
        user_id: i32,
        match_id: i32,
        payload: AddGoalDto,
    ) -> Result<GoalDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;
        payload.validate()?;

        let txn = self.db.begin().await?;

        let football_match = require_live_match(&txn, match_id).await?;
        require_selected(&txn, match_id, payload.player_id).await?;

        let goal = MatchEventRepository::new(&txn)
            .create_goal(
                match_id,
                payload.player_id,
                payload.minute,
                payload.is_own_goal,
            )
            .await?;

        if !payload.is_own_goal {
            let rows = MatchRepository::new(&txn)
                .increment_our_score(match_id)
                .await?;
            if rows == 0 {
                let current = require_match(&txn, match_id).await?.status;
                return Err(MatchError::not_in_progress(current).into());
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Goal recorded in match {} by player {} at minute {}{}",
            match_id,
            goal.player_id,
            goal.minute,
            if goal.is_own_goal { " (own goal)" } else { "" }
        );

        Ok(GoalDto {
            id: goal.id,
            match_id: goal.match_id,
            player: self.player(&football_match, goal.player_id).await?,
            minute: goal.minute,
            is_own_goal: goal.is_own_goal,
            created_at: goal.created_at,
        })
    }

    /// Records an assist
    ///
    /// # Returns
    /// - `Ok(AssistDto)` - Created assist with the player attached
    /// - `Err(MatchError::InvalidState)` - Match is not LIVE
    /// - `Err(MatchError::Validation)` - Player is not selected for the match
    pub async fn add_assist(
        &self,
        user_id: i32,
        match_id: i32,
        payload: AddAssistDto,
    ) -> Result<AssistDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;
        payload.validate()?;

        let txn = self.db.begin().await?;

        let football_match = require_live_match(&txn, match_id).await?;
        require_selected(&txn, match_id, payload.player_id).await?;

        let assist = MatchEventRepository::new(&txn)
            .create_assist(match_id, payload.player_id, payload.minute)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Assist recorded in match {} by player {} at minute {}",
            match_id,
            assist.player_id,
            assist.minute
        );

        Ok(AssistDto {
            id: assist.id,
            match_id: assist.match_id,
            player: self.player(&football_match, assist.player_id).await?,
            minute: assist.minute,
            created_at: assist.created_at,
        })
    }

    /// Records a yellow or red card
    ///
    /// # Returns
    /// - `Ok(CardDto)` - Created card with the player attached
    /// - `Err(MatchError::InvalidState)` - Match is not LIVE
    /// - `Err(MatchError::Validation)` - Player is not selected for the match, or the reason
    ///   exceeds 255 characters
    pub async fn add_card(
        &self,
        user_id: i32,
        match_id: i32,
        payload: AddCardDto,
    ) -> Result<CardDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;
        payload.validate()?;

        let txn = self.db.begin().await?;

        let football_match = require_live_match(&txn, match_id).await?;
        require_selected(&txn, match_id, payload.player_id).await?;

        let card = MatchEventRepository::new(&txn)
            .create_card(
                match_id,
                payload.player_id,
                payload.card_type.into(),
                payload.minute,
                payload.reason,
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "{:?} card recorded in match {} for player {} at minute {}",
            card.card_type,
            match_id,
            card.player_id,
            card.minute
        );

        Ok(CardDto {
            id: card.id,
            match_id: card.match_id,
            player: self.player(&football_match, card.player_id).await?,
            card_type: card.card_type.into(),
            minute: card.minute,
            reason: card.reason,
            created_at: card.created_at,
        })
    }

    /// Records a substitution and stops the outgoing player's clock at `minute`
    ///
    /// # Returns
    /// - `Ok(SubstitutionDto)` - Created substitution with both players attached
    /// - `Err(MatchError::InvalidState)` - Match is not LIVE
    /// - `Err(MatchError::Validation)` - Either player is not selected for the match, or the
    ///   incoming player is a starter
    pub async fn add_substitution(
        &self,
        user_id: i32,
        match_id: i32,
        payload: AddSubstitutionDto,
    ) -> Result<SubstitutionDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;
        payload.validate()?;

        let txn = self.db.begin().await?;

        let football_match = require_live_match(&txn, match_id).await?;
        if payload.player_in_id == payload.player_out_id {
            return Err(MatchError::validation("a player cannot replace themselves").into());
        }
        require_selected(&txn, match_id, payload.player_out_id).await?;
        let incoming = require_selected(&txn, match_id, payload.player_in_id).await?;
        if incoming.is_starter {
            return Err(MatchError::validation("incoming player must be a substitute").into());
        }

        let substitution = MatchEventRepository::new(&txn)
            .create_substitution(
                match_id,
                payload.player_in_id,
                payload.player_out_id,
                payload.minute,
            )
            .await?;
        MatchPlayerRepository::new(&txn)
            .set_minutes_played(match_id, payload.player_out_id, payload.minute)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Substitution in match {} at minute {}: player {} on for player {}",
            match_id,
            substitution.minute,
            substitution.player_in_id,
            substitution.player_out_id
        );

        let players = team_players(self.db, football_match.team_id).await?;

        Ok(SubstitutionDto {
            id: substitution.id,
            match_id: substitution.match_id,
            player_in: player_summary(&players, substitution.player_in_id)?,
            player_out: player_summary(&players, substitution.player_out_id)?,
            minute: substitution.minute,
            created_at: substitution.created_at,
        })
    }

    async fn player(
        &self,
        football_match: &MatchModel,
        player_id: i32,
    ) -> Result<PlayerSummaryDto, Error> {
        let players = team_players(self.db, football_match.team_id).await?;

        player_summary(&players, player_id)
    }
}

/// Loads the match and requires it to be LIVE
async fn require_live_match<C: ConnectionTrait>(
    db: &C,
    match_id: i32,
) -> Result<MatchModel, Error> {
    let football_match = require_match(db, match_id).await?;
    if football_match.status != MatchStatus::Live {
        return Err(MatchError::not_in_progress(football_match.status).into());
    }

    Ok(football_match)
}

/// Loads the player's composition row, failing when the player is not selected
async fn require_selected<C: ConnectionTrait>(
    db: &C,
    match_id: i32,
    player_id: i32,
) -> Result<MatchPlayerModel, Error> {
    MatchPlayerRepository::new(db)
        .find(match_id, player_id)
        .await?
        .ok_or_else(|| MatchError::validation("player not in match").into())
}
