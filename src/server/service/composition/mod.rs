//! Composition manager.
//!
//! Replaces the starters and substitutes selected for a match. The squad shape is checked
//! before anything is written and the replacement itself runs in one transaction, so a
//! rejected or failed request always leaves the previous composition in place.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use entity::sea_orm_active_enums::{MatchStatus, Position};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::matches::{CompositionDto, MatchDetailDto},
    server::{
        data::match_player::{MatchPlayerRepository, NewMatchPlayer},
        error::{matches::MatchError, Error},
        service::{
            matches::{load_match_view, require_match},
            roster::{OwnedEntity, RosterGate},
        },
    },
};

/// Number of starters a composition must name
pub const STARTERS: usize = 11;
/// Maximum number of substitutes on the bench
pub const MAX_SUBSTITUTES: usize = 7;

pub struct CompositionService<'a> {
    db: &'a DatabaseConnection,
    gate: &'a dyn RosterGate,
}

impl<'a> CompositionService<'a> {
    /// Creates a new instance of [`CompositionService`]
    pub fn new(db: &'a DatabaseConnection, gate: &'a dyn RosterGate) -> Self {
        Self { db, gate }
    }

    /// Replaces the composition of a SCHEDULED match
    ///
    /// # Returns
    /// - `Ok(MatchDetailDto)` - Refreshed match view with the new composition
    /// - `Err(MatchError::NotFound | Forbidden)` - Match missing or owned by another user
    /// - `Err(MatchError::InvalidState)` - Match has already kicked off
    /// - `Err(MatchError::Validation)` - Wrong squad size, duplicate player, starter listed
    ///   as SUBSTITUTE or player outside the team
    pub async fn set_composition(
        &self,
        user_id: i32,
        match_id: i32,
        composition: CompositionDto,
    ) -> Result<MatchDetailDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;

        let football_match = require_match(self.db, match_id).await?;
        ensure_editable(football_match.status)?;

        let rows = build_rows(&composition)?;
        let player_ids: Vec<i32> = rows.iter().map(|row| row.player_id).collect();
        self.gate
            .assert_roster(football_match.team_id, &player_ids)
            .await?;

        let txn = self.db.begin().await?;

        // Status may have moved since the first read
        let football_match = require_match(&txn, match_id).await?;
        ensure_editable(football_match.status)?;

        MatchPlayerRepository::new(&txn)
            .replace(match_id, rows)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Set composition of match {}: {} starters, {} substitutes",
            match_id,
            composition.starters.len(),
            composition.substitutes.len()
        );

        load_match_view(self.db, match_id).await
    }
}

fn ensure_editable(status: MatchStatus) -> Result<(), Error> {
    if status != MatchStatus::Scheduled {
        return Err(MatchError::InvalidState {
            message: "cannot modify composition after kickoff",
            current: status,
            required: MatchStatus::Scheduled,
        }
        .into());
    }

    Ok(())
}

/// Checks the squad shape and turns the request into rows to insert
fn build_rows(composition: &CompositionDto) -> Result<Vec<NewMatchPlayer>, Error> {
    if composition.starters.len() != STARTERS {
        return Err(MatchError::validation(format!(
            "exactly {} starters are required, got {}",
            STARTERS,
            composition.starters.len()
        ))
        .into());
    }

    if composition.substitutes.len() > MAX_SUBSTITUTES {
        return Err(MatchError::validation(format!(
            "at most {} substitutes are allowed, got {}",
            MAX_SUBSTITUTES,
            composition.substitutes.len()
        ))
        .into());
    }

    let starters = composition.starters.iter().map(|starter| {
        let position: Position = starter.position.into();
        (starter.player_id, true, position)
    });
    let substitutes = composition
        .substitutes
        .iter()
        .map(|substitute| (substitute.player_id, false, Position::Substitute));

    let mut seen = HashSet::new();
    let mut rows = Vec::with_capacity(STARTERS + composition.substitutes.len());
    for (player_id, is_starter, position) in starters.chain(substitutes) {
        if is_starter && position == Position::Substitute {
            return Err(MatchError::validation(format!(
                "starter {} cannot be assigned the SUBSTITUTE position",
                player_id
            ))
            .into());
        }

        if !seen.insert(player_id) {
            return Err(MatchError::validation(format!(
                "player listed more than once: {}",
                player_id
            ))
            .into());
        }

        rows.push(NewMatchPlayer {
            player_id,
            is_starter,
            position,
        });
    }

    Ok(rows)
}
