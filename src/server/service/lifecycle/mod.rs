//! Match state machine.
//!
//! SCHEDULED -> LIVE -> FINISHED, nothing else. Transitions are conditional updates on the
//! expected prior status so two racing requests can never both start or both end a match.

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::matches::MatchDetailDto,
    server::{
        data::{match_player::MatchPlayerRepository, matches::MatchRepository},
        error::{matches::MatchError, Error},
        service::{
            composition::STARTERS,
            matches::{load_match_view, require_match},
            roster::{OwnedEntity, RosterGate},
        },
    },
};

pub struct LifecycleService<'a> {
    db: &'a DatabaseConnection,
    gate: &'a dyn RosterGate,
}

impl<'a> LifecycleService<'a> {
    /// Creates a new instance of [`LifecycleService`]
    pub fn new(db: &'a DatabaseConnection, gate: &'a dyn RosterGate) -> Self {
        Self { db, gate }
    }

    /// Kicks off a SCHEDULED match with exactly 11 starters
    ///
    /// # Returns
    /// - `Ok(MatchDetailDto)` - Match is LIVE with `start_time` set
    /// - `Err(MatchError::InvalidState)` - Match is not SCHEDULED
    /// - `Err(MatchError::IncompleteComposition)` - Starter count is not exactly 11
    pub async fn start_match(&self, user_id: i32, match_id: i32) -> Result<MatchDetailDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;

        let txn = self.db.begin().await?;

        let football_match = require_match(&txn, match_id).await?;
        if football_match.status != MatchStatus::Scheduled {
            return Err(cannot_start(football_match.status));
        }

        let starters = MatchPlayerRepository::new(&txn)
            .count_starters(match_id)
            .await?;
        if starters != STARTERS as u64 {
            return Err(MatchError::IncompleteComposition { starters }.into());
        }

        let rows = MatchRepository::new(&txn)
            .transition(match_id, MatchStatus::Scheduled, MatchStatus::Live)
            .await?;
        if rows == 0 {
            let current = require_match(&txn, match_id).await?.status;
            return Err(cannot_start(current));
        }

        txn.commit().await?;

        tracing::info!("Match {} kicked off", match_id);

        load_match_view(self.db, match_id).await
    }

    /// Ends a LIVE match
    ///
    /// # Returns
    /// - `Ok(MatchDetailDto)` - Match is FINISHED with `end_time` set
    /// - `Err(MatchError::InvalidState)` - Match is not LIVE
    pub async fn end_match(&self, user_id: i32, match_id: i32) -> Result<MatchDetailDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;

        // Single conditional update, no precondition reads to keep consistent with it
        let rows = MatchRepository::new(self.db)
            .transition(match_id, MatchStatus::Live, MatchStatus::Finished)
            .await?;
        if rows == 0 {
            let current = require_match(self.db, match_id).await?.status;
            return Err(MatchError::not_in_progress(current).into());
        }

        tracing::info!("Match {} finished", match_id);

        load_match_view(self.db, match_id).await
    }
}

fn cannot_start(current: MatchStatus) -> Error {
    MatchError::InvalidState {
        message: "match cannot be started",
        current,
        required: MatchStatus::Scheduled,
    }
    .into()
}
