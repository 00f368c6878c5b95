//! Ownership and roster checks shared by every match operation.
//!
//! Teams belong to users and own their players and matches. Every service receives a
//! [`RosterGate`] and consults it before touching anything, so the "load parent, compare
//! owner" logic lives in one place.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{matches::MatchRepository, player::PlayerRepository, team::TeamRepository},
    error::{matches::MatchError, Error},
};

/// Reference to an entity whose ownership is resolved through its team
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnedEntity {
    Team(i32),
    Match(i32),
    Player(i32),
}

impl OwnedEntity {
    fn name(&self) -> &'static str {
        match self {
            Self::Team(_) => "team",
            Self::Match(_) => "match",
            Self::Player(_) => "player",
        }
    }

    fn id(&self) -> i32 {
        match self {
            Self::Team(id) | Self::Match(id) | Self::Player(id) => *id,
        }
    }
}

/// Read-only access checks against the team/player collaborator
#[async_trait]
pub trait RosterGate: Send + Sync {
    /// Confirms the entity exists and its team is owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Entity exists and belongs to the user
    /// - `Err(MatchError::NotFound)` - Entity or its team does not exist
    /// - `Err(MatchError::Forbidden)` - Entity belongs to another user's team
    async fn assert_ownership(&self, entity: OwnedEntity, user_id: i32) -> Result<(), Error>;

    /// Confirms every player in `player_ids` is a member of the team.
    ///
    /// # Returns
    /// - `Ok(())` - All players belong to the team
    /// - `Err(MatchError::Validation)` - At least one player is not part of the team
    async fn assert_roster(&self, team_id: i32, player_ids: &[i32]) -> Result<(), Error>;
}

/// [`RosterGate`] backed by the team, player and match tables
pub struct DbRosterGate<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DbRosterGate<'a> {
    /// Creates a new instance of [`DbRosterGate`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the team an entity belongs to, `None` if the entity does not exist
    async fn team_id_of(&self, entity: OwnedEntity) -> Result<Option<i32>, Error> {
        let team_id = match entity {
            OwnedEntity::Team(id) => Some(id),
            OwnedEntity::Match(id) => MatchRepository::new(self.db)
                .get(id)
                .await?
                .map(|m| m.team_id),
            OwnedEntity::Player(id) => PlayerRepository::new(self.db)
                .get(id)
                .await?
                .map(|p| p.team_id),
        };

        Ok(team_id)
    }
}

#[async_trait]
impl<'a> RosterGate for DbRosterGate<'a> {
    async fn assert_ownership(&self, entity: OwnedEntity, user_id: i32) -> Result<(), Error> {
        let not_found = || MatchError::NotFound {
            entity: entity.name(),
            id: entity.id(),
        };

        let Some(team_id) = self.team_id_of(entity).await? else {
            return Err(not_found().into());
        };

        let Some(team) = TeamRepository::new(self.db).get(team_id).await? else {
            return Err(not_found().into());
        };

        if team.owner_user_id != user_id {
            return Err(MatchError::Forbidden {
                entity: entity.name(),
                id: entity.id(),
                user_id,
            }
            .into());
        }

        Ok(())
    }

    async fn assert_roster(&self, team_id: i32, player_ids: &[i32]) -> Result<(), Error> {
        let found: HashSet<i32> = PlayerRepository::new(self.db)
            .get_ids_in_team(team_id, player_ids)
            .await?
            .into_iter()
            .collect();

        if let Some(stranger) = player_ids.iter().find(|id| !found.contains(id)) {
            return Err(MatchError::validation(format!(
                "player {} does not belong to team",
                stranger
            ))
            .into());
        }

        Ok(())
    }
}
