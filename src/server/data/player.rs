use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::PlayerModel;

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, player_id: i32) -> Result<Option<PlayerModel>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    /// Gets every player of a team ordered by shirt number
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<PlayerModel>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .order_by_asc(entity::player::Column::Number)
            .all(self.db)
            .await
    }

    /// Returns the subset of `player_ids` that belong to the team
    pub async fn get_ids_in_team(
        &self,
        team_id: i32,
        player_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .filter(entity::player::Column::Id.is_in(player_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(players.into_iter().map(|p| p.id).collect())
    }
}
