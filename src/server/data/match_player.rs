use entity::sea_orm_active_enums::Position;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{MatchPlayerModel, PlayerModel};

/// A row of a composition about to be written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewMatchPlayer {
    pub player_id: i32,
    pub is_starter: bool,
    pub position: Position,
}

pub struct MatchPlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchPlayerRepository<'a, C> {
    /// Creates a new instance of [`MatchPlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the composition of a match with player details, ordered by shirt number
    pub async fn get_by_match(
        &self,
        match_id: i32,
    ) -> Result<Vec<(MatchPlayerModel, Option<PlayerModel>)>, DbErr> {
        entity::prelude::MatchPlayer::find()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .find_also_related(entity::player::Entity)
            .order_by_asc(entity::player::Column::Number)
            .all(self.db)
            .await
    }

    /// Gets every selection of a player across all matches
    pub async fn get_by_player(&self, player_id: i32) -> Result<Vec<MatchPlayerModel>, DbErr> {
        entity::prelude::MatchPlayer::find()
            .filter(entity::match_player::Column::PlayerId.eq(player_id))
            .all(self.db)
            .await
    }

    pub async fn find(
        &self,
        match_id: i32,
        player_id: i32,
    ) -> Result<Option<MatchPlayerModel>, DbErr> {
        entity::prelude::MatchPlayer::find()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .filter(entity::match_player::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    pub async fn count_starters(&self, match_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MatchPlayer::find()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .filter(entity::match_player::Column::IsStarter.eq(true))
            .count(self.db)
            .await
    }

    /// Deletes the current composition of a match and writes `rows` in its place
    ///
    /// Only atomic when `db` is a transaction, callers are expected to provide one.
    pub async fn replace(&self, match_id: i32, rows: Vec<NewMatchPlayer>) -> Result<(), DbErr> {
        entity::prelude::MatchPlayer::delete_many()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;

        if rows.is_empty() {
            return Ok(());
        }

        let models = rows.into_iter().map(|row| entity::match_player::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            player_id: ActiveValue::Set(row.player_id),
            is_starter: ActiveValue::Set(row.is_starter),
            position: ActiveValue::Set(row.position),
            minutes_played: ActiveValue::Set(0),
            ..Default::default()
        });

        entity::prelude::MatchPlayer::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the minutes played of a player in a match, returns the number of rows affected
    pub async fn set_minutes_played(
        &self,
        match_id: i32,
        player_id: i32,
        minutes: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::MatchPlayer::update_many()
            .col_expr(
                entity::match_player::Column::MinutesPlayed,
                Expr::value(minutes),
            )
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .filter(entity::match_player::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
