use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{MatchLocation, MatchStatus};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::matches::UpdateMatchDto, server::model::db::MatchModel};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new match in the SCHEDULED state with a 0-0 score
    pub async fn create(
        &self,
        team_id: i32,
        opponent: String,
        date: NaiveDateTime,
        location: MatchLocation,
    ) -> Result<MatchModel, DbErr> {
        let now = Utc::now().naive_utc();

        let football_match = entity::football_match::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            opponent: ActiveValue::Set(opponent),
            date: ActiveValue::Set(date),
            location: ActiveValue::Set(location),
            status: ActiveValue::Set(MatchStatus::Scheduled),
            our_score: ActiveValue::Set(0),
            opponent_score: ActiveValue::Set(0),
            start_time: ActiveValue::Set(None),
            end_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        football_match.insert(self.db).await
    }

    pub async fn get(&self, match_id: i32) -> Result<Option<MatchModel>, DbErr> {
        entity::prelude::FootballMatch::find_by_id(match_id)
            .one(self.db)
            .await
    }

    /// Gets every match of a team, most recent date first
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<MatchModel>, DbErr> {
        entity::prelude::FootballMatch::find()
            .filter(entity::football_match::Column::TeamId.eq(team_id))
            .order_by_desc(entity::football_match::Column::Date)
            .order_by_desc(entity::football_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `changes`, no status transition rules are checked
    ///
    /// Returns `Ok(None)` if the match does not exist.
    pub async fn update(
        &self,
        match_id: i32,
        changes: UpdateMatchDto,
    ) -> Result<Option<MatchModel>, DbErr> {
        let football_match = match entity::prelude::FootballMatch::find_by_id(match_id)
            .one(self.db)
            .await?
        {
            Some(football_match) => football_match,
            None => return Ok(None),
        };

        let mut match_am = football_match.into_active_model();
        if let Some(opponent) = changes.opponent {
            match_am.opponent = ActiveValue::Set(opponent);
        }
        if let Some(date) = changes.date {
            match_am.date = ActiveValue::Set(date);
        }
        if let Some(location) = changes.location {
            match_am.location = ActiveValue::Set(location.into());
        }
        if let Some(status) = changes.status {
            match_am.status = ActiveValue::Set(status.into());
        }
        if let Some(our_score) = changes.our_score {
            match_am.our_score = ActiveValue::Set(our_score);
        }
        if let Some(opponent_score) = changes.opponent_score {
            match_am.opponent_score = ActiveValue::Set(opponent_score);
        }
        match_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let football_match = match_am.update(self.db).await?;

        Ok(Some(football_match))
    }

    /// Moves the match from `from` to `to` if it is still in `from`
    ///
    /// Entering LIVE stamps `start_time`, entering FINISHED stamps `end_time`. Returns the
    /// number of rows affected, 0 means the match was not in the expected status.
    pub async fn transition(
        &self,
        match_id: i32,
        from: MatchStatus,
        to: MatchStatus,
    ) -> Result<u64, DbErr> {
        let now = Utc::now().naive_utc();

        let mut update = entity::prelude::FootballMatch::update_many()
            .col_expr(entity::football_match::Column::Status, Expr::value(to))
            .col_expr(entity::football_match::Column::UpdatedAt, Expr::value(now));

        match to {
            MatchStatus::Live => {
                update = update.col_expr(
                    entity::football_match::Column::StartTime,
                    Expr::value(Some(now)),
                )
            }
            MatchStatus::Finished => {
                update = update
                    .col_expr(entity::football_match::Column::EndTime, Expr::value(Some(now)))
            }
            MatchStatus::Scheduled => {}
        }

        let result = update
            .filter(entity::football_match::Column::Id.eq(match_id))
            .filter(entity::football_match::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Adds one to `our_score` in place while the match is LIVE
    ///
    /// Returns the number of rows affected, 0 means the match is not LIVE.
    pub async fn increment_our_score(&self, match_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::FootballMatch::update_many()
            .col_expr(
                entity::football_match::Column::OurScore,
                Expr::col(entity::football_match::Column::OurScore).add(1),
            )
            .col_expr(
                entity::football_match::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::football_match::Column::Id.eq(match_id))
            .filter(entity::football_match::Column::Status.eq(MatchStatus::Live))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a match together with its composition and every recorded event
    ///
    /// Run inside a transaction so no orphaned children survive a failed delete. Returns OK
    /// regardless of the match existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Goal::delete_many()
            .filter(entity::goal::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;
        entity::prelude::Assist::delete_many()
            .filter(entity::assist::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;
        entity::prelude::Card::delete_many()
            .filter(entity::card::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;
        entity::prelude::Substitution::delete_many()
            .filter(entity::substitution::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;
        entity::prelude::MatchPlayer::delete_many()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;

        entity::prelude::FootballMatch::delete_by_id(match_id)
            .exec(self.db)
            .await
    }
}
