use chrono::Utc;
use entity::sea_orm_active_enums::CardType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{AssistModel, CardModel, GoalModel, SubstitutionModel};

/// Append-only storage for goals, assists, cards and substitutions
pub struct MatchEventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchEventRepository<'a, C> {
    /// Creates a new instance of [`MatchEventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_goal(
        &self,
        match_id: i32,
        player_id: i32,
        minute: i32,
        is_own_goal: bool,
    ) -> Result<GoalModel, DbErr> {
        let goal = entity::goal::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            player_id: ActiveValue::Set(player_id),
            minute: ActiveValue::Set(minute),
            is_own_goal: ActiveValue::Set(is_own_goal),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        goal.insert(self.db).await
    }

    pub async fn create_assist(
        &self,
        match_id: i32,
        player_id: i32,
        minute: i32,
    ) -> Result<AssistModel, DbErr> {
        let assist = entity::assist::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            player_id: ActiveValue::Set(player_id),
            minute: ActiveValue::Set(minute),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        assist.insert(self.db).await
    }

    pub async fn create_card(
        &self,
        match_id: i32,
        player_id: i32,
        card_type: CardType,
        minute: i32,
        reason: Option<String>,
    ) -> Result<CardModel, DbErr> {
        let card = entity::card::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            player_id: ActiveValue::Set(player_id),
            card_type: ActiveValue::Set(card_type),
            minute: ActiveValue::Set(minute),
            reason: ActiveValue::Set(reason),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        card.insert(self.db).await
    }

    pub async fn create_substitution(
        &self,
        match_id: i32,
        player_in_id: i32,
        player_out_id: i32,
        minute: i32,
    ) -> Result<SubstitutionModel, DbErr> {
        let substitution = entity::substitution::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            player_in_id: ActiveValue::Set(player_in_id),
            player_out_id: ActiveValue::Set(player_out_id),
            minute: ActiveValue::Set(minute),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        substitution.insert(self.db).await
    }

    /// Gets the goals of a match ordered by minute
    pub async fn get_goals(&self, match_id: i32) -> Result<Vec<GoalModel>, DbErr> {
        entity::prelude::Goal::find()
            .filter(entity::goal::Column::MatchId.eq(match_id))
            .order_by_asc(entity::goal::Column::Minute)
            .order_by_asc(entity::goal::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the assists of a match ordered by minute
    pub async fn get_assists(&self, match_id: i32) -> Result<Vec<AssistModel>, DbErr> {
        entity::prelude::Assist::find()
            .filter(entity::assist::Column::MatchId.eq(match_id))
            .order_by_asc(entity::assist::Column::Minute)
            .order_by_asc(entity::assist::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the cards of a match ordered by minute
    pub async fn get_cards(&self, match_id: i32) -> Result<Vec<CardModel>, DbErr> {
        entity::prelude::Card::find()
            .filter(entity::card::Column::MatchId.eq(match_id))
            .order_by_asc(entity::card::Column::Minute)
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the substitutions of a match ordered by minute
    pub async fn get_substitutions(&self, match_id: i32) -> Result<Vec<SubstitutionModel>, DbErr> {
        entity::prelude::Substitution::find()
            .filter(entity::substitution::Column::MatchId.eq(match_id))
            .order_by_asc(entity::substitution::Column::Minute)
            .order_by_asc(entity::substitution::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts a player's goals across all matches, split by own goal flag
    pub async fn count_goals_by_player(
        &self,
        player_id: i32,
        is_own_goal: bool,
    ) -> Result<u64, DbErr> {
        entity::prelude::Goal::find()
            .filter(entity::goal::Column::PlayerId.eq(player_id))
            .filter(entity::goal::Column::IsOwnGoal.eq(is_own_goal))
            .count(self.db)
            .await
    }

    pub async fn count_assists_by_player(&self, player_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Assist::find()
            .filter(entity::assist::Column::PlayerId.eq(player_id))
            .count(self.db)
            .await
    }

    pub async fn count_cards_by_player(
        &self,
        player_id: i32,
        card_type: CardType,
    ) -> Result<u64, DbErr> {
        entity::prelude::Card::find()
            .filter(entity::card::Column::PlayerId.eq(player_id))
            .filter(entity::card::Column::CardType.eq(card_type))
            .count(self.db)
            .await
    }
}
