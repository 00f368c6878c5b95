use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{MatchLocation, MatchStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "football_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub team_id: i32,
    pub opponent: String,
    pub date: DateTime,
    pub location: MatchLocation,
    pub status: MatchStatus,
    pub our_score: i32,
    pub opponent_score: i32,
    pub start_time: Option<DateTime>,
    pub end_time: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(has_many = "super::match_player::Entity")]
    MatchPlayer,
    #[sea_orm(has_many = "super::goal::Entity")]
    Goal,
    #[sea_orm(has_many = "super::assist::Entity")]
    Assist,
    #[sea_orm(has_many = "super::card::Entity")]
    Card,
    #[sea_orm(has_many = "super::substitution::Entity")]
    Substitution,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::match_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchPlayer.def()
    }
}

impl Related<super::goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goal.def()
    }
}

impl Related<super::assist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assist.def()
    }
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl Related<super::substitution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Substitution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
