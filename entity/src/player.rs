use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Position;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub team_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
    pub position: Position,
    pub created_at: DateTime,
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

impl ActiveModelBehavior for ActiveModel {}
