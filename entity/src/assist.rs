use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub match_id: i32,
    pub player_id: i32,
    pub minute: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::football_match::Entity",
        from = "Column::MatchId",
        to = "super::football_match::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FootballMatch,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::football_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FootballMatch.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
