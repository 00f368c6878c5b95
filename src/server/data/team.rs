use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::TeamModel;

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, team_id: i32) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }
}
