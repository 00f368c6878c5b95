pub use sea_orm_migration::prelude::*;

mod m20260301_000001_team;
mod m20260301_000002_player;
mod m20260301_000003_football_match;
mod m20260301_000004_match_player;
mod m20260301_000005_match_event;
mod m20260301_000006_substitution;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_team::Migration),
            Box::new(m20260301_000002_player::Migration),
            Box::new(m20260301_000003_football_match::Migration),
            Box::new(m20260301_000004_match_player::Migration),
            Box::new(m20260301_000005_match_event::Migration),
            Box::new(m20260301_000006_substitution::Migration),
        ]
    }
}
