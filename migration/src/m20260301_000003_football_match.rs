use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_team::Team;

static IDX_FOOTBALL_MATCH_TEAM_ID: &str = "idx-football_match-team_id";
static FK_FOOTBALL_MATCH_TEAM_ID: &str = "fk-football_match-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FootballMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(FootballMatch::Id))
                    .col(integer(FootballMatch::TeamId))
                    .col(string(FootballMatch::Opponent))
                    .col(date_time(FootballMatch::Date))
                    .col(string_len(FootballMatch::Location, 16))
                    .col(string_len(FootballMatch::Status, 16).default("SCHEDULED"))
                    .col(integer(FootballMatch::OurScore).default(0))
                    .col(integer(FootballMatch::OpponentScore).default(0))
                    .col(timestamp_null(FootballMatch::StartTime))
                    .col(timestamp_null(FootballMatch::EndTime))
                    .col(timestamp(FootballMatch::CreatedAt))
                    .col(timestamp(FootballMatch::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOOTBALL_MATCH_TEAM_ID)
                    .table(FootballMatch::Table)
                    .col(FootballMatch::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FOOTBALL_MATCH_TEAM_ID)
                    .from_tbl(FootballMatch::Table)
                    .from_col(FootballMatch::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FOOTBALL_MATCH_TEAM_ID)
                    .table(FootballMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOOTBALL_MATCH_TEAM_ID)
                    .table(FootballMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FootballMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FootballMatch {
    Table,
    Id,
    TeamId,
    Opponent,
    Date,
    Location,
    Status,
    OurScore,
    OpponentScore,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
}
