use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000002_player::Player, m20260301_000003_football_match::FootballMatch};

static IDX_SUBSTITUTION_MATCH_ID: &str = "idx-substitution-match_id";
static FK_SUBSTITUTION_MATCH_ID: &str = "fk-substitution-match_id";
static FK_SUBSTITUTION_PLAYER_IN_ID: &str = "fk-substitution-player_in_id";
static FK_SUBSTITUTION_PLAYER_OUT_ID: &str = "fk-substitution-player_out_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Substitution::Table)
                    .if_not_exists()
                    .col(pk_auto(Substitution::Id))
                    .col(integer(Substitution::MatchId))
                    .col(integer(Substitution::PlayerInId))
                    .col(integer(Substitution::PlayerOutId))
                    .col(integer(Substitution::Minute))
                    .col(timestamp(Substitution::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBSTITUTION_MATCH_ID)
                    .table(Substitution::Table)
                    .col(Substitution::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSTITUTION_MATCH_ID)
                    .from_tbl(Substitution::Table)
                    .from_col(Substitution::MatchId)
                    .to_tbl(FootballMatch::Table)
                    .to_col(FootballMatch::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSTITUTION_PLAYER_IN_ID)
                    .from_tbl(Substitution::Table)
                    .from_col(Substitution::PlayerInId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSTITUTION_PLAYER_OUT_ID)
                    .from_tbl(Substitution::Table)
                    .from_col(Substitution::PlayerOutId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Substitution::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Substitution {
    Table,
    Id,
    MatchId,
    PlayerInId,
    PlayerOutId,
    Minute,
    CreatedAt,
}
