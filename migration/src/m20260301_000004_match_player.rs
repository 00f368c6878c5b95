use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000002_player::Player, m20260301_000003_football_match::FootballMatch};

static IDX_MATCH_PLAYER_MATCH_ID: &str = "idx-match_player-match_id";
static IDX_MATCH_PLAYER_MATCH_ID_PLAYER_ID: &str = "idx-match_player-match_id-player_id";
static FK_MATCH_PLAYER_MATCH_ID: &str = "fk-match_player-match_id";
static FK_MATCH_PLAYER_PLAYER_ID: &str = "fk-match_player-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchPlayer::Id))
                    .col(integer(MatchPlayer::MatchId))
                    .col(integer(MatchPlayer::PlayerId))
                    .col(boolean(MatchPlayer::IsStarter))
                    .col(string_len(MatchPlayer::Position, 16))
                    .col(integer(MatchPlayer::MinutesPlayed).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_PLAYER_MATCH_ID)
                    .table(MatchPlayer::Table)
                    .col(MatchPlayer::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_PLAYER_MATCH_ID_PLAYER_ID)
                    .table(MatchPlayer::Table)
                    .col(MatchPlayer::MatchId)
                    .col(MatchPlayer::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_PLAYER_MATCH_ID)
                    .from_tbl(MatchPlayer::Table)
                    .from_col(MatchPlayer::MatchId)
                    .to_tbl(FootballMatch::Table)
                    .to_col(FootballMatch::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_PLAYER_PLAYER_ID)
                    .from_tbl(MatchPlayer::Table)
                    .from_col(MatchPlayer::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_MATCH_PLAYER_PLAYER_ID, FK_MATCH_PLAYER_MATCH_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(MatchPlayer::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_MATCH_PLAYER_MATCH_ID_PLAYER_ID, IDX_MATCH_PLAYER_MATCH_ID] {
            manager
                .drop_index(Index::drop().name(idx).table(MatchPlayer::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(MatchPlayer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MatchPlayer {
    Table,
    Id,
    MatchId,
    PlayerId,
    IsStarter,
    Position,
    MinutesPlayed,
}
