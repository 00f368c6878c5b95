//! Append-only event tables: goal, assist and card.
//!
//! The three tables share the `match_id` / `player_id` / `minute` shape, so the
//! index and foreign keys are created by one helper.

use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000002_player::Player, m20260301_000003_football_match::FootballMatch};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Goal::Table)
                    .if_not_exists()
                    .col(pk_auto(Goal::Id))
                    .col(integer(Goal::MatchId))
                    .col(integer(Goal::PlayerId))
                    .col(integer(Goal::Minute))
                    .col(boolean(Goal::IsOwnGoal).default(false))
                    .col(timestamp(Goal::CreatedAt))
                    .to_owned(),
            )
            .await?;
        create_event_keys(manager, "goal", Goal::Table, Goal::MatchId, Goal::PlayerId).await?;

        manager
            .create_table(
                Table::create()
                    .table(Assist::Table)
                    .if_not_exists()
                    .col(pk_auto(Assist::Id))
                    .col(integer(Assist::MatchId))
                    .col(integer(Assist::PlayerId))
                    .col(integer(Assist::Minute))
                    .col(timestamp(Assist::CreatedAt))
                    .to_owned(),
            )
            .await?;
        create_event_keys(
            manager,
            "assist",
            Assist::Table,
            Assist::MatchId,
            Assist::PlayerId,
        )
        .await?;

        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(integer(Card::MatchId))
                    .col(integer(Card::PlayerId))
                    .col(integer(Card::Minute))
                    .col(string_len(Card::CardType, 16))
                    .col(string_null(Card::Reason))
                    .col(timestamp(Card::CreatedAt))
                    .to_owned(),
            )
            .await?;
        create_event_keys(manager, "card", Card::Table, Card::MatchId, Card::PlayerId).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assist::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Goal::Table).to_owned())
            .await?;

        Ok(())
    }
}

async fn create_event_keys<T, C>(
    manager: &SchemaManager<'_>,
    name: &str,
    table: T,
    match_col: C,
    player_col: C,
) -> Result<(), DbErr>
where
    T: IntoIden + Clone + 'static,
    C: IntoIden + Clone + 'static,
{
    manager
        .create_index(
            Index::create()
                .name(format!("idx-{}-match_id", name))
                .table(table.clone())
                .col(match_col.clone())
                .to_owned(),
        )
        .await?;

    manager
        .create_foreign_key(
            ForeignKey::create()
                .name(format!("fk-{}-match_id", name))
                .from_tbl(table.clone())
                .from_col(match_col)
                .to_tbl(FootballMatch::Table)
                .to_col(FootballMatch::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .to_owned(),
        )
        .await?;

    manager
        .create_foreign_key(
            ForeignKey::create()
                .name(format!("fk-{}-player_id", name))
                .from_tbl(table)
                .from_col(player_col)
                .to_tbl(Player::Table)
                .to_col(Player::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .to_owned(),
        )
        .await?;

    Ok(())
}

#[derive(DeriveIden, Clone)]
enum Goal {
    Table,
    Id,
    MatchId,
    PlayerId,
    Minute,
    IsOwnGoal,
    CreatedAt,
}

#[derive(DeriveIden, Clone)]
enum Assist {
    Table,
    Id,
    MatchId,
    PlayerId,
    Minute,
    CreatedAt,
}

#[derive(DeriveIden, Clone)]
enum Card {
    Table,
    Id,
    MatchId,
    PlayerId,
    Minute,
    CardType,
    Reason,
    CreatedAt,
}
