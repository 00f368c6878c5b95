use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAM_OWNER_USER_ID: &str = "idx-team-owner_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer(Team::OwnerUserId))
                    .col(string(Team::Name))
                    .col(timestamp(Team::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_OWNER_USER_ID)
                    .table(Team::Table)
                    .col(Team::OwnerUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_OWNER_USER_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    OwnerUserId,
    Name,
    CreatedAt,
}
