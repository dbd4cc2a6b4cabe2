use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DashboardRole::Table)
                    .if_not_exists()
                    .col(pk_auto(DashboardRole::Id))
                    .col(string_uniq(DashboardRole::Slug))
                    .col(string(DashboardRole::Name))
                    .col(timestamp(DashboardRole::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DashboardRole::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DashboardRole {
    Table,
    Id,
    Slug,
    Name,
    CreatedAt,
}
