use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DashboardUser::Table)
                    .if_not_exists()
                    .col(pk_auto(DashboardUser::Id))
                    .col(string_uniq(DashboardUser::Email))
                    .col(string(DashboardUser::PasswordHash))
                    .col(string_null(DashboardUser::FirstName))
                    .col(string_null(DashboardUser::LastName))
                    .col(timestamp(DashboardUser::CreatedAt))
                    .col(timestamp(DashboardUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DashboardUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DashboardUser {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    CreatedAt,
    UpdatedAt,
}
