use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261017_000001_create_dashboard_user_table::DashboardUser,
    m20261017_000002_create_dashboard_role_table::DashboardRole,
};

static IDX_USER_ROLE_ROLE_ID: &str = "idx_dashboard_user_role_role_id";
static FK_USER_ROLE_USER_ID: &str = "fk_dashboard_user_role_user_id";
static FK_USER_ROLE_ROLE_ID: &str = "fk_dashboard_user_role_role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DashboardUserRole::Table)
                    .if_not_exists()
                    .col(integer(DashboardUserRole::UserId))
                    .col(integer(DashboardUserRole::RoleId))
                    .primary_key(
                        Index::create()
                            .col(DashboardUserRole::UserId)
                            .col(DashboardUserRole::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_ROLE_USER_ID)
                            .from(DashboardUserRole::Table, DashboardUserRole::UserId)
                            .to(DashboardUser::Table, DashboardUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_ROLE_ROLE_ID)
                            .from(DashboardUserRole::Table, DashboardUserRole::RoleId)
                            .to(DashboardRole::Table, DashboardRole::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by user are covered by the composite primary key
        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_ROLE_ROLE_ID)
                    .table(DashboardUserRole::Table)
                    .col(DashboardUserRole::RoleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_ROLE_ROLE_ID)
                    .table(DashboardUserRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DashboardUserRole::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DashboardUserRole {
    Table,
    UserId,
    RoleId,
}
