pub use sea_orm_migration::prelude::*;

mod m20261017_000001_create_dashboard_user_table;
mod m20261017_000002_create_dashboard_role_table;
mod m20261017_000003_create_dashboard_user_role_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_create_dashboard_user_table::Migration),
            Box::new(m20261017_000002_create_dashboard_role_table::Migration),
            Box::new(m20261017_000003_create_dashboard_user_role_table::Migration),
        ]
    }
}
