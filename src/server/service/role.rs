use sea_orm::DatabaseConnection;

use crate::{
    model::user::RoleDto,
    server::{
        data::role::RoleRepository, error::Error, model::db::RoleModel,
        service::retry::RetryContext,
    },
};

/// Converts a role record into its transfer object
pub fn role_dto(role: RoleModel) -> RoleDto {
    RoleDto {
        id: role.id,
        slug: role.slug,
        name: role.name,
    }
}

/// Service for reading the roles assignable to dashboard users.
pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every role ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<RoleDto>)` - All roles, empty when none exist
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_all(&self) -> Result<Vec<RoleDto>, Error> {
        let db = self.db;

        RetryContext::new()
            .execute_with_retry("get all roles", || async move {
                let roles = RoleRepository::new(db).get_all().await?;

                Ok::<_, Error>(roles.into_iter().map(role_dto).collect::<Vec<_>>())
            })
            .await
    }
}
