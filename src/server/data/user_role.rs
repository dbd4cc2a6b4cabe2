use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::RoleModel;

pub struct UserRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRoleRepository<'a, C> {
    /// Creates a new instance of [`UserRoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the roles assigned to a user ordered by role ID
    pub async fn get_roles_by_user_id(&self, user_id: i32) -> Result<Vec<RoleModel>, DbErr> {
        let assignments = entity::prelude::DashboardUserRole::find()
            .filter(entity::dashboard_user_role::Column::UserId.eq(user_id))
            .order_by_asc(entity::dashboard_user_role::Column::RoleId)
            .find_also_related(entity::prelude::DashboardRole)
            .all(self.db)
            .await?;

        Ok(assignments.into_iter().filter_map(|(_, role)| role).collect())
    }

    /// Replaces the roles assigned to a user with `role_ids`
    ///
    /// Should be run inside of a transaction so the user is never left without the
    /// previous or the new role set.
    pub async fn replace_user_roles(&self, user_id: i32, role_ids: &[i32]) -> Result<(), DbErr> {
        self.delete_by_user_id(user_id).await?;

        if role_ids.is_empty() {
            return Ok(());
        }

        let assignments = role_ids
            .iter()
            .map(|role_id| entity::dashboard_user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                role_id: ActiveValue::Set(*role_id),
            });

        entity::prelude::DashboardUserRole::insert_many(assignments)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes every role assignment of a user
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DashboardUserRole::delete_many()
            .filter(entity::dashboard_user_role::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
