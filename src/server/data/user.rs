use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{RoleModel, UserModel};

/// Field values written by [`UserRepository::update`]
///
/// `password_hash` of `None` leaves the stored hash untouched.
pub struct UserUpdate {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::dashboard_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::DashboardUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets a user along with their roles ordered by role ID
    pub async fn get_by_id_with_roles(
        &self,
        user_id: i32,
    ) -> Result<Option<(UserModel, Vec<RoleModel>)>, DbErr> {
        let Some(user) = self.get_by_id(user_id).await? else {
            return Ok(None);
        };

        let roles = user
            .find_related(entity::prelude::DashboardRole)
            .order_by_asc(entity::dashboard_role::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((user, roles)))
    }

    /// Gets every user ordered by ID, each with their roles ordered by role ID
    pub async fn get_all_with_roles(&self) -> Result<Vec<(UserModel, Vec<RoleModel>)>, DbErr> {
        let users = entity::prelude::DashboardUser::find()
            .order_by_asc(entity::dashboard_user::Column::Id)
            .all(self.db)
            .await?;

        if users.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<i32> = users.iter().map(|u| u.id).collect();

        let assignments = entity::prelude::DashboardUserRole::find()
            .filter(entity::dashboard_user_role::Column::UserId.is_in(user_ids))
            .order_by_asc(entity::dashboard_user_role::Column::RoleId)
            .find_also_related(entity::prelude::DashboardRole)
            .all(self.db)
            .await?;

        let mut roles_by_user: HashMap<i32, Vec<RoleModel>> = HashMap::new();
        for (assignment, role) in assignments {
            if let Some(role) = role {
                roles_by_user
                    .entry(assignment.user_id)
                    .or_default()
                    .push(role);
            }
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let roles = roles_by_user.remove(&user.id).unwrap_or_default();
                (user, roles)
            })
            .collect())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::DashboardUser::find()
            .filter(entity::dashboard_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates a user, returns `Ok(None)` if the user does not exist
    pub async fn update(
        &self,
        user_id: i32,
        changes: UserUpdate,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.email = ActiveValue::Set(changes.email);
        user_am.first_name = ActiveValue::Set(changes.first_name);
        user_am.last_name = ActiveValue::Set(changes.last_name);
        if let Some(password_hash) = changes.password_hash {
            user_am.password_hash = ActiveValue::Set(password_hash);
        }
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DashboardUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::DashboardUser::find().count(self.db).await
    }
}
