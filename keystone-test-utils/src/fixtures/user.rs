use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};

use crate::{
    constant::{TEST_FIRST_NAME, TEST_LAST_NAME, TEST_PASSWORD},
    error::TestError,
    model::{RoleModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user signing in with [`TEST_PASSWORD`]
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        self.insert_user_with_password(email, TEST_PASSWORD).await
    }

    pub async fn insert_user_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserModel, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::DashboardUser::insert(entity::dashboard_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                first_name: ActiveValue::Set(Some(TEST_FIRST_NAME.to_string())),
                last_name: ActiveValue::Set(Some(TEST_LAST_NAME.to_string())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn assign_role(&self, user_id: i32, role_id: i32) -> Result<(), TestError> {
        entity::prelude::DashboardUserRole::insert(entity::dashboard_user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Get a user inserted earlier, Error if it does not exist
    pub async fn find_by_email(&self, email: &str) -> Result<UserModel, TestError> {
        entity::prelude::DashboardUser::find()
            .filter(entity::dashboard_user::Column::Email.eq(email))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| TestError::FixtureNotFound(format!("user {}", email)))
    }

    /// Get the roles assigned to a user ordered by role ID
    pub async fn roles_of(&self, user_id: i32) -> Result<Vec<RoleModel>, TestError> {
        let Some(user) = entity::prelude::DashboardUser::find_by_id(user_id)
            .one(&self.setup.db)
            .await?
        else {
            return Err(TestError::FixtureNotFound(format!("user ID {}", user_id)));
        };

        Ok(user
            .find_related(entity::prelude::DashboardRole)
            .order_by_asc(entity::dashboard_role::Column::Id)
            .all(&self.setup.db)
            .await?)
    }
}
