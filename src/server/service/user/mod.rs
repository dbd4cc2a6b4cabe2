//! User service layer.
//!
//! This module contains the business logic for managing dashboard user accounts & their role
//! assignments. Reads use retry logic for transient failures, writes validate the submitted
//! form and run inside of a single transaction.

pub mod validation;


use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{UserDto, UserForm},
    server::{
        data::{
            user::{UserRepository, UserUpdate},
            user_role::UserRoleRepository,
        },
        error::{user::UserError, Error},
        model::db::{RoleModel, UserModel},
        service::{
            retry::RetryContext,
            role::role_dto,
            user::validation::{FormMode, UserFormValidator},
        },
        util::password::hash_password,
    },
};

/// Converts a user record & its roles into a transfer object
pub fn user_dto(user: UserModel, roles: Vec<RoleModel>) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        roles: roles.into_iter().map(role_dto).collect(),
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

/// Empty optional form fields are stored as NULL
fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Service for managing dashboard user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user with their roles, ordered by user ID.
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)` - All users, empty when none exist
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_all_with_roles(&self) -> Result<Vec<UserDto>, Error> {
        let db = self.db;

        RetryContext::new()
            .execute_with_retry("get all users with roles", || async move {
                let users = UserRepository::new(db).get_all_with_roles().await?;

                Ok::<_, Error>(
                    users
                        .into_iter()
                        .map(|(user, roles)| user_dto(user, roles))
                        .collect::<Vec<_>>(),
                )
            })
            .await
    }

    /// Retrieves a user with their roles.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_by_id_with_roles(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let db = self.db;

        RetryContext::new()
            .execute_with_retry(&format!("get user ID {} with roles", user_id), || async move {
                let user = UserRepository::new(db).get_by_id_with_roles(user_id).await?;

                Ok::<_, Error>(user.map(|(user, roles)| user_dto(user, roles)))
            })
            .await
    }

    /// Creates a user with the roles selected on the form.
    ///
    /// The email is trimmed & lower-cased before validation, the password is stored as an
    /// Argon2 hash.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user with their roles
    /// - `Err(Error::ValidationError)` - The form is invalid
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, form: &UserForm) -> Result<UserDto, Error> {
        let form = form.normalized();

        let roles = UserFormValidator::new(self.db)
            .validate(&form, FormMode::Create)
            .await?;

        let password_hash = hash_password(&form.password)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(
                &form.email,
                &password_hash,
                optional(&form.first_name),
                optional(&form.last_name),
            )
            .await?;

        let role_ids: Vec<i32> = roles.iter().map(|r| r.id).collect();
        UserRoleRepository::new(&txn)
            .replace_user_roles(user.id, &role_ids)
            .await?;

        txn.commit().await?;

        tracing::info!(user_id = %user.id, roles = ?role_ids, "Created dashboard user");

        Ok(user_dto(user, roles))
    }

    /// Updates a user's details & replaces their roles with the ones selected on the form.
    ///
    /// An empty password keeps the user's current password.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user with their roles
    /// - `Err(Error::UserError(UserError::NotFound))` - No user with `user_id` exists
    /// - `Err(Error::ValidationError)` - The form is invalid
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, form: &UserForm, user_id: i32) -> Result<UserDto, Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(UserError::NotFound(user_id).into());
        }

        let form = form.normalized();

        let roles = UserFormValidator::new(self.db)
            .validate(&form, FormMode::Update { user_id })
            .await?;

        let password_hash = if form.password.is_empty() {
            None
        } else {
            Some(hash_password(&form.password)?)
        };

        let txn = self.db.begin().await?;

        let Some(user) = UserRepository::new(&txn)
            .update(
                user_id,
                UserUpdate {
                    email: form.email.clone(),
                    first_name: optional(&form.first_name),
                    last_name: optional(&form.last_name),
                    password_hash,
                },
            )
            .await?
        else {
            // Deleted between the lookup & the update
            return Err(UserError::NotFound(user_id).into());
        };

        let role_ids: Vec<i32> = roles.iter().map(|r| r.id).collect();
        UserRoleRepository::new(&txn)
            .replace_user_roles(user.id, &role_ids)
            .await?;

        txn.commit().await?;

        tracing::info!(user_id = %user.id, roles = ?role_ids, "Updated dashboard user");

        Ok(user_dto(user, roles))
    }

    /// Deletes a user along with their role assignments.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(Error::UserError(UserError::NotFound))` - No user with `user_id` exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        UserRoleRepository::new(&txn)
            .delete_by_user_id(user_id)
            .await?;

        let result = UserRepository::new(&txn).delete(user_id).await?;
        if result.rows_affected == 0 {
            // Transaction is rolled back when dropped
            return Err(UserError::NotFound(user_id).into());
        }

        txn.commit().await?;

        tracing::info!(user_id = %user_id, "Deleted dashboard user");

        Ok(())
    }
}
