//! Validation of the create & edit user forms.
//!
//! Field constraints declared on [`UserForm`] are checked with `validator`, the rules that
//! need the database (unique email, existing roles) and the password rules that differ between
//! creating & updating are checked here.

use std::collections::{BTreeMap, BTreeSet};

use sea_orm::ConnectionTrait;
use validator::Validate;

use crate::{
    model::user::UserForm,
    server::{
        data::{role::RoleRepository, user::UserRepository},
        error::{validation::ValidationError, Error},
        model::db::RoleModel,
    },
};

pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Which form is being validated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// Password is required
    Create,
    /// Password is optional, the user keeps their own email
    Update { user_id: i32 },
}

/// Collects messages per form field
#[derive(Default)]
struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

pub struct UserFormValidator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserFormValidator<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Validates a normalized form, returning the roles its slugs resolve to
    ///
    /// # Returns
    /// - `Ok(Vec<RoleModel>)` - Form is valid, roles selected by the form ordered by ID
    /// - `Err(Error::ValidationError)` - One or more fields are invalid
    /// - `Err(Error::DbErr)` - Database lookup failed
    pub async fn validate(&self, form: &UserForm, mode: FormMode) -> Result<Vec<RoleModel>, Error> {
        let mut errors = FieldErrors::default();

        if form.email.is_empty() {
            errors.add("email", "The email field is required.");
        }

        if let Err(validation_errors) = form.validate() {
            for (field, field_errors) in validation_errors.field_errors() {
                // An empty email is already reported as missing
                if field == "email" && form.email.is_empty() {
                    continue;
                }

                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("The {} field is invalid.", field));
                    errors.add(&field, message);
                }
            }
        }

        self.validate_password(form, mode, &mut errors);

        if !errors.has("email") {
            self.validate_unique_email(&form.email, mode, &mut errors)
                .await?;
        }

        let roles = self.resolve_roles(&form.roles, &mut errors).await?;

        if !errors.0.is_empty() {
            return Err(ValidationError::new(errors.0).into());
        }

        Ok(roles)
    }

    fn validate_password(&self, form: &UserForm, mode: FormMode, errors: &mut FieldErrors) {
        if form.password.is_empty() {
            if mode == FormMode::Create {
                errors.add("password", "The password field is required.");
            }
            return;
        }

        if form.password.chars().count() < PASSWORD_MIN_LENGTH {
            errors.add(
                "password",
                format!(
                    "The password must be at least {} characters.",
                    PASSWORD_MIN_LENGTH
                ),
            );
        }

        if form.password != form.password_confirmation {
            errors.add("password", "The password confirmation does not match.");
        }
    }

    async fn validate_unique_email(
        &self,
        email: &str,
        mode: FormMode,
        errors: &mut FieldErrors,
    ) -> Result<(), Error> {
        let Some(existing) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Ok(());
        };

        let is_own_email = matches!(mode, FormMode::Update { user_id } if user_id == existing.id);
        if !is_own_email {
            errors.add("email", "The email has already been taken.");
        }

        Ok(())
    }

    async fn resolve_roles(
        &self,
        slugs: &[String],
        errors: &mut FieldErrors,
    ) -> Result<Vec<RoleModel>, Error> {
        let requested: BTreeSet<&String> = slugs.iter().collect();
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let lookup: Vec<String> = requested.iter().map(|s| s.to_string()).collect();
        let roles = RoleRepository::new(self.db).get_by_slugs(&lookup).await?;

        for slug in requested {
            if !roles.iter().any(|role| &role.slug == slug) {
                errors.add("roles", format!("The selected role {} is invalid.", slug));
            }
        }

        Ok(roles)
    }
}
