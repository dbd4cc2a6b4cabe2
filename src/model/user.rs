use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoleDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
}

/// A role offered in the role selector of the user forms
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoleChoiceDto {
    pub slug: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Vec<RoleDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input submitted by the create & edit user forms.
///
/// `password` may be left empty when editing a user to keep their current password.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserForm {
    #[serde(default)]
    #[validate(
        email(message = "The email must be a valid email address."),
        length(max = 255, message = "The email may not be greater than 255 characters.")
    )]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
    #[serde(default)]
    #[validate(length(
        max = 255,
        message = "The first name may not be greater than 255 characters."
    ))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(
        max = 255,
        message = "The last name may not be greater than 255 characters."
    ))]
    pub last_name: String,
    /// Slugs of the roles to assign
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserForm {
    /// Returns a copy with the email trimmed & lower-cased and names trimmed
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            roles: self.roles.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
