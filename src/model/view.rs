//! View documents rendered by the dashboard controllers.
//!
//! Every view carries a [`LayoutDto`] with the signed-in user and the one-shot session state
//! (flash message, validation errors and previous input) left behind by the last redirect.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{RoleChoiceDto, UserDto, UserForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// Notice shown once on the next rendered view
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlashDto {
    pub level: FlashLevel,
    pub message: String,
}

/// Form input re-offered to a form after failed validation, never contains passwords
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OldInputDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<&UserForm> for OldInputDto {
    fn from(form: &UserForm) -> Self {
        Self {
            email: form.email.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            roles: form.roles.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LayoutDto {
    pub current_user: Option<UserDto>,
    pub flash: Option<FlashDto>,
    pub errors: BTreeMap<String, Vec<String>>,
    pub old_input: Option<OldInputDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginViewDto {
    pub view: String,
    pub layout: LayoutDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersIndexViewDto {
    pub view: String,
    pub layout: LayoutDto,
    pub users: Vec<UserDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserCreateViewDto {
    pub view: String,
    pub layout: LayoutDto,
    pub roles: Vec<RoleChoiceDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEditViewDto {
    pub view: String,
    pub layout: LayoutDto,
    pub user: UserDto,
    /// Names of the user's roles sorted & comma separated, `Not Available` without roles
    pub current_roles: String,
    pub roles: Vec<RoleChoiceDto>,
}
