use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::Form;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{RoleChoiceDto, RoleDto, UserDto, UserForm},
        view::{
            FlashLevel, OldInputDto, UserCreateViewDto, UserEditViewDto, UsersIndexViewDto,
        },
    },
    server::{
        controller::util::{
            auth::AuthenticatedUser,
            view::{layout, redirect_with_errors, redirect_with_flash},
        },
        error::{user::UserError, Error},
        model::app::AppState,
        service::{role::RoleService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

pub static USERS_INDEX_PATH: &str = "/dashboard/users";
pub static USERS_CREATE_PATH: &str = "/dashboard/users/create";

pub static USER_CREATED_MESSAGE: &str = "User successfully created.";
pub static USER_UPDATED_MESSAGE: &str = "User successfully updated.";
pub static USER_DELETED_MESSAGE: &str = "User successfully deleted.";

/// Shown in place of the role list for a user without roles
pub static NO_ROLES_LABEL: &str = "Not Available";

pub fn user_edit_path(user_id: i32) -> String {
    format!("/dashboard/users/{}/edit", user_id)
}

/// Names of the user's roles sorted & joined by `", "`
pub fn current_roles_label(user: &UserDto) -> String {
    if user.roles.is_empty() {
        return NO_ROLES_LABEL.to_string();
    }

    let mut names: Vec<&str> = user.roles.iter().map(|r| r.name.as_str()).collect();
    names.sort_unstable();
    names.join(", ")
}

/// Role selector choices in the order the roles were created
pub fn role_choices(roles: Vec<RoleDto>) -> Vec<RoleChoiceDto> {
    roles
        .into_iter()
        .map(|role| RoleChoiceDto {
            slug: role.slug,
            name: role.name,
        })
        .collect()
}

/// Form input kept for the next request, passwords are never kept
fn old_input(form: &UserForm) -> OldInputDto {
    OldInputDto::from(form)
}

/// List every user along with their roles
///
/// # Responses
/// - 200 (Success): The `users.index` view
/// - 303 (See Other): Nobody is signed in, redirect to the login page
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    get,
    path = "/dashboard/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The users.index view", body = UsersIndexViewDto),
        (status = 303, description = "Not signed in, redirect to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    AuthenticatedUser(current_user): AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all_with_roles().await?;

    Ok(Json(UsersIndexViewDto {
        view: "users.index".to_string(),
        layout: layout(&session, Some(current_user)).await?,
        users,
    }))
}

/// Show the form to create a user
///
/// # Responses
/// - 200 (Success): The `users.create` view with the role choices, empty without roles
/// - 303 (See Other): Nobody is signed in, redirect to the login page
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    get,
    path = "/dashboard/users/create",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The users.create view", body = UserCreateViewDto),
        (status = 303, description = "Not signed in, redirect to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    AuthenticatedUser(current_user): AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let roles = RoleService::new(&state.db).get_all().await?;

    Ok(Json(UserCreateViewDto {
        view: "users.create".to_string(),
        layout: layout(&session, Some(current_user)).await?,
        roles: role_choices(roles),
    }))
}

/// Create a user from the submitted form
///
/// # Responses
/// - 303 (See Other): Created, redirect to `users.index`; or the form is invalid, redirect
///   back to `users.create` with the errors & input in session
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    post,
    path = "/dashboard/users",
    tag = USER_TAG,
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to users.index on success, users.create on invalid input"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn store(
    State(state): State<AppState>,
    session: Session,
    _user: AuthenticatedUser,
    Form(form): Form<UserForm>,
) -> Result<Response, Error> {
    match UserService::new(&state.db).create(&form).await {
        Ok(_) => {
            redirect_with_flash(
                &session,
                FlashLevel::Success,
                USER_CREATED_MESSAGE,
                USERS_INDEX_PATH,
            )
            .await
        }
        Err(Error::ValidationError(err)) => {
            redirect_with_errors(&session, &err, old_input(&form), USERS_CREATE_PATH).await
        }
        Err(err) => Err(err),
    }
}

/// Show the form to edit a user
///
/// # Responses
/// - 200 (Success): The `users.edit` view with the user, their current roles & the role choices
/// - 303 (See Other): The user does not exist, redirect to `users.index`
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    get,
    path = "/dashboard/users/{id}/edit",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user to edit")),
    responses(
        (status = 200, description = "The users.edit view", body = UserEditViewDto),
        (status = 303, description = "User does not exist, redirect to users.index"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    AuthenticatedUser(current_user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let Some(user) = UserService::new(&state.db).get_by_id_with_roles(id).await? else {
        return redirect_with_flash(
            &session,
            FlashLevel::Error,
            &UserError::NotFound(id).to_string(),
            USERS_INDEX_PATH,
        )
        .await;
    };

    let roles = RoleService::new(&state.db).get_all().await?;

    Ok(Json(UserEditViewDto {
        view: "users.edit".to_string(),
        layout: layout(&session, Some(current_user)).await?,
        current_roles: current_roles_label(&user),
        user,
        roles: role_choices(roles),
    })
    .into_response())
}

/// Update a user from the submitted form
///
/// # Responses
/// - 303 (See Other): Updated or invalid, redirect to `users.edit`; the user does not exist,
///   redirect to `users.index`
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    put,
    path = "/dashboard/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user to update")),
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to users.edit, or users.index when the user does not exist"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
    Form(form): Form<UserForm>,
) -> Result<Response, Error> {
    match UserService::new(&state.db).update(&form, id).await {
        Ok(_) => {
            redirect_with_flash(
                &session,
                FlashLevel::Success,
                USER_UPDATED_MESSAGE,
                &user_edit_path(id),
            )
            .await
        }
        Err(Error::ValidationError(err)) => {
            redirect_with_errors(&session, &err, old_input(&form), &user_edit_path(id)).await
        }
        Err(Error::UserError(err)) => {
            redirect_with_flash(
                &session,
                FlashLevel::Error,
                &err.to_string(),
                USERS_INDEX_PATH,
            )
            .await
        }
        Err(err) => Err(err),
    }
}

/// Delete a user
///
/// # Responses
/// - 303 (See Other): Deleted or the user does not exist, redirect to `users.index`
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    delete,
    path = "/dashboard/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user to delete")),
    responses(
        (status = 303, description = "Redirect to users.index"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    match UserService::new(&state.db).delete(id).await {
        Ok(()) => {
            redirect_with_flash(
                &session,
                FlashLevel::Success,
                USER_DELETED_MESSAGE,
                USERS_INDEX_PATH,
            )
            .await
        }
        Err(Error::UserError(err)) => {
            redirect_with_flash(
                &session,
                FlashLevel::Error,
                &err.to_string(),
                USERS_INDEX_PATH,
            )
            .await
        }
        Err(err) => Err(err),
    }
}
