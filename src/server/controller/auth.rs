use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::Form;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::LoginForm,
        view::{FlashLevel, LoginViewDto, OldInputDto},
    },
    server::{
        controller::{
            user::USERS_INDEX_PATH,
            util::view::{layout, redirect_with_flash},
        },
        error::{auth::AuthError, Error},
        model::{app::AppState, session::form::SessionFormInput},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

pub static LOGIN_PATH: &str = "/dashboard/login";

pub static LOGIN_SUCCESS_MESSAGE: &str = "Successfully signed in.";

/// Show the login form
///
/// # Responses
/// - 200 (Success): The `auth.login` view with any flash message & the previous email
/// - 500 (Internal Server Error): Session failure
#[utoipa::path(
    get,
    path = "/dashboard/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The auth.login view", body = LoginViewDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_form(session: Session) -> Result<impl IntoResponse, Error> {
    Ok(Json(LoginViewDto {
        view: "auth.login".to_string(),
        layout: layout(&session, None).await?,
    }))
}

/// Sign in with email & password
///
/// # Responses
/// - 303 (See Other): Signed in, redirect to `users.index`; or invalid credentials, redirect
///   back to the login form
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    post,
    path = "/dashboard/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to users.index on success, back to login otherwise"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.db);

    let Some(user) = auth_service.attempt(&form.email, &form.password).await? else {
        SessionFormInput::insert(
            &session,
            &OldInputDto {
                email: form.email,
                ..Default::default()
            },
        )
        .await?;

        return redirect_with_flash(
            &session,
            FlashLevel::Error,
            &AuthError::InvalidCredentials.to_string(),
            LOGIN_PATH,
        )
        .await;
    };

    auth_service.login(&session, user.id).await?;

    redirect_with_flash(
        &session,
        FlashLevel::Success,
        LOGIN_SUCCESS_MESSAGE,
        USERS_INDEX_PATH,
    )
    .await
}

/// Sign out by clearing the session
///
/// # Responses
/// - 303 (See Other): Signed out, redirect to the login form
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/dashboard/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Redirect to the login form"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db).logout(&session).await?;

    Ok(Redirect::to(LOGIN_PATH))
}
