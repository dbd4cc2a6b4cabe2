use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        controller::auth::LOGIN_PATH,
        error::Error,
        model::app::AppState,
        service::auth::AuthService,
    },
};

/// Extractor for the signed-in dashboard user.
///
/// Handlers taking this extractor are only reached with a user in session, anyone else is
/// redirected to the login page. A session whose user was deleted is cleared first.
pub struct AuthenticatedUser(pub UserDto);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|rejection| rejection.into_response())?;

        match AuthService::new(&state.db).user_from_session(&session).await {
            Ok(user) => Ok(Self(user)),
            Err(Error::AuthError(err)) => {
                tracing::debug!("Redirecting to login: {}", err);

                Err(Redirect::to(LOGIN_PATH).into_response())
            }
            Err(err) => Err(err.into_response()),
        }
    }
}
