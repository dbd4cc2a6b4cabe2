use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::{
    model::{
        user::UserDto,
        view::{FlashLevel, LayoutDto, OldInputDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::session::{
            flash::SessionFlash,
            form::{SessionFormErrors, SessionFormInput},
        },
    },
};

/// Builds the layout of a view, consuming the one-shot state left in the session
pub async fn layout(session: &Session, current_user: Option<UserDto>) -> Result<LayoutDto, Error> {
    Ok(LayoutDto {
        current_user,
        flash: SessionFlash::take(session).await?,
        errors: SessionFormErrors::take(session).await?,
        old_input: SessionFormInput::take(session).await?,
    })
}

/// Sends the user back to a form after failed validation
///
/// Flashes the failure message and keeps the field errors & submitted input for the form to
/// re-render on the next request.
pub async fn redirect_with_errors(
    session: &Session,
    err: &ValidationError,
    input: OldInputDto,
    to: &str,
) -> Result<Response, Error> {
    SessionFlash::error(session, &err.message).await?;
    SessionFormErrors::insert(session, &err.errors).await?;
    SessionFormInput::insert(session, &input).await?;

    Ok(Redirect::to(to).into_response())
}

/// Flashes a message and redirects
pub async fn redirect_with_flash(
    session: &Session,
    level: FlashLevel,
    message: &str,
    to: &str,
) -> Result<Response, Error> {
    SessionFlash::insert(session, level, message).await?;

    Ok(Redirect::to(to).into_response())
}
