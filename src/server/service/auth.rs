use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::session::user::SessionUserId,
        service::{retry::RetryContext, user::user_dto},
        util::password::verify_password,
    },
};

/// Service for signing dashboard users in & out with their email and password.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a user's credentials.
    ///
    /// The email is matched trimmed & lower-cased, the same way it is stored.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - The credentials belong to this user
    /// - `Ok(None)` - No user with that email or the password is wrong
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    /// - `Err(Error::PasswordHashError)` - The stored password hash is malformed
    pub async fn attempt(&self, email: &str, password: &str) -> Result<Option<UserDto>, Error> {
        let email = email.trim().to_lowercase();
        let email = email.as_str();
        let db = self.db;

        let Some(user) = RetryContext::new()
            .execute_with_retry("find user by email", || async move {
                Ok::<_, Error>(UserRepository::new(db).find_by_email(email).await?)
            })
            .await?
        else {
            tracing::debug!("Sign in attempt for unknown email");
            return Ok(None);
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Sign in attempt with wrong password");
            return Ok(None);
        }

        self.load_user(user.id).await
    }

    /// Signs a user in, a fresh session ID is issued to prevent session fixation
    pub async fn login(&self, session: &Session, user_id: i32) -> Result<(), Error> {
        session.cycle_id().await?;
        SessionUserId::insert(session, user_id).await?;

        tracing::info!(user_id = %user_id, "Dashboard user signed in");

        Ok(())
    }

    /// Signs the current user out by clearing the session
    pub async fn logout(&self, session: &Session) -> Result<(), Error> {
        if let Some(user_id) = SessionUserId::get(session).await? {
            session.flush().await?;

            tracing::info!(user_id = %user_id, "Dashboard user signed out");
        }

        Ok(())
    }

    /// Loads the user signed in to the session.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The signed-in user
    /// - `Err(Error::AuthError(AuthError::UserNotInSession))` - Nobody is signed in
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - The user was deleted, the
    ///   session is cleared
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn user_from_session(&self, session: &Session) -> Result<UserDto, Error> {
        let Some(user_id) = SessionUserId::get(session).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        match self.load_user(user_id).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!(user_id = %user_id, "Clearing session of user no longer in database");
                session.flush().await?;

                Err(AuthError::UserNotInDatabase(user_id).into())
            }
        }
    }

    async fn load_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let db = self.db;

        RetryContext::new()
            .execute_with_retry(&format!("get user ID {} with roles", user_id), || async move {
                let user = UserRepository::new(db).get_by_id_with_roles(user_id).await?;

                Ok::<_, Error>(user.map(|(user, roles)| user_dto(user, roles)))
            })
            .await
    }
}
