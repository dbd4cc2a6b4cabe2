use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error("Password hash error: {0}")]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// A fixture looked up a record that was never inserted
    #[error("Fixture not found: {0}")]
    FixtureNotFound(String),
}
