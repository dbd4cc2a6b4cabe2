use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient connection errors)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                // Query, constraint & conversion errors won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Could be a Redis connection hiccup
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_)
            | Self::AuthError(_)
            | Self::UserError(_)
            | Self::ValidationError(_)
            | Self::ParseError(_)
            | Self::InternalError(_)
            | Self::PasswordHashError(_)
            | Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
