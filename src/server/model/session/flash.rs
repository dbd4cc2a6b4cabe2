//! One-shot flash messages.
//!
//! A flash message is written before a redirect and taken (read & removed) by the next view
//! that renders, so it is displayed exactly once.

use tower_sessions::Session;

use crate::{
    model::view::{FlashDto, FlashLevel},
    server::error::Error,
};

pub const SESSION_FLASH_KEY: &str = "keystone:flash";

pub struct SessionFlash;

impl SessionFlash {
    /// Stores a flash message, replacing any message not yet displayed
    pub async fn insert(session: &Session, level: FlashLevel, message: &str) -> Result<(), Error> {
        session
            .insert(
                SESSION_FLASH_KEY,
                FlashDto {
                    level,
                    message: message.to_string(),
                },
            )
            .await?;

        Ok(())
    }

    pub async fn success(session: &Session, message: &str) -> Result<(), Error> {
        Self::insert(session, FlashLevel::Success, message).await
    }

    pub async fn error(session: &Session, message: &str) -> Result<(), Error> {
        Self::insert(session, FlashLevel::Error, message).await
    }

    /// Removes and returns the pending flash message
    pub async fn take(session: &Session) -> Result<Option<FlashDto>, Error> {
        Ok(session.remove::<FlashDto>(SESSION_FLASH_KEY).await?)
    }
}
