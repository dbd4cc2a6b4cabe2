//! Form state carried across a failed-validation redirect.
//!
//! When a submitted form is rejected the controller stores the field errors and the submitted
//! input before redirecting back to the form; the form view takes both to re-render them.

use std::collections::BTreeMap;

use tower_sessions::Session;

use crate::{model::view::OldInputDto, server::error::Error};

pub const SESSION_FORM_ERRORS_KEY: &str = "keystone:form:errors";
pub const SESSION_FORM_INPUT_KEY: &str = "keystone:form:input";

pub struct SessionFormErrors;

impl SessionFormErrors {
    pub async fn insert(
        session: &Session,
        errors: &BTreeMap<String, Vec<String>>,
    ) -> Result<(), Error> {
        session.insert(SESSION_FORM_ERRORS_KEY, errors).await?;

        Ok(())
    }

    /// Removes and returns the stored errors, empty if there are none
    pub async fn take(session: &Session) -> Result<BTreeMap<String, Vec<String>>, Error> {
        Ok(session
            .remove::<BTreeMap<String, Vec<String>>>(SESSION_FORM_ERRORS_KEY)
            .await?
            .unwrap_or_default())
    }
}

pub struct SessionFormInput;

impl SessionFormInput {
    pub async fn insert(session: &Session, input: &OldInputDto) -> Result<(), Error> {
        session.insert(SESSION_FORM_INPUT_KEY, input).await?;

        Ok(())
    }

    pub async fn take(session: &Session) -> Result<Option<OldInputDto>, Error> {
        Ok(session.remove::<OldInputDto>(SESSION_FORM_INPUT_KEY).await?)
    }
}
