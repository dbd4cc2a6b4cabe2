//! Shared helpers for the integration tests.

use axum::{
    body::to_bytes,
    http::{header::LOCATION, StatusCode},
    response::Response,
};
use keystone::{
    model::view::FlashDto,
    server::{
        controller::util::auth::AuthenticatedUser,
        model::session::{flash::SessionFlash, user::SessionUserId},
        service::auth::AuthService,
    },
};
use keystone_test_utils::prelude::*;
use serde::de::DeserializeOwned;

pub(crate) trait TestContextExt {
    /// Signs the fixture user with `email` in to the test session
    async fn sign_in(&self, email: &str) -> Result<AuthenticatedUser, TestError>;

    /// Takes the pending flash message from the test session
    async fn take_flash(&self) -> Option<FlashDto>;
}

impl TestContextExt for TestContext {
    async fn sign_in(&self, email: &str) -> Result<AuthenticatedUser, TestError> {
        let user = self.user().find_by_email(email).await?;
        SessionUserId::insert(&self.session, user.id)
            .await
            .expect("user ID should be stored in session");

        let user = AuthService::new(&self.db)
            .user_from_session(&self.session)
            .await
            .expect("signed in user should load");

        Ok(AuthenticatedUser(user))
    }

    async fn take_flash(&self) -> Option<FlashDto> {
        SessionFlash::take(&self.session)
            .await
            .expect("flash should be readable")
    }
}

/// Asserts a 303 See Other redirect and returns its target
pub fn redirect_location(resp: &Response) -> String {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    resp.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("redirect should have a location")
        .to_string()
}

/// Asserts a 200 OK response and parses its JSON body
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
