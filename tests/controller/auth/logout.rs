use axum::{extract::State, response::IntoResponse};
use keystone::server::{controller::auth::logout, model::session::user::SessionUserId};
use keystone_test_utils::prelude::*;

use crate::util::{redirect_location, TestContextExt};

/// Expect the user to be removed from session and a redirect to login
#[tokio::test]
async fn clears_user_and_redirects_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    test.sign_in("admin@example.com").await?;

    let result = logout(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(redirect_location(&resp), "/dashboard/login");
    assert!(matches!(SessionUserId::get(&test.session).await, Ok(None)));

    Ok(())
}

/// Expect a redirect to login even when nobody is signed in
#[tokio::test]
async fn redirects_without_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = logout(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(redirect_location(&resp), "/dashboard/login");

    Ok(())
}
