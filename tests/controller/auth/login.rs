use axum::extract::State;
use axum_extra::extract::Form;
use keystone::{
    model::{user::LoginForm, view::FlashLevel},
    server::{
        controller::auth::login,
        model::session::{form::SessionFormInput, user::SessionUserId},
    },
};
use keystone_test_utils::prelude::*;

use crate::util::{redirect_location, TestContextExt};

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Expect the user in session and a redirect to users.index for valid credentials
#[tokio::test]
async fn signs_in_with_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let admin = test.user().find_by_email("admin@example.com").await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Form(login_form("admin@example.com", TEST_PASSWORD)),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(redirect_location(&resp), "/dashboard/users");
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.level, FlashLevel::Success);
    assert_eq!(flash.message, "Successfully signed in.");
    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(user_id, Some(admin.id));

    Ok(())
}

/// Expect a redirect back to login with the email kept for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Form(login_form("admin@example.com", "not-the-password")),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(redirect_location(&resp), "/dashboard/login");
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(flash.message, "Invalid email or password.");
    let input = SessionFormInput::take(&test.session).await.unwrap();
    assert_eq!(input.expect("old input").email, "admin@example.com");
    assert!(matches!(SessionUserId::get(&test.session).await, Ok(None)));

    Ok(())
}

/// Expect the same rejection for an unknown email
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Form(login_form("nobody@example.com", TEST_PASSWORD)),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(redirect_location(&resp), "/dashboard/login");
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.message, "Invalid email or password.");

    Ok(())
}
