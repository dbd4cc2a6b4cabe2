use axum::response::IntoResponse;
use keystone::{
    model::view::{FlashLevel, LoginViewDto, OldInputDto},
    server::{
        controller::auth::login_form,
        model::session::{flash::SessionFlash, form::SessionFormInput},
    },
};
use keystone_test_utils::prelude::*;

use crate::util::json_body;

/// Expect the login view without a user, flash or input for a fresh session
#[tokio::test]
async fn renders_empty_login_view() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login_form(test.session.clone()).await;

    let view: LoginViewDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(view.view, "auth.login");
    assert!(view.layout.current_user.is_none());
    assert!(view.layout.flash.is_none());
    assert!(view.layout.old_input.is_none());

    Ok(())
}

/// Expect the flash message & previous email left by a failed sign in
#[tokio::test]
async fn renders_flash_and_previous_email() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionFlash::error(&test.session, "Invalid email or password.")
        .await
        .unwrap();
    SessionFormInput::insert(
        &test.session,
        &OldInputDto {
            email: "jane@example.com".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let result = login_form(test.session.clone()).await;

    let view: LoginViewDto = json_body(result.unwrap().into_response()).await;
    let flash = view.layout.flash.expect("flash in layout");
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(
        view.layout.old_input.expect("old input").email,
        "jane@example.com"
    );

    Ok(())
}
