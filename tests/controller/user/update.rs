use axum::extract::{Path, State};
use axum_extra::extract::Form;
use keystone::{
    model::{user::UserForm, view::FlashLevel},
    server::{
        controller::user::update,
        model::session::form::{SessionFormErrors, SessionFormInput},
    },
};
use keystone_test_utils::prelude::*;

use super::valid_form;
use crate::util::{redirect_location, TestContextExt};

/// Expect a redirect back to users.edit with a success flash after updating
#[tokio::test]
async fn redirects_to_edit_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_role("administrator", "Administrator")
        .with_role("editor", "Editor")
        .with_user("admin@example.com", &["administrator"])
        .with_user("jane@example.com", &["editor"])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    let jane = test.user().find_by_email("jane@example.com").await?;
    let form = UserForm {
        password: String::new(),
        password_confirmation: String::new(),
        roles: vec!["administrator".to_string(), "editor".to_string()],
        ..valid_form("jane@example.com")
    };

    let result = update(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Path(jane.id),
        Form(form),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(
        redirect_location(&resp),
        format!("/dashboard/users/{}/edit", jane.id)
    );
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.level, FlashLevel::Success);
    assert_eq!(flash.message, "User successfully updated.");
    assert_eq!(test.user().roles_of(jane.id).await?.len(), 2);

    Ok(())
}

/// Expect a redirect back to users.edit with the errors & input for invalid input
#[tokio::test]
async fn redirects_to_edit_with_errors_on_invalid_input() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .with_user("jane@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    let jane = test.user().find_by_email("jane@example.com").await?;
    let form = UserForm {
        roles: vec!["ghost".to_string()],
        ..valid_form("admin@example.com")
    };

    let result = update(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Path(jane.id),
        Form(form),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(
        redirect_location(&resp),
        format!("/dashboard/users/{}/edit", jane.id)
    );
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(flash.message, "The form contains errors.");
    let errors = SessionFormErrors::take(&test.session).await.unwrap();
    assert!(errors.contains_key("email"));
    assert_eq!(errors["roles"], vec!["The selected role ghost is invalid."]);
    let input = SessionFormInput::take(&test.session).await.unwrap();
    assert_eq!(input.expect("old input").roles, vec!["ghost"]);

    Ok(())
}

/// Expect a redirect to users.index with the error message for a missing user
#[tokio::test]
async fn redirects_to_index_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;

    let result = update(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Path(999),
        Form(valid_form("ghost@example.com")),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(redirect_location(&resp), "/dashboard/users");
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(flash.message, "User does not exist.");

    Ok(())
}
