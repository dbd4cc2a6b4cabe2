use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::Form;
use keystone::{
    model::{
        user::UserForm,
        view::{FlashLevel, UserCreateViewDto},
    },
    server::{
        controller::user::{create, store},
        model::session::form::{SessionFormErrors, SessionFormInput},
    },
};
use keystone_test_utils::prelude::*;

use super::valid_form;
use crate::util::{json_body, redirect_location, TestContextExt};

/// Expect a redirect to users.index with a success flash after creating the user
#[tokio::test]
async fn redirects_to_index_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_role("editor", "Editor")
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    let form = UserForm {
        roles: vec!["editor".to_string()],
        ..valid_form("jane@example.com")
    };

    let result = store(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Form(form),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(redirect_location(&resp), "/dashboard/users");
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.level, FlashLevel::Success);
    assert_eq!(flash.message, "User successfully created.");
    let created = test.user().find_by_email("jane@example.com").await?;
    assert_eq!(test.user().roles_of(created.id).await?.len(), 1);

    Ok(())
}

/// Expect a redirect back to users.create with errors & input but no passwords kept
#[tokio::test]
async fn redirects_back_with_errors_on_invalid_input() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    let form = UserForm {
        password_confirmation: "mismatch".to_string(),
        ..valid_form("admin@example.com")
    };

    let result = store(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Form(form),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(redirect_location(&resp), "/dashboard/users/create");
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(flash.message, "The form contains errors.");

    let errors = SessionFormErrors::take(&test.session).await.unwrap();
    assert_eq!(errors["email"], vec!["The email has already been taken."]);
    assert_eq!(
        errors["password"],
        vec!["The password confirmation does not match."]
    );

    let input = SessionFormInput::take(&test.session)
        .await
        .unwrap()
        .expect("old input");
    assert_eq!(input.email, "admin@example.com");
    assert_eq!(input.first_name, "Jane");
    let stored = serde_json::to_string(&input).unwrap();
    assert!(!stored.contains("password123"));

    Ok(())
}

/// Expect the create view rendered after a failed submission to carry the errors & input
#[tokio::test]
async fn create_view_shows_errors_after_failed_store() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    let form = UserForm {
        email: "not-an-email".to_string(),
        ..valid_form("")
    };
    store(
        State(test.into_app_state()),
        test.session.clone(),
        test.sign_in("admin@example.com").await?,
        Form(form),
    )
    .await
    .unwrap();

    let result = create(State(test.into_app_state()), test.session.clone(), user).await;

    let view: UserCreateViewDto = json_body(result.unwrap().into_response()).await;
    assert!(view.layout.errors.contains_key("email"));
    assert_eq!(
        view.layout.old_input.expect("old input").email,
        "not-an-email"
    );
    assert_eq!(
        view.layout.flash.expect("flash").message,
        "The form contains errors."
    );

    Ok(())
}

/// Expect a 500 response for a database failure instead of a redirect
#[tokio::test]
async fn fails_for_database_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    test.drop_table("dashboard_role").await?;
    let form = UserForm {
        roles: vec!["editor".to_string()],
        ..valid_form("jane@example.com")
    };

    let result = store(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Form(form),
    )
    .await;

    assert!(result.is_err());
    assert!(test.take_flash().await.is_none());

    Ok(())
}
