use axum::extract::{Path, State};
use keystone::{
    model::view::{FlashLevel, UserEditViewDto},
    server::controller::user::edit,
};
use keystone_test_utils::prelude::*;

use crate::util::{json_body, redirect_location, TestContextExt};

/// Expect the users.edit view with the user, their sorted role names & the role choices
#[tokio::test]
async fn renders_user_with_current_roles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_role("viewer", "Viewer")
        .with_role("administrator", "Administrator")
        .with_role("editor", "Editor")
        .with_user("admin@example.com", &["administrator"])
        .with_user("jane@example.com", &["viewer", "editor"])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    let jane = test.user().find_by_email("jane@example.com").await?;

    let result = edit(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Path(jane.id),
    )
    .await;

    let view: UserEditViewDto = json_body(result.unwrap()).await;
    assert_eq!(view.view, "users.edit");
    assert_eq!(view.user.id, jane.id);
    assert_eq!(view.current_roles, "Editor, Viewer");
    assert_eq!(view.roles.len(), 3);
    assert_eq!(view.roles[0].slug, "viewer");

    Ok(())
}

/// Expect `Not Available` for a user without roles
#[tokio::test]
async fn renders_placeholder_without_user_roles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_role("editor", "Editor")
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    let admin = test.user().find_by_email("admin@example.com").await?;

    let result = edit(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Path(admin.id),
    )
    .await;

    let view: UserEditViewDto = json_body(result.unwrap()).await;
    assert_eq!(view.current_roles, "Not Available");

    Ok(())
}

/// Expect the users.edit view, not users.create, even when no roles exist
#[tokio::test]
async fn renders_edit_view_without_any_roles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    let admin = test.user().find_by_email("admin@example.com").await?;

    let result = edit(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Path(admin.id),
    )
    .await;

    let view: UserEditViewDto = json_body(result.unwrap()).await;
    assert_eq!(view.view, "users.edit");
    assert!(view.roles.is_empty());
    assert_eq!(view.current_roles, "Not Available");

    Ok(())
}

/// Expect a redirect to users.index with an error flash for a missing user
#[tokio::test]
async fn redirects_to_index_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;

    let result = edit(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Path(999),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(redirect_location(&resp), "/dashboard/users");
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(flash.message, "User does not exist.");

    Ok(())
}
