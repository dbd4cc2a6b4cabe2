use axum::extract::{Path, State};
use keystone::{model::view::FlashLevel, server::controller::user::delete};
use keystone_test_utils::prelude::*;

use crate::util::{redirect_location, TestContextExt};

/// Expect a redirect to users.index with a success flash after deleting
#[tokio::test]
async fn redirects_to_index_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_role("editor", "Editor")
        .with_user("admin@example.com", &[])
        .with_user("jane@example.com", &["editor"])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;
    let jane = test.user().find_by_email("jane@example.com").await?;

    let result = delete(
        State(test.into_app_state()),
        test.session.clone(),
        user,
        Path(jane.id),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(redirect_location(&resp), "/dashboard/users");
    let flash = test.take_flash().await.expect("flash message");
    assert_eq!(flash.level, FlashLevel::Success);
    assert_eq!(flash.message, "User successfully deleted.");
    assert!(test.user().find_by_email("jane@example.com").await.is_err());

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

    let result = delete(
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
