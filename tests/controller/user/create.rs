use axum::{extract::State, response::IntoResponse};
use keystone::{model::view::UserCreateViewDto, server::controller::user::create};
use keystone_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};

/// Expect the users.create view with role choices in creation order
#[tokio::test]
async fn renders_role_choices() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_role("viewer", "Viewer")
        .with_role("administrator", "Administrator")
        .with_user("admin@example.com", &["administrator"])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;

    let result = create(State(test.into_app_state()), test.session.clone(), user).await;

    let view: UserCreateViewDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(view.view, "users.create");
    let choices: Vec<(&str, &str)> = view
        .roles
        .iter()
        .map(|c| (c.slug.as_str(), c.name.as_str()))
        .collect();
    assert_eq!(
        choices,
        vec![("viewer", "Viewer"), ("administrator", "Administrator")]
    );

    Ok(())
}

/// Expect an empty role list when no roles exist
#[tokio::test]
async fn renders_without_roles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("admin@example.com", &[])
        .build()
        .await?;
    let user = test.sign_in("admin@example.com").await?;

    let result = create(State(test.into_app_state()), test.session.clone(), user).await;

    let view: UserCreateViewDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(view.view, "users.create");
    assert!(view.roles.is_empty());

    Ok(())
}
