//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All dashboard endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all dashboard endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /dashboard/login` - Login form
/// - `POST /dashboard/login` - Sign in with email & password
/// - `GET /dashboard/logout` - Sign out
/// - `GET /dashboard/users` - List users
/// - `GET /dashboard/users/create` - Create user form
/// - `POST /dashboard/users` - Create user
/// - `GET /dashboard/users/{id}/edit` - Edit user form
/// - `PUT /dashboard/users/{id}` - Update user
/// - `DELETE /dashboard/users/{id}` - Delete user
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>`, the session layer must be added by the caller.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db)).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Keystone", description = "Keystone dashboard"), tags(
        (name = controller::auth::AUTH_TAG, description = "Dashboard sign in routes"),
        (name = controller::user::USER_TAG, description = "Dashboard user management routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::auth::login_form,
            controller::auth::login
        ))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::user::index,
            controller::user::store
        ))
        .routes(routes!(controller::user::create))
        .routes(routes!(controller::user::edit))
        .routes(routes!(
            controller::user::update,
            controller::user::delete
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
