//! HTTP controller endpoints for the Keystone dashboard.
//!
//! This module contains Axum handlers for signing in to the dashboard and managing its users.
//! Controllers extract request parameters, call services, turn expected service failures into
//! flash messages & redirects and render views. They integrate with tower-sessions for session
//! state and use utoipa for OpenAPI documentation.

pub mod auth;
pub mod user;
pub mod util;
