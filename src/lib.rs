//! Keystone administrative dashboard.
//!
//! User account and role management for the dashboard, served as an Axum application backed
//! by SeaORM and tower-sessions.

pub mod model;
pub mod server;
