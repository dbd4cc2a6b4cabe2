//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main keystone crate to keep signatures consistent
//! across tests.

/// Type alias for dashboard user database model.
pub type UserModel = entity::dashboard_user::Model;

/// Type alias for dashboard role database model.
pub type RoleModel = entity::dashboard_role::Model;

/// Type alias for the user to role assignment model.
pub type UserRoleModel = entity::dashboard_user_role::Model;
