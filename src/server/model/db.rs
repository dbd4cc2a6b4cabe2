//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models so signatures across the repositories
//! and services don't need to spell out the generated `entity` crate paths.

/// Type alias for dashboard user database model.
///
/// # Fields (from `entity::dashboard_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Unique sign-in email, stored trimmed & lower-cased
/// - `password_hash` - Argon2 PHC string of the user's password
/// - `first_name` - Optional first name
/// - `last_name` - Optional last name
/// - `created_at` - Timestamp when the user account was created
/// - `updated_at` - Timestamp of the last user record update
pub type UserModel = entity::dashboard_user::Model;

/// Type alias for dashboard role database model.
///
/// # Fields (from `entity::dashboard_role::Model`)
/// - `id` - Primary key
/// - `slug` - Unique machine name submitted by the user forms
/// - `name` - Display name
/// - `created_at` - Timestamp when the role was created
pub type RoleModel = entity::dashboard_role::Model;

/// Type alias for the user to role assignment model.
pub type UserRoleModel = entity::dashboard_user_role::Model;
