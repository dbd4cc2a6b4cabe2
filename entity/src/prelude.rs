pub use super::dashboard_role::Entity as DashboardRole;
pub use super::dashboard_user::Entity as DashboardUser;
pub use super::dashboard_user_role::Entity as DashboardUserRole;
