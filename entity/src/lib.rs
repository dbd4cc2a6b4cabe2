pub mod prelude;

pub mod dashboard_role;
pub mod dashboard_user;
pub mod dashboard_user_role;
