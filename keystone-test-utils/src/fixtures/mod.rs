//! Test fixture modules for database record creation.
//!
//! These fixtures insert records during test execution. Each submodule provides
//! specialized fixtures for one part of the schema:
//!
//! - `role` - Dashboard roles
//! - `user` - Dashboard users, their passwords & role assignments

pub mod role;
pub mod user;
