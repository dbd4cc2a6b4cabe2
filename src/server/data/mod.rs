//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over SeaORM database operations, organized by
//! table. Every repository is generic over [`sea_orm::ConnectionTrait`] so it can run against
//! the pooled connection or inside a transaction.

pub mod role;
pub mod user;
pub mod user_role;
