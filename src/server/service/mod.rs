//! Service layer for business logic.
//!
//! This module contains the service layer that implements business logic and coordinates
//! between repositories. Services include dashboard authentication, retry logic for transient
//! failures, role lookups and user account management.

pub mod auth;
pub mod retry;
pub mod role;
pub mod user;
