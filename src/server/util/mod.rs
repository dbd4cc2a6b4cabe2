//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared by the services, currently Argon2 password
//! hashing & verification for dashboard user credentials.

pub mod password;
