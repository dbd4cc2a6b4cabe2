//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Each submodule defines a specific piece of session state (signed-in user,
//! flash message, form errors & previous input) with methods for inserting, retrieving, and
//! removing data from the session store (Redis-backed).

pub mod flash;
pub mod form;
pub mod user;
