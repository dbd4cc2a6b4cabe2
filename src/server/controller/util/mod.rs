//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: the extractor guarding
//! dashboard routes behind a signed-in user and the view layout & redirect helpers that move
//! one-shot state through the session.

pub mod auth;
pub mod view;
