//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the dashboard controllers, verifying views,
//! redirects, flash messages and the form state left in session, plus routing through the
//! full router with a session layer.
