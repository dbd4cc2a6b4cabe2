//! Server application core modules.
//!
//! This module contains all server-side functionality for the Keystone dashboard, including
//! HTTP routing, sign in, session state, database operations and user & role management.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
