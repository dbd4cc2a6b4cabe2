//! Data transfer objects shared between the server and dashboard front end.

pub mod api;
pub mod user;
pub mod view;
