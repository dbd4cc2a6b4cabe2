//! Test utilities for the Keystone dashboard.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables & fixtures a test
//! needs, `build()` turns it into a [`TestContext`] holding an in-memory SQLite database and a
//! session, and fixture helpers on the context insert further records while the test runs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_FIRST_NAME, TEST_LAST_NAME, TEST_PASSWORD},
        TestBuilder, TestContext, TestError,
    };
}
