//! Standard values used by the fixtures.

/// Password of every user inserted by the fixtures unless another is given.
pub static TEST_PASSWORD: &str = "correct-horse-battery";

/// First name of users inserted by the fixtures.
pub static TEST_FIRST_NAME: &str = "Test";

/// Last name of users inserted by the fixtures.
pub static TEST_LAST_NAME: &str = "User";
