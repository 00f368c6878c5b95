//! Standard values shared by fixtures and tests.

/// User ID that owns the teams created by most tests.
pub static TEST_OWNER_USER_ID: i32 = 1;

/// A second user, used to exercise ownership checks.
pub static TEST_OTHER_USER_ID: i32 = 2;

/// Opponent name given to mock matches.
pub static TEST_OPPONENT: &str = "FC Rival";

/// Players in a full mock squad: 11 starters and 7 substitutes.
pub static TEST_SQUAD_SIZE: usize = 18;

/// Session key the external auth system writes the user ID under.
pub static SESSION_USER_ID_KEY: &str = "touchline:user:id";
