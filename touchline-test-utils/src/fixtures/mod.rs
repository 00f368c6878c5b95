//! Database fixtures inserted during test execution.
//!
//! - `team` - teams and their players
//! - `matches` - matches, compositions and match events
//! - `session` - the authenticated user ID

pub mod matches;
pub mod session;
pub mod team;
