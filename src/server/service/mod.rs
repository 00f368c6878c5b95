//! Service layer for the match rules.
//!
//! Services own the business rules and transaction boundaries, repositories only run
//! queries. Every service is constructed from a database connection and a
//! [`roster::RosterGate`], and checks ownership through the gate before doing anything else.

pub mod composition;
pub mod ledger;
pub mod lifecycle;
pub mod matches;
pub mod roster;
pub mod stats;
