//! HTTP controller endpoints for the touchline web API.
//!
//! Axum handlers for matches, compositions, lifecycle transitions, match events and
//! statistics. Handlers read the authenticated user from the session, hand the request to
//! the matching service together with a [`DbRosterGate`](crate::server::service::roster::DbRosterGate)
//! and return JSON. All handlers are documented for OpenAPI through utoipa.

pub mod composition;
pub mod event;
pub mod lifecycle;
pub mod matches;
pub mod stats;
pub mod util;

/// OpenAPI tag for match endpoints
pub static MATCH_TAG: &str = "match";
/// OpenAPI tag for match event endpoints
pub static EVENT_TAG: &str = "event";
/// OpenAPI tag for statistics endpoints
pub static STATS_TAG: &str = "stats";
