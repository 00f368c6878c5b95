//! Match lifecycle and live event recording for football team management.
//!
//! `model` holds the JSON contracts exposed over HTTP, `server` holds everything that
//! talks to the database or serves requests.

pub mod model;
pub mod server;
