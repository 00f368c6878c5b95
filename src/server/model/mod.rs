//! Server application models and type definitions.
//!
//! Application state, database model type aliases with their DTO conversions, and
//! session data structures.

pub mod app;
pub mod db;
pub mod session;
