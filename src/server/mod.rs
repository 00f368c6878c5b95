//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, session-based user
//! lookup, database repositories, and the match services (roster gate, match store,
//! composition, lifecycle, event ledger and statistics).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
