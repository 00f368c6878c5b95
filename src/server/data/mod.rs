//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table (or a table and its children) and are
//! generic over [`sea_orm::ConnectionTrait`] so services can run them either directly against
//! the pool or inside a transaction.

pub mod event;
pub mod match_player;
pub mod matches;
pub mod player;
pub mod team;
