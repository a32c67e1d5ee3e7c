//! Persistence access layer: per-entity parameterized statements.
//!
//! Every function borrows a pool connection for the duration of one
//! statement; only movement recording spans two statements, inside a single
//! transaction.

pub mod movements;
pub mod products;
pub mod requests;
pub mod suppliers;
pub mod users;
