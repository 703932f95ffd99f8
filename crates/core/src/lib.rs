//! Domain logic for the construction project management system.
//!
//! Pure, I/O-free building blocks shared by the persistence and HTTP
//! layers: the start-date scheduling rule, credential hashing, and the
//! common error taxonomy.

pub mod credentials;
pub mod error;
pub mod schedule;
pub mod stage;
pub mod types;
