//! Authentication primitives.
//!
//! - [`jwt`] -- access-token generation and validation. Password hashing
//!   lives in `cpms_core::credentials`.

pub mod jwt;
