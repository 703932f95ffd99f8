//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod construction_repo;
pub mod user_repo;

pub use construction_repo::ConstructionRepo;
pub use user_repo::UserRepo;
