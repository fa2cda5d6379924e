//! # fitbook-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `fitbook-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Translate constraint violations (unique email, foreign keys) into
//!   domain errors
//!
//! ## Dependency rule
//! Depends on `fitbook-app` (for port traits) and `fitbook-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod booking_repo;
mod class_repo;
mod error;
mod pool;
mod timestamp;
mod user_repo;

pub use booking_repo::SqliteBookingRepository;
pub use class_repo::SqliteFitnessClassRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
