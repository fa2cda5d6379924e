//! # fitbook-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository`: CRUD and email lookup for users
//!   - `FitnessClassRepository`: CRUD for fitness classes
//!   - `BookingRepository`: CRUD for bookings
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService`: register, update, list, get, delete
//!   - `FitnessClassService`: create, replace, list, get, delete
//!   - `BookingService`: book, rebook, list, get, cancel; owns referential checks
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `fitbook-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
