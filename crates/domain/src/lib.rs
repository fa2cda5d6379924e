//! # fitbook-domain
//!
//! Pure domain model for the fitbook class-booking service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Users** (people with a unique email)
//! - Define **Fitness classes** (scheduled sessions)
//! - Define **Bookings** (a user's place in a class)
//! - Pure **validators** for emails, ISO 8601 timestamps and text fields
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;
pub mod validate;

pub mod booking;
pub mod fitness_class;
pub mod user;
