//! # fitbook-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for users, fitness classes and bookings
//!   (`/users`, `/classes`, `/bookings`) plus a `/health` probe
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and [`FitbookError`](fitbook_domain::error::FitbookError)s
//!   into HTTP responses with a `{"message": ...}` error body
//!
//! ## Dependency rule
//! Depends on `fitbook-app` (for port traits and services) and `fitbook-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
