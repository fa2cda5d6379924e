//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod bookings;
#[allow(clippy::missing_errors_doc)]
pub mod classes;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;
use serde::Serialize;

use fitbook_app::ports::{BookingRepository, FitnessClassRepository, UserRepository};
use fitbook_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Parse a path segment into a typed id.
pub(crate) fn parse_id<I: FromStr>(raw: &str) -> Result<I, ApiError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()).into())
}

/// Build the API router: `/users`, `/classes` and `/bookings`.
pub fn routes<UR, CR, BR>() -> Router<AppState<UR, CR, BR>>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route(
            "/users",
            get(users::list::<UR, CR, BR>).post(users::create::<UR, CR, BR>),
        )
        .route(
            "/users/{id}",
            get(users::get::<UR, CR, BR>)
                .put(users::update::<UR, CR, BR>)
                .delete(users::delete::<UR, CR, BR>),
        )
        // Classes
        .route(
            "/classes",
            get(classes::list::<UR, CR, BR>).post(classes::create::<UR, CR, BR>),
        )
        .route(
            "/classes/{id}",
            get(classes::get::<UR, CR, BR>)
                .put(classes::update::<UR, CR, BR>)
                .delete(classes::delete::<UR, CR, BR>),
        )
        // Bookings
        .route(
            "/bookings",
            get(bookings::list::<UR, CR, BR>).post(bookings::create::<UR, CR, BR>),
        )
        .route(
            "/bookings/{id}",
            get(bookings::get::<UR, CR, BR>)
                .put(bookings::update::<UR, CR, BR>)
                .delete(bookings::delete::<UR, CR, BR>),
        )
}
