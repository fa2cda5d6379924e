//! Storage port: repository traits for persistence.
//!
//! Implementations must enforce, atomically within each write:
//! - uniqueness of user emails, reporting [`ConflictError`] on violation;
//! - existence of a booking's user and class, reporting [`NotFoundError`];
//! - removal of bookings when their user or class is deleted.
//!
//! Services pre-check these rules to produce precise errors, but only the
//! store can guarantee them under concurrent requests.
//!
//! [`ConflictError`]: fitbook_domain::error::ConflictError
//! [`NotFoundError`]: fitbook_domain::error::NotFoundError

use std::future::Future;

use fitbook_domain::booking::{Booking, NewBooking};
use fitbook_domain::error::FitbookError;
use fitbook_domain::fitness_class::{FitnessClass, FitnessClassDraft};
use fitbook_domain::id::{BookingId, FitnessClassId, UserId};
use fitbook_domain::user::{NewUser, User};

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Insert a new user, returning it with its assigned id.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, FitbookError>> + Send;

    /// Get a user by id.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, FitbookError>> + Send;

    /// Get the user owning `email`, if any.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, FitbookError>> + Send;

    /// Get all users in the store's natural order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, FitbookError>> + Send;

    /// Overwrite an existing user.
    fn update(&self, user: User) -> impl Future<Output = Result<User, FitbookError>> + Send;

    /// Delete a user and its bookings. Returns whether a user was removed.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<bool, FitbookError>> + Send;
}

/// Repository for persisting and querying [`FitnessClass`]es.
pub trait FitnessClassRepository {
    /// Insert a new class, returning it with its assigned id.
    fn create(
        &self,
        draft: FitnessClassDraft,
    ) -> impl Future<Output = Result<FitnessClass, FitbookError>> + Send;

    /// Get a class by id.
    fn get_by_id(
        &self,
        id: FitnessClassId,
    ) -> impl Future<Output = Result<Option<FitnessClass>, FitbookError>> + Send;

    /// Get all classes in the store's natural order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<FitnessClass>, FitbookError>> + Send;

    /// Overwrite an existing class.
    fn update(
        &self,
        class: FitnessClass,
    ) -> impl Future<Output = Result<FitnessClass, FitbookError>> + Send;

    /// Delete a class and its bookings. Returns whether a class was removed.
    fn delete(
        &self,
        id: FitnessClassId,
    ) -> impl Future<Output = Result<bool, FitbookError>> + Send;
}

/// Repository for persisting and querying [`Booking`]s.
pub trait BookingRepository {
    /// Insert a new booking, returning it with its assigned id.
    fn create(
        &self,
        booking: NewBooking,
    ) -> impl Future<Output = Result<Booking, FitbookError>> + Send;

    /// Get a booking by id.
    fn get_by_id(
        &self,
        id: BookingId,
    ) -> impl Future<Output = Result<Option<Booking>, FitbookError>> + Send;

    /// Get all bookings in the store's natural order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Booking>, FitbookError>> + Send;

    /// Overwrite the status and references of an existing booking.
    ///
    /// `created_at` is never written.
    fn update(
        &self,
        booking: Booking,
    ) -> impl Future<Output = Result<Booking, FitbookError>> + Send;

    /// Delete a booking. Returns whether a booking was removed.
    fn delete(&self, id: BookingId) -> impl Future<Output = Result<bool, FitbookError>> + Send;
}
