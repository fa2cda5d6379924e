//! Booking service: use-cases for managing bookings.
//!
//! A booking must point at an existing user and an existing class. Both
//! references are resolved on create and again on update whenever the
//! caller changes one. An unresolvable reference is a hard
//! [`NotFoundError`] naming the missing entity; the booking is left as it was.

use fitbook_domain::booking::{Booking, BookingChanges, NewBooking};
use fitbook_domain::error::{FitbookError, NotFoundError};
use fitbook_domain::id::{BookingId, FitnessClassId, UserId};

use crate::ports::{BookingRepository, FitnessClassRepository, UserRepository};

/// Application service for booking CRUD operations.
///
/// Reads users and classes through their own repositories to resolve
/// references before writing.
pub struct BookingService<B, U, C> {
    bookings: B,
    users: U,
    classes: C,
}

impl<B, U, C> BookingService<B, U, C>
where
    B: BookingRepository,
    U: UserRepository,
    C: FitnessClassRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(bookings: B, users: U, classes: C) -> Self {
        Self {
            bookings,
            users,
            classes,
        }
    }

    /// Book `user_id` into `class_id`.
    ///
    /// `status` defaults to `"confirmed"` when absent or blank.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] naming the user if the user does
    /// not exist, otherwise naming the class if the class does not exist;
    /// [`FitbookError::Validation`] if the status is too long; or a storage
    /// error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn create_booking(
        &self,
        user_id: UserId,
        class_id: FitnessClassId,
        status: Option<String>,
    ) -> Result<Booking, FitbookError> {
        self.ensure_user(user_id).await?;
        self.ensure_class(class_id).await?;

        let booking = NewBooking::new(user_id, class_id, status)?;
        let created = self.bookings.create(booking).await?;
        tracing::info!(booking_id = %created.id, "booking created");
        Ok(created)
    }

    /// Look up a booking by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] when no booking with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_booking(&self, id: BookingId) -> Result<Booking, FitbookError> {
        self.bookings
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Booking", id).into())
    }

    /// List all bookings.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, FitbookError> {
        self.bookings.get_all().await
    }

    /// Partially update a booking.
    ///
    /// A supplied status overwrites unconditionally. `created_at` is kept.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] if the booking does not exist or a
    /// changed user/class reference does not resolve,
    /// [`FitbookError::Validation`] if the status is too long, or a storage
    /// error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn update_booking(
        &self,
        id: BookingId,
        user_id: Option<UserId>,
        class_id: Option<FitnessClassId>,
        status: Option<String>,
    ) -> Result<Booking, FitbookError> {
        let current = self.get_booking(id).await?;

        if let Some(user_id) = user_id.filter(|u| *u != current.user_id) {
            self.ensure_user(user_id).await?;
        }
        if let Some(class_id) = class_id.filter(|c| *c != current.fitness_class_id) {
            self.ensure_class(class_id).await?;
        }

        let updated = BookingChanges::new(user_id, class_id, status).apply(current.clone())?;
        if updated == current {
            return Ok(current);
        }
        self.bookings.update(updated).await
    }

    /// Delete a booking by id.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] if the booking does not exist, or
    /// a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_booking(&self, id: BookingId) -> Result<(), FitbookError> {
        if !self.bookings.delete(id).await? {
            return Err(NotFoundError::new("Booking", id).into());
        }
        tracing::info!(booking_id = %id, "booking deleted");
        Ok(())
    }

    async fn ensure_user(&self, id: UserId) -> Result<(), FitbookError> {
        if self.users.get_by_id(id).await?.is_none() {
            tracing::debug!(user_id = %id, "booking references unknown user");
            return Err(NotFoundError::new("User", id).into());
        }
        Ok(())
    }

    async fn ensure_class(&self, id: FitnessClassId) -> Result<(), FitbookError> {
        if self.classes.get_by_id(id).await?.is_none() {
            tracing::debug!(class_id = %id, "booking references unknown class");
            return Err(NotFoundError::new("FitnessClass", id).into());
        }
        Ok(())
    }
}
