//! Booking: a user's reservation for a fitness class.
//!
//! `status` is free-form text; no transitions are enforced. `created_at`
//! is assigned once when the booking is first built and never changes.

use serde::Serialize;

use crate::error::FitbookError;
use crate::id::{BookingId, FitnessClassId, UserId};
use crate::time::{self, Timestamp};
use crate::validate::{require_text, supplied};

pub const DEFAULT_STATUS: &str = "confirmed";
pub const STATUS_MAX_LEN: usize = 50;

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub status: String,
    pub user_id: UserId,
    pub fitness_class_id: FitnessClassId,
    pub created_at: Timestamp,
}

/// A booking that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub status: String,
    pub user_id: UserId,
    pub fitness_class_id: FitnessClassId,
    pub created_at: Timestamp,
}

impl NewBooking {
    /// Build a booking stamped with the current time.
    ///
    /// A missing or blank `status` becomes [`DEFAULT_STATUS`].
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::Validation`] if `status` is too long.
    pub fn new(
        user_id: UserId,
        fitness_class_id: FitnessClassId,
        status: Option<String>,
    ) -> Result<Self, FitbookError> {
        let status = supplied(status).unwrap_or_else(|| DEFAULT_STATUS.to_string());
        require_text("status", &status, STATUS_MAX_LEN)?;
        Ok(Self {
            status,
            user_id,
            fitness_class_id,
            created_at: time::now(),
        })
    }

    #[must_use]
    pub fn with_id(self, id: BookingId) -> Booking {
        Booking {
            id,
            status: self.status,
            user_id: self.user_id,
            fitness_class_id: self.fitness_class_id,
            created_at: self.created_at,
        }
    }
}

/// Partial update of a booking. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingChanges {
    pub user_id: Option<UserId>,
    pub fitness_class_id: Option<FitnessClassId>,
    pub status: Option<String>,
}

impl BookingChanges {
    #[must_use]
    pub fn new(
        user_id: Option<UserId>,
        fitness_class_id: Option<FitnessClassId>,
        status: Option<String>,
    ) -> Self {
        Self {
            user_id,
            fitness_class_id,
            status: supplied(status),
        }
    }

    /// Apply the supplied fields to `booking`. `created_at` is preserved.
    ///
    /// Reference resolution is the caller's job; this only checks shape.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::Validation`] if the new status is too long.
    pub fn apply(self, mut booking: Booking) -> Result<Booking, FitbookError> {
        if let Some(user_id) = self.user_id {
            booking.user_id = user_id;
        }
        if let Some(fitness_class_id) = self.fitness_class_id {
            booking.fitness_class_id = fitness_class_id;
        }
        if let Some(status) = self.status {
            require_text("status", &status, STATUS_MAX_LEN)?;
            booking.status = status;
        }
        Ok(booking)
    }
}
