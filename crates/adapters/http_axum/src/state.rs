//! Shared application state for axum handlers.

use std::sync::Arc;

use fitbook_app::ports::{BookingRepository, FitnessClassRepository, UserRepository};
use fitbook_app::services::booking_service::BookingService;
use fitbook_app::services::class_service::FitnessClassService;
use fitbook_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the user, class and booking repository types to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<UR, CR, BR> {
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Fitness class CRUD service.
    pub class_service: Arc<FitnessClassService<CR>>,
    /// Booking CRUD service, which also reads users and classes.
    pub booking_service: Arc<BookingService<BR, UR, CR>>,
}

impl<UR, CR, BR> Clone for AppState<UR, CR, BR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            class_service: Arc::clone(&self.class_service),
            booking_service: Arc::clone(&self.booking_service),
        }
    }
}

impl<UR, CR, BR> AppState<UR, CR, BR>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        class_service: FitnessClassService<CR>,
        booking_service: BookingService<BR, UR, CR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            class_service: Arc::new(class_service),
            booking_service: Arc::new(booking_service),
        }
    }
}
