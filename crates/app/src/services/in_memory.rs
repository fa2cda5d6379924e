//! In-memory repositories shared by the service tests.
//!
//! All three handles share one set of tables so that uniqueness, reference
//! checks and cascading deletes behave like the real store.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use fitbook_domain::booking::{Booking, NewBooking};
use fitbook_domain::error::{ConflictError, FitbookError, NotFoundError};
use fitbook_domain::fitness_class::{FitnessClass, FitnessClassDraft};
use fitbook_domain::id::{BookingId, FitnessClassId, UserId};
use fitbook_domain::user::{NewUser, User};

use crate::ports::{BookingRepository, FitnessClassRepository, UserRepository};

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    classes: BTreeMap<FitnessClassId, FitnessClass>,
    bookings: BTreeMap<BookingId, Booking>,
    next_user: i64,
    next_class: i64,
    next_booking: i64,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn check_references(&self, user_id: UserId, class_id: FitnessClassId) -> Result<(), FitbookError> {
        if !self.users.contains_key(&user_id) {
            return Err(NotFoundError::new("User", user_id).into());
        }
        if !self.classes.contains_key(&class_id) {
            return Err(NotFoundError::new("FitnessClass", class_id).into());
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore(Arc<Mutex<Tables>>);

impl InMemoryStore {
    pub fn users(&self) -> InMemoryUsers {
        InMemoryUsers(Arc::clone(&self.0))
    }

    pub fn classes(&self) -> InMemoryClasses {
        InMemoryClasses(Arc::clone(&self.0))
    }

    pub fn bookings(&self) -> InMemoryBookings {
        InMemoryBookings(Arc::clone(&self.0))
    }
}

pub struct InMemoryUsers(Arc<Mutex<Tables>>);
pub struct InMemoryClasses(Arc<Mutex<Tables>>);
pub struct InMemoryBookings(Arc<Mutex<Tables>>);

impl UserRepository for InMemoryUsers {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, FitbookError>> + Send {
        let mut tables = self.0.lock().unwrap();
        let result: Result<User, FitbookError> = if tables.email_taken(&user.email, None) {
            Err(ConflictError::EmailInUse(user.email).into())
        } else {
            tables.next_user += 1;
            let user = user.with_id(UserId::new(tables.next_user));
            tables.users.insert(user.id, user.clone());
            Ok(user)
        };
        async move { result }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, FitbookError>> + Send {
        let result = self.0.lock().unwrap().users.get(&id).cloned();
        async move { Ok(result) }
    }

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, FitbookError>> + Send {
        let tables = self.0.lock().unwrap();
        let result = tables.users.values().find(|u| u.email == email).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, FitbookError>> + Send {
        let result: Vec<User> = self.0.lock().unwrap().users.values().cloned().collect();
        async move { Ok(result) }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, FitbookError>> + Send {
        let mut tables = self.0.lock().unwrap();
        let result: Result<User, FitbookError> = if !tables.users.contains_key(&user.id) {
            Err(NotFoundError::new("User", user.id).into())
        } else if tables.email_taken(&user.email, Some(user.id)) {
            Err(ConflictError::EmailInUse(user.email).into())
        } else {
            tables.users.insert(user.id, user.clone());
            Ok(user)
        };
        async move { result }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<bool, FitbookError>> + Send {
        let mut tables = self.0.lock().unwrap();
        let removed = tables.users.remove(&id).is_some();
        tables.bookings.retain(|_, b| b.user_id != id);
        async move { Ok(removed) }
    }
}

impl FitnessClassRepository for InMemoryClasses {
    fn create(
        &self,
        draft: FitnessClassDraft,
    ) -> impl Future<Output = Result<FitnessClass, FitbookError>> + Send {
        let mut tables = self.0.lock().unwrap();
        tables.next_class += 1;
        let class = draft.with_id(FitnessClassId::new(tables.next_class));
        tables.classes.insert(class.id, class.clone());
        async move { Ok(class) }
    }

    fn get_by_id(
        &self,
        id: FitnessClassId,
    ) -> impl Future<Output = Result<Option<FitnessClass>, FitbookError>> + Send {
        let result = self.0.lock().unwrap().classes.get(&id).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<FitnessClass>, FitbookError>> + Send {
        let result: Vec<FitnessClass> = self.0.lock().unwrap().classes.values().cloned().collect();
        async move { Ok(result) }
    }

    fn update(
        &self,
        class: FitnessClass,
    ) -> impl Future<Output = Result<FitnessClass, FitbookError>> + Send {
        let mut tables = self.0.lock().unwrap();
        let result: Result<FitnessClass, FitbookError> = if tables.classes.contains_key(&class.id) {
            tables.classes.insert(class.id, class.clone());
            Ok(class)
        } else {
            Err(NotFoundError::new("FitnessClass", class.id).into())
        };
        async move { result }
    }

    fn delete(
        &self,
        id: FitnessClassId,
    ) -> impl Future<Output = Result<bool, FitbookError>> + Send {
        let mut tables = self.0.lock().unwrap();
        let removed = tables.classes.remove(&id).is_some();
        tables.bookings.retain(|_, b| b.fitness_class_id != id);
        async move { Ok(removed) }
    }
}

impl BookingRepository for InMemoryBookings {
    fn create(
        &self,
        booking: NewBooking,
    ) -> impl Future<Output = Result<Booking, FitbookError>> + Send {
        let mut tables = self.0.lock().unwrap();
        let result = tables
            .check_references(booking.user_id, booking.fitness_class_id)
            .map(|()| {
                tables.next_booking += 1;
                let booking = booking.with_id(BookingId::new(tables.next_booking));
                tables.bookings.insert(booking.id, booking.clone());
                booking
            });
        async move { result }
    }

    fn get_by_id(
        &self,
        id: BookingId,
    ) -> impl Future<Output = Result<Option<Booking>, FitbookError>> + Send {
        let result = self.0.lock().unwrap().bookings.get(&id).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Booking>, FitbookError>> + Send {
        let result: Vec<Booking> = self.0.lock().unwrap().bookings.values().cloned().collect();
        async move { Ok(result) }
    }

    fn update(
        &self,
        booking: Booking,
    ) -> impl Future<Output = Result<Booking, FitbookError>> + Send {
        let mut tables = self.0.lock().unwrap();
        let result = tables
            .check_references(booking.user_id, booking.fitness_class_id)
            .and_then(|()| match tables.bookings.get_mut(&booking.id) {
                Some(stored) => {
                    stored.status.clone_from(&booking.status);
                    stored.user_id = booking.user_id;
                    stored.fitness_class_id = booking.fitness_class_id;
                    Ok(stored.clone())
                }
                None => Err(NotFoundError::new("Booking", booking.id).into()),
            });
        async move { result }
    }

    fn delete(&self, id: BookingId) -> impl Future<Output = Result<bool, FitbookError>> + Send {
        let removed = self.0.lock().unwrap().bookings.remove(&id).is_some();
        async move { Ok(removed) }
    }
}
