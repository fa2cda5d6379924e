//! `SQLite` implementation of [`BookingRepository`].
//!
//! Referential integrity is enforced by the `bookings` foreign keys. When a
//! write trips one, the repository looks up which reference is missing so
//! the caller gets a [`NotFoundError`] naming the entity.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use fitbook_app::ports::BookingRepository;
use fitbook_domain::booking::{Booking, NewBooking};
use fitbook_domain::error::{FitbookError, NotFoundError};
use fitbook_domain::id::{BookingId, FitnessClassId, UserId};

use crate::error::{StorageError, is_foreign_key_violation};
use crate::timestamp;

struct Wrapper(Booking);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Booking> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Booking {
            id: BookingId::new(row.try_get("id")?),
            status: row.try_get("status")?,
            user_id: UserId::new(row.try_get("user_id")?),
            fitness_class_id: FitnessClassId::new(row.try_get("fitness_class_id")?),
            created_at: timestamp::decode(row, "created_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO bookings (status, user_id, fitness_class_id, created_at)
    VALUES (?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM bookings WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM bookings ORDER BY id";
const UPDATE: &str = r"
    UPDATE bookings
    SET status = ?, user_id = ?, fitness_class_id = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM bookings WHERE id = ?";
const USER_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM users WHERE id = ?)";

/// `SQLite`-backed booking repository.
#[derive(Clone)]
pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Turn a failed write into a typed error.
    async fn write_error(
        &self,
        err: sqlx::Error,
        user_id: UserId,
        class_id: FitnessClassId,
    ) -> FitbookError {
        if !is_foreign_key_violation(&err) {
            return StorageError::from(err).into();
        }

        let user_exists: Result<(i64,), _> = sqlx::query_as(USER_EXISTS)
            .bind(user_id.get())
            .fetch_one(&self.pool)
            .await;
        match user_exists {
            Ok((0,)) => NotFoundError::new("User", user_id).into(),
            Ok(_) => NotFoundError::new("FitnessClass", class_id).into(),
            Err(lookup) => StorageError::from(lookup).into(),
        }
    }
}

impl BookingRepository for SqliteBookingRepository {
    async fn create(&self, booking: NewBooking) -> Result<Booking, FitbookError> {
        let result = sqlx::query(INSERT)
            .bind(&booking.status)
            .bind(booking.user_id.get())
            .bind(booking.fitness_class_id.get())
            .bind(timestamp::encode(&booking.created_at))
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(booking.with_id(BookingId::new(done.last_insert_rowid()))),
            Err(err) => Err(self
                .write_error(err, booking.user_id, booking.fitness_class_id)
                .await),
        }
    }

    async fn get_by_id(&self, id: BookingId) -> Result<Option<Booking>, FitbookError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Booking>, FitbookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, booking: Booking) -> Result<Booking, FitbookError> {
        let result = sqlx::query(UPDATE)
            .bind(&booking.status)
            .bind(booking.user_id.get())
            .bind(booking.fitness_class_id.get())
            .bind(booking.id.get())
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => {
                Err(NotFoundError::new("Booking", booking.id).into())
            }
            Ok(_) => Ok(booking),
            Err(err) => Err(self
                .write_error(err, booking.user_id, booking.fitness_class_id)
                .await),
        }
    }

    async fn delete(&self, id: BookingId) -> Result<bool, FitbookError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
