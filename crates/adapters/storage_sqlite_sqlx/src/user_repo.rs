//! `SQLite` implementation of [`UserRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use fitbook_app::ports::UserRepository;
use fitbook_domain::error::{ConflictError, FitbookError, NotFoundError};
use fitbook_domain::id::UserId;
use fitbook_domain::user::{NewUser, User};

use crate::error::{StorageError, is_unique_violation};

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (name, email) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = ?";
const SELECT_BY_EMAIL: &str = "SELECT id, name, email FROM users WHERE email = ?";
const SELECT_ALL: &str = "SELECT id, name, email FROM users ORDER BY id";
const UPDATE: &str = "UPDATE users SET name = ?, email = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";

/// A unique violation on write means another user took the email first.
fn write_error(err: sqlx::Error, email: &str) -> FitbookError {
    if is_unique_violation(&err) {
        ConflictError::EmailInUse(email.to_string()).into()
    } else {
        StorageError::from(err).into()
    }
}

/// `SQLite`-backed user repository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, FitbookError> {
        let result = sqlx::query(INSERT)
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await
            .map_err(|err| write_error(err, &user.email))?;

        Ok(user.with_id(UserId::new(result.last_insert_rowid())))
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, FitbookError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, FitbookError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<User>, FitbookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, user: User) -> Result<User, FitbookError> {
        let result = sqlx::query(UPDATE)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id.get())
            .execute(&self.pool)
            .await
            .map_err(|err| write_error(err, &user.email))?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new("User", user.id).into());
        }
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<bool, FitbookError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
