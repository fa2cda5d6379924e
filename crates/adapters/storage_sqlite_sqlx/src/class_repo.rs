//! `SQLite` implementation of [`FitnessClassRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use fitbook_app::ports::FitnessClassRepository;
use fitbook_domain::error::{FitbookError, NotFoundError};
use fitbook_domain::fitness_class::{FitnessClass, FitnessClassDraft};
use fitbook_domain::id::FitnessClassId;

use crate::error::StorageError;
use crate::timestamp;

struct Wrapper(FitnessClass);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<FitnessClass> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(FitnessClass {
            id: FitnessClassId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            instructor: row.try_get("instructor")?,
            schedule: timestamp::decode(row, "schedule")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO fitness_classes (name, description, instructor, schedule)
    VALUES (?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM fitness_classes WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM fitness_classes ORDER BY id";
const UPDATE: &str = r"
    UPDATE fitness_classes
    SET name = ?, description = ?, instructor = ?, schedule = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM fitness_classes WHERE id = ?";

/// `SQLite`-backed fitness class repository.
#[derive(Clone)]
pub struct SqliteFitnessClassRepository {
    pool: SqlitePool,
}

impl SqliteFitnessClassRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FitnessClassRepository for SqliteFitnessClassRepository {
    async fn create(&self, draft: FitnessClassDraft) -> Result<FitnessClass, FitbookError> {
        let result = sqlx::query(INSERT)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(&draft.instructor)
            .bind(timestamp::encode(&draft.schedule))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(draft.with_id(FitnessClassId::new(result.last_insert_rowid())))
    }

    async fn get_by_id(&self, id: FitnessClassId) -> Result<Option<FitnessClass>, FitbookError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<FitnessClass>, FitbookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, class: FitnessClass) -> Result<FitnessClass, FitbookError> {
        let result = sqlx::query(UPDATE)
            .bind(&class.name)
            .bind(&class.description)
            .bind(&class.instructor)
            .bind(timestamp::encode(&class.schedule))
            .bind(class.id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new("FitnessClass", class.id).into());
        }
        Ok(class)
    }

    async fn delete(&self, id: FitnessClassId) -> Result<bool, FitbookError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
