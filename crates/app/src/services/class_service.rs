//! Fitness class service: use-cases for managing classes.

use fitbook_domain::error::{FitbookError, NotFoundError};
use fitbook_domain::fitness_class::{FitnessClass, FitnessClassDraft};
use fitbook_domain::id::FitnessClassId;

use crate::ports::FitnessClassRepository;

/// Application service for fitness class CRUD operations.
pub struct FitnessClassService<R> {
    repo: R,
}

impl<R: FitnessClassRepository> FitnessClassService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a class. Every field is required.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::Validation`] if a field is blank or too long
    /// or the schedule is not ISO 8601, or a storage error propagated from
    /// the repository.
    #[tracing::instrument(skip(self, description, instructor))]
    pub async fn create_class(
        &self,
        name: &str,
        description: &str,
        instructor: &str,
        schedule: &str,
    ) -> Result<FitnessClass, FitbookError> {
        let draft = draft(name, description, instructor, schedule)?;
        let created = self.repo.create(draft).await?;
        tracing::info!(class_id = %created.id, "fitness class created");
        Ok(created)
    }

    /// Look up a class by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] when no class with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_class(&self, id: FitnessClassId) -> Result<FitnessClass, FitbookError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("FitnessClass", id).into())
    }

    /// List all classes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_classes(&self) -> Result<Vec<FitnessClass>, FitbookError> {
        self.repo.get_all().await
    }

    /// Replace every field of an existing class.
    ///
    /// The stored class is untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] if the class does not exist,
    /// [`FitbookError::Validation`] under the same rules as
    /// [`create_class`](Self::create_class), or a storage error.
    #[tracing::instrument(skip(self, description, instructor))]
    pub async fn update_class(
        &self,
        id: FitnessClassId,
        name: &str,
        description: &str,
        instructor: &str,
        schedule: &str,
    ) -> Result<FitnessClass, FitbookError> {
        let current = self.get_class(id).await?;
        let draft = draft(name, description, instructor, schedule)?;
        self.repo.update(draft.with_id(current.id)).await
    }

    /// Delete a class and, through the store, all of its bookings.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] if the class does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_class(&self, id: FitnessClassId) -> Result<(), FitbookError> {
        if !self.repo.delete(id).await? {
            return Err(NotFoundError::new("FitnessClass", id).into());
        }
        tracing::info!(class_id = %id, "fitness class deleted");
        Ok(())
    }
}

fn draft(
    name: &str,
    description: &str,
    instructor: &str,
    schedule: &str,
) -> Result<FitnessClassDraft, FitbookError> {
    FitnessClassDraft::builder()
        .name(name)
        .description(description)
        .instructor(instructor)
        .schedule(schedule)
        .build()
}
