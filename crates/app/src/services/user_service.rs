//! User service: use-cases for managing users.

use fitbook_domain::error::{ConflictError, FitbookError, NotFoundError};
use fitbook_domain::id::UserId;
use fitbook_domain::user::{NewUser, User, UserChanges};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::Validation`] if the name or email is invalid,
    /// [`FitbookError::Conflict`] if the email is already in use, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, name, email))]
    pub async fn create_user(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<User, FitbookError> {
        let user = NewUser::new(name, email)?;
        if self.repo.find_by_email(&user.email).await?.is_some() {
            tracing::debug!(email = %user.email, "rejected duplicate email");
            return Err(ConflictError::EmailInUse(user.email).into());
        }
        let created = self.repo.create(user).await?;
        tracing::info!(user_id = %created.id, "user created");
        Ok(created)
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, FitbookError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("User", id).into())
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, FitbookError> {
        self.repo.get_all().await
    }

    /// Partially update a user. Absent or blank fields are left unchanged;
    /// supplying nothing succeeds without writing.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] if the user does not exist,
    /// [`FitbookError::Validation`] if a supplied field is invalid,
    /// [`FitbookError::Conflict`] if the new email belongs to another user,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, name, email))]
    pub async fn update_user(
        &self,
        id: UserId,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, FitbookError> {
        let current = self.get_user(id).await?;
        let updated = UserChanges::new(name, email).apply(current.clone())?;
        if updated == current {
            return Ok(current);
        }

        if updated.email != current.email
            && let Some(owner) = self.repo.find_by_email(&updated.email).await?
            && owner.id != id
        {
            tracing::debug!(email = %updated.email, owner = %owner.id, "rejected email change");
            return Err(ConflictError::EmailInUse(updated.email).into());
        }

        self.repo.update(updated).await
    }

    /// Delete a user and, through the store, all of its bookings.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::NotFound`] if the user does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), FitbookError> {
        if !self.repo.delete(id).await? {
            return Err(NotFoundError::new("User", id).into());
        }
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}
