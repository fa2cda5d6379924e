//! User: a person who books fitness classes.

use serde::Serialize;

use crate::error::{FitbookError, ValidationError};
use crate::id::UserId;
use crate::validate::{is_valid_email, require_text, supplied};

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 120;

/// A registered user. `email` is unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::Validation`] when `name` or `email` is invalid.
    pub fn validate(&self) -> Result<(), FitbookError> {
        validate_fields(&self.name, &self.email)
    }
}

/// A user that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Validate and build a new user.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::Validation`] when the name is blank or too
    /// long, or when the email is malformed or too long.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, FitbookError> {
        let user = Self {
            name: name.into(),
            email: email.into(),
        };
        validate_fields(&user.name, &user.email)?;
        Ok(user)
    }

    /// Attach the id assigned by the store.
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Partial update: `None` (or blank) leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    #[must_use]
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            name: supplied(name),
            email: supplied(email),
        }
    }

    /// Apply the supplied fields to `user` and re-validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::Validation`] if a supplied field is invalid.
    pub fn apply(self, mut user: User) -> Result<User, FitbookError> {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        user.validate()?;
        Ok(user)
    }
}

fn validate_fields(name: &str, email: &str) -> Result<(), FitbookError> {
    require_text("name", name, NAME_MAX_LEN)?;
    require_text("email", email, EMAIL_MAX_LEN)?;
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        NewUser::new("Ann", "ann@x.com")
            .unwrap()
            .with_id(UserId::new(1))
    }

    #[test]
    fn should_serialize_with_bare_integer_id() {
        let json = serde_json::to_value(ann()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Ann", "email": "ann@x.com"})
        );
    }

    #[test]
    fn should_build_new_user_when_fields_valid() {
        let user = NewUser::new("Ann", "ann@x.com").unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@x.com");
    }

    #[test]
    fn should_return_validation_error_when_name_blank() {
        let result = NewUser::new(" ", "ann@x.com");
        assert!(matches!(
            result,
            Err(FitbookError::Validation(ValidationError::Blank { field: "name" }))
        ));
    }

    #[test]
    fn should_return_validation_error_when_email_malformed() {
        let result = NewUser::new("Ann", "not-an-email");
        assert!(matches!(
            result,
            Err(FitbookError::Validation(ValidationError::InvalidEmail(_)))
        ));
    }

    #[test]
    fn should_reject_name_longer_than_limit() {
        let result = NewUser::new("a".repeat(NAME_MAX_LEN + 1), "ann@x.com");
        assert!(matches!(
            result,
            Err(FitbookError::Validation(ValidationError::TooLong { field: "name", .. }))
        ));
    }

    #[test]
    fn should_leave_fields_unchanged_when_changes_blank() {
        let changes = UserChanges::new(Some(String::new()), None);
        let updated = changes.apply(ann()).unwrap();
        assert_eq!(updated, ann());
    }

    #[test]
    fn should_apply_supplied_fields() {
        let changes = UserChanges::new(Some("Anna".to_string()), Some("anna@x.com".to_string()));
        let updated = changes.apply(ann()).unwrap();
        assert_eq!(updated.id, UserId::new(1));
        assert_eq!(updated.name, "Anna");
        assert_eq!(updated.email, "anna@x.com");
    }

    #[test]
    fn should_reject_invalid_email_change() {
        let changes = UserChanges::new(None, Some("nope".to_string()));
        assert!(changes.apply(ann()).is_err());
    }
}
