//! Fitness class: a scheduled session users can book.

use serde::Serialize;

use crate::error::FitbookError;
use crate::id::FitnessClassId;
use crate::time::Timestamp;
use crate::validate::{parse_timestamp, require_text};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 200;
pub const INSTRUCTOR_MAX_LEN: usize = 100;

/// A stored fitness class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitnessClass {
    pub id: FitnessClassId,
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub schedule: Timestamp,
}

/// Every user-supplied field of a class, validated.
///
/// Used both to create a class and to fully replace an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitnessClassDraft {
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub schedule: Timestamp,
}

impl FitnessClassDraft {
    /// Create a builder for constructing a [`FitnessClassDraft`].
    #[must_use]
    pub fn builder() -> FitnessClassDraftBuilder {
        FitnessClassDraftBuilder::default()
    }

    /// Attach an id, producing a [`FitnessClass`].
    #[must_use]
    pub fn with_id(self, id: FitnessClassId) -> FitnessClass {
        FitnessClass {
            id,
            name: self.name,
            description: self.description,
            instructor: self.instructor,
            schedule: self.schedule,
        }
    }
}

/// Step-by-step builder for [`FitnessClassDraft`].
///
/// The schedule is taken as text and parsed on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct FitnessClassDraftBuilder {
    name: Option<String>,
    description: Option<String>,
    instructor: Option<String>,
    schedule: Option<String>,
}

impl FitnessClassDraftBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    /// Consume the builder, validate, and return a draft.
    ///
    /// # Errors
    ///
    /// Returns [`FitbookError::Validation`] if any field is missing, blank or
    /// too long, or if the schedule is not ISO 8601.
    pub fn build(self) -> Result<FitnessClassDraft, FitbookError> {
        let name = self.name.unwrap_or_default();
        let description = self.description.unwrap_or_default();
        let instructor = self.instructor.unwrap_or_default();
        let schedule = self.schedule.unwrap_or_default();

        require_text("name", &name, NAME_MAX_LEN)?;
        require_text("description", &description, DESCRIPTION_MAX_LEN)?;
        require_text("instructor", &instructor, INSTRUCTOR_MAX_LEN)?;
        require_text("schedule", &schedule, usize::MAX)?;
        let schedule = parse_timestamp("schedule", &schedule)?;

        Ok(FitnessClassDraft {
            name,
            description,
            instructor,
            schedule,
        })
    }
}
