//! Contact form domain types.
//!
//! The draft holds the in-progress field values; `SubmissionState` tracks
//! the simulated submission machine `Idle -> Submitting -> Succeeded -> Idle`.
//! `Failed` exists in the state space but the simulated flow never reaches it.

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// In-progress contact form field values.
///
/// Created empty, mutated field-by-field as the visitor types, cleared on
/// successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl FormDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that every required field is non-blank.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Validation` naming the first blank field, in
    /// field order (name, email, subject, body). No partial submission
    /// occurs on failure.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("body", &self.body),
        ] {
            if value.trim().is_empty() {
                return Err(FolioError::validation(field));
            }
        }
        Ok(())
    }

    /// Clears all fields back to empty strings.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The submission status of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionState {
    /// No submission in progress.
    #[default]
    Idle,
    /// A submission is in flight (simulated delay).
    Submitting,
    /// The submission completed; auto-reverts to `Idle` after a fixed delay.
    Succeeded,
    /// The submission failed. Declared for completeness; the simulated
    /// flow always succeeds.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> FormDraft {
        FormDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project inquiry".to_string(),
            body: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_filled_draft() {
        assert!(filled_draft().validate().is_ok());
    }

    #[test]
    fn test_validate_names_first_blank_field() {
        let mut draft = filled_draft();
        draft.email = "   ".to_string();
        draft.body = String::new();

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, FolioError::Validation { field: "email" }));
    }

    #[test]
    fn test_clear_empties_all_fields() {
        let mut draft = filled_draft();
        draft.clear();
        assert_eq!(draft, FormDraft::default());
    }

    #[test]
    fn test_submission_state_display() {
        assert_eq!(SubmissionState::Submitting.to_string(), "submitting");
    }
}
