//! Section Forms: one local state machine per resume section.
//!
//! A form owns a draft, edits it by field path (`fullName`,
//! `experiences.0.company`), gates submission on validation and, once the
//! draft is valid, replaces its section(s) in the [`ResumeStore`] wholesale.
//! Forms never read each other or the store; the store is the only point of
//! integration.

pub mod education;
pub mod experience;
pub mod path;
pub mod personal;
pub mod rows;
pub mod skills;
pub mod validation;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::Section;
use crate::store::ResumeStore;

pub use rows::RowPolicy;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// A single rule violation, addressed by the draft field path it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Every rule violation found in one submission. Blocks the store write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }
}

/// Misuse of the draft API: the request never reached validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("unknown list '{0}'")]
    UnknownList(String),

    #[error("'{list}' has no row {index}")]
    RowOutOfRange { list: String, index: usize },

    #[error("the first '{list}' row cannot be removed")]
    ProtectedRow { list: String },

    #[error("'{list}' must keep at least one row")]
    LastRow { list: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Form state machine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Editing,
    /// Held only while `submit` runs its rules.
    Validating,
    Invalid,
    Submitted,
}

/// Serializable picture of a form for the UI layer.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub section: Section,
    pub phase: FormPhase,
    pub draft: serde_json::Value,
    pub errors: Vec<FieldError>,
}

/// Draft + phase + displayed errors, shared by every section form.
#[derive(Debug, Clone)]
pub struct FormState<D> {
    draft: D,
    phase: FormPhase,
    errors: Vec<FieldError>,
}

impl<D: Serialize> FormState<D> {
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            phase: FormPhase::Editing,
            errors: Vec::new(),
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Edits a single field. An edit to a field carrying an error clears
    /// that error and returns the form to editing; any edit after a
    /// successful submission does the same.
    pub fn edit_field<R>(
        &mut self,
        path: &str,
        edit: impl FnOnce(&mut D) -> Result<R, FormError>,
    ) -> Result<R, FormError> {
        let out = edit(&mut self.draft)?;
        let before = self.errors.len();
        self.errors.retain(|e| e.path != path);
        let cleared = self.errors.len() != before;
        match self.phase {
            FormPhase::Invalid if cleared => self.phase = FormPhase::Editing,
            FormPhase::Submitted => self.phase = FormPhase::Editing,
            _ => {}
        }
        Ok(out)
    }

    /// Appends or removes rows. Outstanding errors are dropped since their
    /// row indices may no longer line up.
    pub fn edit_rows<R>(
        &mut self,
        edit: impl FnOnce(&mut D) -> Result<R, FormError>,
    ) -> Result<R, FormError> {
        let out = edit(&mut self.draft)?;
        self.errors.clear();
        self.phase = FormPhase::Editing;
        Ok(out)
    }

    /// Runs `validate` over the whole draft and records the outcome.
    pub fn submit<V>(
        &mut self,
        validate: impl FnOnce(&D) -> Result<V, ValidationErrors>,
    ) -> Result<V, ValidationErrors> {
        self.phase = FormPhase::Validating;
        match validate(&self.draft) {
            Ok(value) => {
                self.errors.clear();
                self.phase = FormPhase::Submitted;
                Ok(value)
            }
            Err(errors) => {
                self.errors = errors.errors.clone();
                self.phase = FormPhase::Invalid;
                Err(errors)
            }
        }
    }

    pub fn reset(&mut self, draft: D) {
        *self = Self::new(draft);
    }

    pub fn view(&self, section: Section) -> FormView {
        FormView {
            section,
            phase: self.phase,
            draft: serde_json::to_value(&self.draft).unwrap_or_default(),
            errors: self.errors.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Common form interface
// ────────────────────────────────────────────────────────────────────────────

/// Uniform access to any section form, used by the session and the routes.
pub trait SectionForm: Send {
    fn section(&self) -> Section;

    fn phase(&self) -> FormPhase;

    fn view(&self) -> FormView;

    fn set_field(&mut self, path: &str, value: String) -> Result<(), FormError>;

    /// Appends a blank row to `list`, returning its index.
    fn append_row(&mut self, list: &str) -> Result<usize, FormError>;

    fn remove_row(&mut self, list: &str, index: usize) -> Result<(), FormError>;

    /// Validates the draft and, when valid, writes it into `store`.
    fn submit(&mut self, store: &mut ResumeStore) -> Result<(), ValidationErrors>;

    /// Discards the draft and seeds a blank one.
    fn reset(&mut self);
}
