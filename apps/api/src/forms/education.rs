use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::forms::path::FieldPath;
use crate::forms::rows::{self, RowPolicy};
use crate::forms::validation::validate_education;
use crate::forms::{FormError, FormPhase, FormState, FormView, SectionForm, ValidationErrors};
use crate::models::resume::Education;
use crate::navigation::Section;
use crate::store::ResumeStore;

pub const EDUCATION: &str = "education";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationDraft {
    pub education: Vec<Education>,
}

impl Default for EducationDraft {
    fn default() -> Self {
        Self {
            education: vec![Education::default()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct EducationForm {
    state: FormState<EducationDraft>,
    policy: RowPolicy,
}

impl EducationForm {
    pub fn new(policy: RowPolicy) -> Self {
        Self {
            state: FormState::new(EducationDraft::default()),
            policy,
        }
    }

    pub fn draft(&self) -> &EducationDraft {
        self.state.draft()
    }
}

fn apply(draft: &mut EducationDraft, path: &str, value: String) -> Result<(), FormError> {
    let unknown = || FormError::UnknownField(path.to_string());
    let FieldPath::Row { list, index, field } = FieldPath::parse(path)? else {
        return Err(unknown());
    };
    if list != EDUCATION {
        return Err(unknown());
    }
    let row = rows::row_mut(&mut draft.education, list, index)?;
    match field {
        "institution" => row.institution = value,
        "degree" => row.degree = value,
        "field" => row.field = value,
        "startDate" => row.start_date = value,
        "endDate" => row.end_date = value,
        // a cleared grade is no grade
        "grade" => row.grade = Some(value).filter(|g| !g.is_empty()),
        _ => return Err(unknown()),
    }
    Ok(())
}

impl SectionForm for EducationForm {
    fn section(&self) -> Section {
        Section::Education
    }

    fn phase(&self) -> FormPhase {
        self.state.phase()
    }

    fn view(&self) -> FormView {
        self.state.view(Section::Education)
    }

    fn set_field(&mut self, path: &str, value: String) -> Result<(), FormError> {
        self.state
            .edit_field(path, |draft| apply(draft, path, value))
    }

    fn append_row(&mut self, list: &str) -> Result<usize, FormError> {
        if list != EDUCATION {
            return Err(FormError::UnknownList(list.to_string()));
        }
        self.state
            .edit_rows(|draft| Ok(rows::append_row(&mut draft.education)))
    }

    fn remove_row(&mut self, list: &str, index: usize) -> Result<(), FormError> {
        if list != EDUCATION {
            return Err(FormError::UnknownList(list.to_string()));
        }
        let policy = self.policy;
        self.state.edit_rows(|draft| {
            rows::remove_row(&mut draft.education, EDUCATION, index, policy).map(|_| ())
        })
    }

    fn submit(&mut self, store: &mut ResumeStore) -> Result<(), ValidationErrors> {
        match self
            .state
            .submit(|draft| validate_education(EDUCATION, &draft.education))
        {
            Ok(education) => {
                info!(count = education.len(), "Education submitted");
                store.set_education(education);
                Ok(())
            }
            Err(errors) => {
                warn!(fields = errors.len(), "Education rejected");
                Err(errors)
            }
        }
    }

    fn reset(&mut self) {
        self.state.reset(EducationDraft::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EducationForm {
        let mut form = EducationForm::new(RowPolicy::default());
        for (field, value) in [
            ("institution", "MIT"),
            ("degree", "BSc"),
            ("field", "Computer Science"),
            ("startDate", "2012-09"),
            ("endDate", "2016-06"),
        ] {
            form.set_field(&format!("education.0.{field}"), value.into())
                .unwrap();
        }
        form
    }

    #[test]
    fn test_grade_is_optional() {
        let mut store = ResumeStore::new();
        let mut form = filled();
        form.submit(&mut store).unwrap();
        assert_eq!(store.get().education[0].grade, None);
    }

    #[test]
    fn test_grade_set_and_cleared() {
        let mut form = filled();
        form.set_field("education.0.grade", "3.9 GPA".into()).unwrap();
        assert_eq!(form.draft().education[0].grade.as_deref(), Some("3.9 GPA"));
        form.set_field("education.0.grade", String::new()).unwrap();
        assert_eq!(form.draft().education[0].grade, None);
    }

    #[test]
    fn test_valid_submit_matches_draft() {
        let mut store = ResumeStore::new();
        let mut form = filled();
        form.set_field("education.0.grade", "First".into()).unwrap();
        form.submit(&mut store).unwrap();
        assert_eq!(store.get().education, form.draft().education);
        assert_eq!(form.phase(), FormPhase::Submitted);
    }

    #[test]
    fn test_missing_degree_blocks_submit() {
        let mut store = ResumeStore::new();
        let mut form = filled();
        form.set_field("education.0.degree", "B".into()).unwrap();
        let errors = form.submit(&mut store).unwrap_err();
        assert_eq!(
            errors.message_for("education.0.degree"),
            Some("Degree is required")
        );
        assert!(store.get().education.is_empty());
    }

    #[test]
    fn test_every_row_is_validated() {
        let mut store = ResumeStore::new();
        let mut form = filled();
        form.append_row(EDUCATION).unwrap();
        let errors = form.submit(&mut store).unwrap_err();
        assert!(errors.errors.iter().all(|e| e.path.starts_with("education.1.")));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_remove_row_with_relaxed_policy() {
        let mut form = EducationForm::new(RowPolicy::allow_first_row_removal());
        form.append_row(EDUCATION).unwrap();
        form.set_field("education.1.institution", "Oxford".into())
            .unwrap();
        form.remove_row(EDUCATION, 0).unwrap();
        assert_eq!(form.draft().education.len(), 1);
        assert_eq!(form.draft().education[0].institution, "Oxford");
    }
}
