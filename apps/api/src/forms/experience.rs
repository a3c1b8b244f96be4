use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::forms::path::FieldPath;
use crate::forms::rows::{self, RowPolicy};
use crate::forms::validation::validate_experiences;
use crate::forms::{FormError, FormPhase, FormState, FormView, SectionForm, ValidationErrors};
use crate::models::resume::Experience;
use crate::navigation::Section;
use crate::store::ResumeStore;

pub const EXPERIENCES: &str = "experiences";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceDraft {
    pub experiences: Vec<Experience>,
}

impl Default for ExperienceDraft {
    fn default() -> Self {
        Self {
            experiences: vec![Experience::default()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExperienceForm {
    state: FormState<ExperienceDraft>,
    policy: RowPolicy,
}

impl ExperienceForm {
    pub fn new(policy: RowPolicy) -> Self {
        Self {
            state: FormState::new(ExperienceDraft::default()),
            policy,
        }
    }

    pub fn draft(&self) -> &ExperienceDraft {
        self.state.draft()
    }
}

fn field_mut<'a>(draft: &'a mut ExperienceDraft, path: &str) -> Result<&'a mut String, FormError> {
    let unknown = || FormError::UnknownField(path.to_string());
    let FieldPath::Row { list, index, field } = FieldPath::parse(path)? else {
        return Err(unknown());
    };
    if list != EXPERIENCES {
        return Err(unknown());
    }
    let row = rows::row_mut(&mut draft.experiences, list, index)?;
    match field {
        "company" => Ok(&mut row.company),
        "position" => Ok(&mut row.position),
        "startDate" => Ok(&mut row.start_date),
        "endDate" => Ok(&mut row.end_date),
        "description" => Ok(&mut row.description),
        _ => Err(unknown()),
    }
}

impl SectionForm for ExperienceForm {
    fn section(&self) -> Section {
        Section::Experience
    }

    fn phase(&self) -> FormPhase {
        self.state.phase()
    }

    fn view(&self) -> FormView {
        self.state.view(Section::Experience)
    }

    fn set_field(&mut self, path: &str, value: String) -> Result<(), FormError> {
        self.state.edit_field(path, |draft| {
            *field_mut(draft, path)? = value;
            Ok(())
        })
    }

    fn append_row(&mut self, list: &str) -> Result<usize, FormError> {
        if list != EXPERIENCES {
            return Err(FormError::UnknownList(list.to_string()));
        }
        self.state
            .edit_rows(|draft| Ok(rows::append_row(&mut draft.experiences)))
    }

    fn remove_row(&mut self, list: &str, index: usize) -> Result<(), FormError> {
        if list != EXPERIENCES {
            return Err(FormError::UnknownList(list.to_string()));
        }
        let policy = self.policy;
        self.state.edit_rows(|draft| {
            rows::remove_row(&mut draft.experiences, EXPERIENCES, index, policy).map(|_| ())
        })
    }

    fn submit(&mut self, store: &mut ResumeStore) -> Result<(), ValidationErrors> {
        match self
            .state
            .submit(|draft| validate_experiences(EXPERIENCES, &draft.experiences))
        {
            Ok(experiences) => {
                info!(count = experiences.len(), "Work experience submitted");
                store.set_experiences(experiences);
                Ok(())
            }
            Err(errors) => {
                warn!(fields = errors.len(), "Work experience rejected");
                Err(errors)
            }
        }
    }

    fn reset(&mut self) {
        self.state.reset(ExperienceDraft::default());
    }
}
