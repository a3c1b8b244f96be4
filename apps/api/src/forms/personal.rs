use tracing::{info, warn};

use crate::forms::path::FieldPath;
use crate::forms::validation::validate_personal_info;
use crate::forms::{FormError, FormPhase, FormState, FormView, SectionForm, ValidationErrors};
use crate::models::resume::PersonalInfo;
use crate::navigation::Section;
use crate::store::ResumeStore;

/// Personal details: a single record, no rows.
#[derive(Debug, Clone)]
pub struct PersonalInfoForm {
    state: FormState<PersonalInfo>,
}

impl Default for PersonalInfoForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalInfoForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(PersonalInfo::default()),
        }
    }

    pub fn draft(&self) -> &PersonalInfo {
        self.state.draft()
    }
}

fn field_mut<'a>(draft: &'a mut PersonalInfo, path: &str) -> Result<&'a mut String, FormError> {
    let field = match FieldPath::parse(path)? {
        FieldPath::Field(field) => field,
        FieldPath::Row { .. } => return Err(FormError::UnknownField(path.to_string())),
    };
    match field {
        "fullName" => Ok(&mut draft.full_name),
        "email" => Ok(&mut draft.email),
        "phone" => Ok(&mut draft.phone),
        "location" => Ok(&mut draft.location),
        "summary" => Ok(&mut draft.summary),
        _ => Err(FormError::UnknownField(path.to_string())),
    }
}

impl SectionForm for PersonalInfoForm {
    fn section(&self) -> Section {
        Section::Personal
    }

    fn phase(&self) -> FormPhase {
        self.state.phase()
    }

    fn view(&self) -> FormView {
        self.state.view(Section::Personal)
    }

    fn set_field(&mut self, path: &str, value: String) -> Result<(), FormError> {
        self.state.edit_field(path, |draft| {
            *field_mut(draft, path)? = value;
            Ok(())
        })
    }

    fn append_row(&mut self, list: &str) -> Result<usize, FormError> {
        Err(FormError::UnknownList(list.to_string()))
    }

    fn remove_row(&mut self, list: &str, _index: usize) -> Result<(), FormError> {
        Err(FormError::UnknownList(list.to_string()))
    }

    fn submit(&mut self, store: &mut ResumeStore) -> Result<(), ValidationErrors> {
        match self.state.submit(validate_personal_info) {
            Ok(info) => {
                info!("Personal info submitted");
                store.set_personal_info(info);
                Ok(())
            }
            Err(errors) => {
                warn!(fields = errors.len(), "Personal info rejected");
                Err(errors)
            }
        }
    }

    fn reset(&mut self) {
        self.state.reset(PersonalInfo::default());
    }
}
