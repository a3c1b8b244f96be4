//! "Skills & More": skills, languages, hobbies and achievements on one form.
//!
//! A valid submission replaces all four store slots, one write each. If any
//! part fails validation none of them are written.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::forms::path::FieldPath;
use crate::forms::rows::{self, RowPolicy};
use crate::forms::validation::{validate_achievements, validate_languages, validate_skills};
use crate::forms::{FormError, FormPhase, FormState, FormView, SectionForm, ValidationErrors};
use crate::models::resume::{Achievement, LanguageEntry, Skill};
use crate::navigation::Section;
use crate::store::ResumeStore;

pub const SKILLS: &str = "skills";
pub const LANGUAGES: &str = "languages";
pub const ACHIEVEMENTS: &str = "achievements";
pub const HOBBIES: &str = "hobbies";

/// A skill row as typed; `level` becomes a `SkillLevel` on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub level: String,
}

/// A language row as typed; `proficiency` becomes a `Proficiency` on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDraft {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsDraft {
    pub skills: Vec<SkillDraft>,
    pub languages: Vec<LanguageDraft>,
    pub hobbies: String,
    pub achievements: Vec<Achievement>,
}

impl Default for SkillsDraft {
    fn default() -> Self {
        Self {
            skills: vec![SkillDraft::default()],
            languages: vec![LanguageDraft::default()],
            hobbies: String::new(),
            achievements: vec![Achievement::default()],
        }
    }
}

struct SkillsValue {
    skills: Vec<Skill>,
    languages: Vec<LanguageEntry>,
    hobbies: String,
    achievements: Vec<Achievement>,
}

fn validate(draft: &SkillsDraft) -> Result<SkillsValue, ValidationErrors> {
    let skills = validate_skills(SKILLS, &draft.skills);
    let languages = validate_languages(LANGUAGES, &draft.languages);
    let achievements = validate_achievements(ACHIEVEMENTS, &draft.achievements);

    match (skills, languages, achievements) {
        (Ok(skills), Ok(languages), Ok(achievements)) => Ok(SkillsValue {
            skills,
            languages,
            hobbies: draft.hobbies.clone(),
            achievements,
        }),
        (skills, languages, achievements) => {
            let mut errors = ValidationErrors::default();
            for e in [skills.err(), languages.err(), achievements.err()]
                .into_iter()
                .flatten()
            {
                errors.merge(e);
            }
            Err(errors)
        }
    }
}

fn apply(draft: &mut SkillsDraft, path: &str, value: String) -> Result<(), FormError> {
    let unknown = || FormError::UnknownField(path.to_string());
    match FieldPath::parse(path)? {
        FieldPath::Field(HOBBIES) => draft.hobbies = value,
        FieldPath::Field(_) => return Err(unknown()),
        FieldPath::Row { list, index, field } => match (list, field) {
            (SKILLS, "name") => rows::row_mut(&mut draft.skills, list, index)?.name = value,
            (SKILLS, "level") => rows::row_mut(&mut draft.skills, list, index)?.level = value,
            (LANGUAGES, "language") => {
                rows::row_mut(&mut draft.languages, list, index)?.language = value
            }
            (LANGUAGES, "proficiency") => {
                rows::row_mut(&mut draft.languages, list, index)?.proficiency = value
            }
            (ACHIEVEMENTS, "title") => {
                rows::row_mut(&mut draft.achievements, list, index)?.title = value
            }
            (ACHIEVEMENTS, "description") => {
                rows::row_mut(&mut draft.achievements, list, index)?.description = value
            }
            _ => return Err(unknown()),
        },
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct SkillsForm {
    state: FormState<SkillsDraft>,
    policy: RowPolicy,
}

impl SkillsForm {
    pub fn new(policy: RowPolicy) -> Self {
        Self {
            state: FormState::new(SkillsDraft::default()),
            policy,
        }
    }

    pub fn draft(&self) -> &SkillsDraft {
        self.state.draft()
    }
}

impl SectionForm for SkillsForm {
    fn section(&self) -> Section {
        Section::Skills
    }

    fn phase(&self) -> FormPhase {
        self.state.phase()
    }

    fn view(&self) -> FormView {
        self.state.view(Section::Skills)
    }

    fn set_field(&mut self, path: &str, value: String) -> Result<(), FormError> {
        self.state
            .edit_field(path, |draft| apply(draft, path, value))
    }

    fn append_row(&mut self, list: &str) -> Result<usize, FormError> {
        match list {
            SKILLS => self
                .state
                .edit_rows(|draft| Ok(rows::append_row(&mut draft.skills))),
            LANGUAGES => self
                .state
                .edit_rows(|draft| Ok(rows::append_row(&mut draft.languages))),
            ACHIEVEMENTS => self
                .state
                .edit_rows(|draft| Ok(rows::append_row(&mut draft.achievements))),
            other => Err(FormError::UnknownList(other.to_string())),
        }
    }

    fn remove_row(&mut self, list: &str, index: usize) -> Result<(), FormError> {
        let policy = self.policy;
        match list {
            SKILLS => self.state.edit_rows(|draft| {
                rows::remove_row(&mut draft.skills, SKILLS, index, policy).map(|_| ())
            }),
            LANGUAGES => self.state.edit_rows(|draft| {
                rows::remove_row(&mut draft.languages, LANGUAGES, index, policy).map(|_| ())
            }),
            ACHIEVEMENTS => self.state.edit_rows(|draft| {
                rows::remove_row(&mut draft.achievements, ACHIEVEMENTS, index, policy).map(|_| ())
            }),
            other => Err(FormError::UnknownList(other.to_string())),
        }
    }

    fn submit(&mut self, store: &mut ResumeStore) -> Result<(), ValidationErrors> {
        match self.state.submit(validate) {
            Ok(value) => {
                info!(
                    skills = value.skills.len(),
                    languages = value.languages.len(),
                    achievements = value.achievements.len(),
                    "Skills and additional information submitted"
                );
                store.set_skills(value.skills);
                store.set_languages(value.languages);
                store.set_hobbies(value.hobbies);
                store.set_achievements(value.achievements);
                Ok(())
            }
            Err(errors) => {
                warn!(fields = errors.len(), "Skills and additional information rejected");
                Err(errors)
            }
        }
    }

    fn reset(&mut self) {
        self.state.reset(SkillsDraft::default());
    }
}
