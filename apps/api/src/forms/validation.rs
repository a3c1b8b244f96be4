//! Field rules for every section draft.
//!
//! Each `validate_*` function is pure: it reads a draft and returns either
//! the value the store should hold or every violation found, addressed by
//! field path. Lengths are counted in characters and nothing is trimmed.

use crate::forms::skills::{LanguageDraft, SkillDraft};
use crate::forms::{FieldError, ValidationErrors};
use crate::models::resume::{
    Achievement, Education, Experience, LanguageEntry, PersonalInfo, Proficiency, Skill,
    SkillLevel,
};

pub const MIN_TEXT_LEN: usize = 2;
pub const MIN_EXPERIENCE_DESCRIPTION_LEN: usize = 30;
pub const MIN_ACHIEVEMENT_DESCRIPTION_LEN: usize = 10;

pub const MSG_FULL_NAME: &str = "Full name is required";
pub const MSG_EMAIL: &str = "Invalid email address";
pub const MSG_PHONE: &str = "Phone number is required";
pub const MSG_LOCATION: &str = "Location is required";

pub const MSG_COMPANY: &str = "Company name is required";
pub const MSG_POSITION: &str = "Position is required";
pub const MSG_START_DATE: &str = "Start date is required";
pub const MSG_EXPERIENCE_DESCRIPTION: &str = "Description must be at least 30 characters";

pub const MSG_INSTITUTION: &str = "Institution name is required";
pub const MSG_DEGREE: &str = "Degree is required";
pub const MSG_FIELD_OF_STUDY: &str = "Field of study is required";

pub const MSG_SKILL_NAME: &str = "Skill name is required";
pub const MSG_SKILL_LEVEL: &str = "Skill level is required";
pub const MSG_LANGUAGE: &str = "Language is required";
pub const MSG_PROFICIENCY: &str = "Proficiency level is required";
pub const MSG_ACHIEVEMENT_TITLE: &str = "Achievement title is required";
pub const MSG_ACHIEVEMENT_DESCRIPTION: &str = "Description must be at least 10 characters";

/// Collects violations for one draft, then either yields the value or fails.
#[derive(Debug, Default)]
struct Violations {
    errors: Vec<FieldError>,
}

impl Violations {
    fn check(&mut self, ok: bool, path: String, message: &str) {
        if !ok {
            self.errors.push(FieldError {
                path,
                message: message.to_string(),
            });
        }
    }

    fn min_len(&mut self, path: String, value: &str, min: usize, message: &str) {
        self.check(value.chars().count() >= min, path, message);
    }

    fn finish<V>(self, value: V) -> Result<V, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

fn row_path(list: &str, index: usize, field: &str) -> String {
    format!("{list}.{index}.{field}")
}

/// `local@domain.tld`, no whitespace, exactly one `@`.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

pub fn validate_personal_info(draft: &PersonalInfo) -> Result<PersonalInfo, ValidationErrors> {
    let mut v = Violations::default();
    v.min_len("fullName".into(), &draft.full_name, MIN_TEXT_LEN, MSG_FULL_NAME);
    v.check(looks_like_email(&draft.email), "email".into(), MSG_EMAIL);
    v.min_len("phone".into(), &draft.phone, MIN_TEXT_LEN, MSG_PHONE);
    v.min_len("location".into(), &draft.location, MIN_TEXT_LEN, MSG_LOCATION);
    v.finish(draft.clone())
}

pub fn validate_experiences(
    list: &str,
    drafts: &[Experience],
) -> Result<Vec<Experience>, ValidationErrors> {
    let mut v = Violations::default();
    for (i, exp) in drafts.iter().enumerate() {
        let path = |field: &str| row_path(list, i, field);
        v.min_len(path("company"), &exp.company, MIN_TEXT_LEN, MSG_COMPANY);
        v.min_len(path("position"), &exp.position, MIN_TEXT_LEN, MSG_POSITION);
        v.min_len(path("startDate"), &exp.start_date, MIN_TEXT_LEN, MSG_START_DATE);
        v.min_len(
            path("description"),
            &exp.description,
            MIN_EXPERIENCE_DESCRIPTION_LEN,
            MSG_EXPERIENCE_DESCRIPTION,
        );
    }
    v.finish(drafts.to_vec())
}

pub fn validate_education(
    list: &str,
    drafts: &[Education],
) -> Result<Vec<Education>, ValidationErrors> {
    let mut v = Violations::default();
    for (i, edu) in drafts.iter().enumerate() {
        let path = |field: &str| row_path(list, i, field);
        v.min_len(path("institution"), &edu.institution, MIN_TEXT_LEN, MSG_INSTITUTION);
        v.min_len(path("degree"), &edu.degree, MIN_TEXT_LEN, MSG_DEGREE);
        v.min_len(path("field"), &edu.field, MIN_TEXT_LEN, MSG_FIELD_OF_STUDY);
        v.min_len(path("startDate"), &edu.start_date, MIN_TEXT_LEN, MSG_START_DATE);
    }
    v.finish(drafts.to_vec())
}

pub fn validate_skills(list: &str, drafts: &[SkillDraft]) -> Result<Vec<Skill>, ValidationErrors> {
    let mut v = Violations::default();
    let mut skills = Vec::with_capacity(drafts.len());
    for (i, draft) in drafts.iter().enumerate() {
        v.min_len(row_path(list, i, "name"), &draft.name, MIN_TEXT_LEN, MSG_SKILL_NAME);
        match draft.level.parse::<SkillLevel>() {
            Ok(level) => skills.push(Skill {
                name: draft.name.clone(),
                level,
            }),
            Err(_) => v.check(false, row_path(list, i, "level"), MSG_SKILL_LEVEL),
        }
    }
    v.finish(skills)
}

pub fn validate_languages(
    list: &str,
    drafts: &[LanguageDraft],
) -> Result<Vec<LanguageEntry>, ValidationErrors> {
    let mut v = Violations::default();
    let mut languages = Vec::with_capacity(drafts.len());
    for (i, draft) in drafts.iter().enumerate() {
        v.min_len(
            row_path(list, i, "language"),
            &draft.language,
            MIN_TEXT_LEN,
            MSG_LANGUAGE,
        );
        match draft.proficiency.parse::<Proficiency>() {
            Ok(proficiency) => languages.push(LanguageEntry {
                language: draft.language.clone(),
                proficiency,
            }),
            Err(_) => v.check(false, row_path(list, i, "proficiency"), MSG_PROFICIENCY),
        }
    }
    v.finish(languages)
}

pub fn validate_achievements(
    list: &str,
    drafts: &[Achievement],
) -> Result<Vec<Achievement>, ValidationErrors> {
    let mut v = Violations::default();
    for (i, a) in drafts.iter().enumerate() {
        v.min_len(
            row_path(list, i, "title"),
            &a.title,
            MIN_TEXT_LEN,
            MSG_ACHIEVEMENT_TITLE,
        );
        v.min_len(
            row_path(list, i, "description"),
            &a.description,
            MIN_ACHIEVEMENT_DESCRIPTION_LEN,
            MSG_ACHIEVEMENT_DESCRIPTION,
        );
    }
    v.finish(drafts.to_vec())
}
