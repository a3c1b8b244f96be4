//! Preview Renderer: a pure function from a store snapshot to a resume
//! document, plus Markdown/HTML printers and the live [`PreviewPane`].
//!
//! # Rendering rules
//! - Sections appear in a fixed order: Personal Info, Work Experience,
//!   Education, Skills, Languages, Achievements, Hobbies.
//! - A section with nothing in it is left out entirely (absent personal info,
//!   empty lists, blank hobbies).
//! - Date ranges read `start - end`, with `Present` standing in for a blank end.

pub mod html;
pub mod markdown;
pub mod pane;

use serde::Serialize;

use crate::models::resume::ResumeSnapshot;

pub use pane::PreviewPane;

pub const PRESENT: &str = "Present";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewDocument {
    pub sections: Vec<PreviewSection>,
}

impl PreviewDocument {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewSection {
    Personal {
        name: String,
        contact: String,
        location: String,
        summary: String,
    },
    Entries {
        heading: String,
        entries: Vec<PreviewEntry>,
    },
    Tags {
        heading: String,
        tags: Vec<String>,
    },
    Paragraph {
        heading: String,
        text: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub fn date_range(start: &str, end: &str) -> String {
    let end = if end.is_empty() { PRESENT } else { end };
    format!("{start} - {end}")
}

pub fn render_preview(snapshot: &ResumeSnapshot) -> PreviewDocument {
    let mut sections = Vec::new();

    if let Some(info) = &snapshot.personal_info {
        sections.push(PreviewSection::Personal {
            name: info.full_name.clone(),
            contact: format!("{} • {}", info.email, info.phone),
            location: info.location.clone(),
            summary: info.summary.clone(),
        });
    }

    if !snapshot.experiences.is_empty() {
        sections.push(PreviewSection::Entries {
            heading: "Work Experience".to_string(),
            entries: snapshot
                .experiences
                .iter()
                .map(|exp| PreviewEntry {
                    title: exp.position.clone(),
                    date_range: Some(date_range(&exp.start_date, &exp.end_date)),
                    subtitle: Some(exp.company.clone()),
                    body: Some(exp.description.clone()),
                    note: None,
                })
                .collect(),
        });
    }

    if !snapshot.education.is_empty() {
        sections.push(PreviewSection::Entries {
            heading: "Education".to_string(),
            entries: snapshot
                .education
                .iter()
                .map(|edu| PreviewEntry {
                    title: format!("{} in {}", edu.degree, edu.field),
                    date_range: Some(date_range(&edu.start_date, &edu.end_date)),
                    subtitle: Some(edu.institution.clone()),
                    body: None,
                    note: edu
                        .grade
                        .as_deref()
                        .filter(|g| !g.is_empty())
                        .map(|g| format!("Grade: {g}")),
                })
                .collect(),
        });
    }

    if !snapshot.skills.is_empty() {
        sections.push(PreviewSection::Tags {
            heading: "Skills".to_string(),
            tags: snapshot
                .skills
                .iter()
                .map(|s| format!("{} ({})", s.name, s.level))
                .collect(),
        });
    }

    if !snapshot.languages.is_empty() {
        sections.push(PreviewSection::Tags {
            heading: "Languages".to_string(),
            tags: snapshot
                .languages
                .iter()
                .map(|l| format!("{} ({})", l.language, l.proficiency))
                .collect(),
        });
    }

    if !snapshot.achievements.is_empty() {
        sections.push(PreviewSection::Entries {
            heading: "Achievements".to_string(),
            entries: snapshot
                .achievements
                .iter()
                .map(|a| PreviewEntry {
                    title: a.title.clone(),
                    body: Some(a.description.clone()),
                    ..Default::default()
                })
                .collect(),
        });
    }

    if !snapshot.hobbies.is_empty() {
        sections.push(PreviewSection::Paragraph {
            heading: "Hobbies & Interests".to_string(),
            text: snapshot.hobbies.clone(),
        });
    }

    PreviewDocument { sections }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::resume::*;

    pub fn jane() -> PersonalInfo {
        PersonalInfo {
            full_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "555-0100".into(),
            location: "Springfield".into(),
            summary: "Engineer.".into(),
        }
    }

    pub fn full_snapshot() -> ResumeSnapshot {
        ResumeSnapshot {
            personal_info: Some(jane()),
            experiences: vec![Experience {
                company: "Acme".into(),
                position: "Staff Engineer".into(),
                start_date: "2019-04".into(),
                end_date: String::new(),
                description: "Led the billing migration.".into(),
            }],
            education: vec![Education {
                institution: "MIT".into(),
                degree: "BSc".into(),
                field: "Computer Science".into(),
                start_date: "2012-09".into(),
                end_date: "2016-06".into(),
                grade: Some("3.9".into()),
            }],
            skills: vec![Skill {
                name: "Rust".into(),
                level: SkillLevel::Expert,
            }],
            languages: vec![LanguageEntry {
                language: "French".into(),
                proficiency: Proficiency::Basic,
            }],
            hobbies: "Chess".into(),
            achievements: vec![Achievement {
                title: "Speaker".into(),
                description: "Talk at RustConf.".into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::models::resume::Experience;

    fn headings(doc: &PreviewDocument) -> Vec<String> {
        doc.sections
            .iter()
            .map(|s| match s {
                PreviewSection::Personal { .. } => "Personal".to_string(),
                PreviewSection::Entries { heading, .. }
                | PreviewSection::Tags { heading, .. }
                | PreviewSection::Paragraph { heading, .. } => heading.clone(),
            })
            .collect()
    }

    #[test]
    fn test_empty_snapshot_renders_nothing() {
        assert!(render_preview(&ResumeSnapshot::default()).is_empty());
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let doc = render_preview(&full_snapshot());
        assert_eq!(
            headings(&doc),
            vec![
                "Personal",
                "Work Experience",
                "Education",
                "Skills",
                "Languages",
                "Achievements",
                "Hobbies & Interests"
            ]
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut snapshot = full_snapshot();
        snapshot.personal_info = None;
        snapshot.education.clear();
        snapshot.hobbies.clear();
        let doc = render_preview(&snapshot);
        assert_eq!(
            headings(&doc),
            vec!["Work Experience", "Skills", "Languages", "Achievements"]
        );
    }

    #[test]
    fn test_personal_info_lines() {
        let snapshot = ResumeSnapshot {
            personal_info: Some(jane()),
            ..Default::default()
        };
        assert_eq!(
            render_preview(&snapshot).sections,
            vec![PreviewSection::Personal {
                name: "Jane Doe".into(),
                contact: "jane@x.com • 555-0100".into(),
                location: "Springfield".into(),
                summary: "Engineer.".into(),
            }]
        );
    }

    #[test]
    fn test_blank_end_date_reads_present() {
        assert_eq!(date_range("2019-04", ""), "2019-04 - Present");
        assert_eq!(date_range("2019-04", "2021-01"), "2019-04 - 2021-01");

        let snapshot = ResumeSnapshot {
            experiences: vec![Experience {
                start_date: "2020-02".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let doc = render_preview(&snapshot);
        let PreviewSection::Entries { entries, .. } = &doc.sections[0] else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].date_range.as_deref(), Some("2020-02 - Present"));
    }

    #[test]
    fn test_education_entry_formatting() {
        let doc = render_preview(&full_snapshot());
        let PreviewSection::Entries { entries, .. } = &doc.sections[2] else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].title, "BSc in Computer Science");
        assert_eq!(entries[0].subtitle.as_deref(), Some("MIT"));
        assert_eq!(entries[0].note.as_deref(), Some("Grade: 3.9"));
    }

    #[test]
    fn test_tags_show_level() {
        let doc = render_preview(&full_snapshot());
        assert_eq!(
            doc.sections[3],
            PreviewSection::Tags {
                heading: "Skills".into(),
                tags: vec!["Rust (Expert)".into()],
            }
        );
        assert_eq!(
            doc.sections[4],
            PreviewSection::Tags {
                heading: "Languages".into(),
                tags: vec!["French (Basic)".into()],
            }
        );
    }
}
