//! One builder session: the store, the four section forms, the navigator and
//! the live preview. The session owns the store; forms only see it for the
//! duration of a submit.

pub mod handlers;

use std::sync::Arc;

use crate::forms::education::EducationForm;
use crate::forms::experience::ExperienceForm;
use crate::forms::personal::PersonalInfoForm;
use crate::forms::skills::SkillsForm;
use crate::forms::{RowPolicy, SectionForm, ValidationErrors};
use crate::models::resume::ResumeSnapshot;
use crate::navigation::{Navigator, Section};
use crate::preview::PreviewPane;
use crate::store::ResumeStore;

#[derive(Debug)]
pub struct Session {
    store: ResumeStore,
    navigator: Navigator,
    preview: PreviewPane,
    personal: PersonalInfoForm,
    experience: ExperienceForm,
    education: EducationForm,
    skills: SkillsForm,
}

impl Session {
    pub fn new(policy: RowPolicy) -> Self {
        let mut store = ResumeStore::new();
        // the pane lives as long as the session, so the handle is never needed
        let (preview, _subscription) = PreviewPane::attach(&mut store);
        Self {
            store,
            navigator: Navigator::new(),
            preview,
            personal: PersonalInfoForm::new(),
            experience: ExperienceForm::new(policy),
            education: EducationForm::new(policy),
            skills: SkillsForm::new(policy),
        }
    }

    pub fn snapshot(&self) -> Arc<ResumeSnapshot> {
        self.store.get()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn preview(&self) -> &PreviewPane {
        &self.preview
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn form(&self, section: Section) -> &dyn SectionForm {
        match section {
            Section::Personal => &self.personal,
            Section::Experience => &self.experience,
            Section::Education => &self.education,
            Section::Skills => &self.skills,
        }
    }

    pub fn form_mut(&mut self, section: Section) -> &mut dyn SectionForm {
        match section {
            Section::Personal => &mut self.personal,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Skills => &mut self.skills,
        }
    }

    /// Submits a section's form against the session store.
    pub fn submit(&mut self, section: Section) -> Result<(), ValidationErrors> {
        let form: &mut dyn SectionForm = match section {
            Section::Personal => &mut self.personal,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Skills => &mut self.skills,
        };
        form.submit(&mut self.store)
    }
}
