//! Resume Data Store: the one shared, observable container for resume content.
//!
//! Every write replaces exactly one section slot and then runs all current
//! subscribers synchronously with the new snapshot, so the write has been
//! observed by every subscriber before the setter returns.
//!
//! Snapshots are handed out as `Arc<ResumeSnapshot>`. A write clones the
//! snapshot only when somebody still holds the previous one, so a reader's
//! snapshot never changes under it.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::models::resume::{
    Achievement, Education, Experience, LanguageEntry, PersonalInfo, ResumeSnapshot, Skill,
};

/// Callback run after every store write with the new snapshot.
pub type Subscriber = Box<dyn FnMut(&ResumeSnapshot) + Send>;

/// Handle returned by [`ResumeStore::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct ResumeStore {
    snapshot: Arc<ResumeSnapshot>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    revision: u64,
}

impl fmt::Debug for ResumeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeStore")
            .field("snapshot", &self.snapshot)
            .field("subscribers", &self.subscribers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot of all sections.
    pub fn get(&self) -> Arc<ResumeSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Number of writes applied since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ResumeSnapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        debug!(subscription = id.0, "store subscriber registered");
        id
    }

    /// Removes a subscriber. Returns `false` if the handle was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriber_count();
        self.subscribers.retain(|(sid, _)| *sid != id);
        let removed = self.subscriber_count() != before;
        if removed {
            debug!(
                subscription = id.0,
                remaining = self.subscriber_count(),
                "store subscriber removed"
            );
        }
        removed
    }

    pub fn set_personal_info(&mut self, info: PersonalInfo) {
        self.write("personal_info", |s| s.personal_info = Some(info));
    }

    pub fn set_experiences(&mut self, experiences: Vec<Experience>) {
        self.write("experiences", |s| s.experiences = experiences);
    }

    pub fn set_education(&mut self, education: Vec<Education>) {
        self.write("education", |s| s.education = education);
    }

    pub fn set_skills(&mut self, skills: Vec<Skill>) {
        self.write("skills", |s| s.skills = skills);
    }

    pub fn set_languages(&mut self, languages: Vec<LanguageEntry>) {
        self.write("languages", |s| s.languages = languages);
    }

    pub fn set_hobbies(&mut self, hobbies: String) {
        self.write("hobbies", |s| s.hobbies = hobbies);
    }

    pub fn set_achievements(&mut self, achievements: Vec<Achievement>) {
        self.write("achievements", |s| s.achievements = achievements);
    }

    fn write(&mut self, section: &'static str, apply: impl FnOnce(&mut ResumeSnapshot)) {
        apply(Arc::make_mut(&mut self.snapshot));
        self.revision += 1;
        debug!(
            section,
            revision = self.revision,
            subscribers = self.subscriber_count(),
            "store section replaced"
        );

        let snapshot = Arc::clone(&self.snapshot);
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::models::resume::SkillLevel;

    fn experience(company: &str) -> Experience {
        Experience {
            company: company.to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: String::new(),
            description: "Built and operated the payments platform.".to_string(),
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ResumeStore::new();
        let snapshot = store.get();
        assert!(snapshot.personal_info.is_none());
        assert!(snapshot.experiences.is_empty());
        assert!(snapshot.hobbies.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_set_experiences_round_trip() {
        let mut store = ResumeStore::new();
        let list = vec![experience("Acme"), experience("Globex")];
        store.set_experiences(list.clone());
        assert_eq!(store.get().experiences, list);
    }

    #[test]
    fn test_write_leaves_other_sections_untouched() {
        let mut store = ResumeStore::new();
        store.set_hobbies("Climbing".to_string());
        store.set_skills(vec![Skill {
            name: "Rust".into(),
            level: SkillLevel::Expert,
        }]);
        let before = store.get();

        store.set_experiences(vec![experience("Acme")]);
        let after = store.get();

        assert_eq!(after.hobbies, before.hobbies);
        assert_eq!(after.skills, before.skills);
        assert_eq!(after.personal_info, before.personal_info);
        assert_ne!(after.experiences, before.experiences);
    }

    #[test]
    fn test_held_snapshot_is_not_mutated_by_later_write() {
        let mut store = ResumeStore::new();
        let held = store.get();
        store.set_hobbies("Chess".to_string());
        assert!(held.hobbies.is_empty());
        assert_eq!(store.get().hobbies, "Chess");
    }

    #[test]
    fn test_subscribers_see_new_snapshot_before_setter_returns() {
        let mut store = ResumeStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |s| sink.lock().unwrap().push(s.hobbies.clone()));

        store.set_hobbies("Chess".to_string());
        assert_eq!(*seen.lock().unwrap(), vec!["Chess".to_string()]);

        store.set_hobbies("Go".to_string());
        assert_eq!(seen.lock().unwrap().len(), 2);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_every_subscriber_is_notified() {
        let mut store = ResumeStore::new();
        let count = Arc::new(Mutex::new(0));
        for _ in 0..3 {
            let c = Arc::clone(&count);
            store.subscribe(move |_| *c.lock().unwrap() += 1);
        }
        store.set_education(Vec::new());
        assert_eq!(*count.lock().unwrap(), 3);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = ResumeStore::new();
        let count = Arc::new(Mutex::new(0));
        let c = Arc::clone(&count);
        let id = store.subscribe(move |_| *c.lock().unwrap() += 1);

        store.set_hobbies("a".into());
        assert!(store.unsubscribe(id));
        store.set_hobbies("b".into());

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(!store.unsubscribe(id));
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_personal_info_slot_filled_on_set() {
        let mut store = ResumeStore::new();
        let info = PersonalInfo {
            full_name: "Jane Doe".into(),
            ..Default::default()
        };
        store.set_personal_info(info.clone());
        assert_eq!(store.get().personal_info, Some(info));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_experience() -> impl Strategy<Value = Experience> {
            ("\\PC{0,12}", "\\PC{0,12}", "[0-9]{4}-[0-9]{2}", "\\PC{0,40}").prop_map(
                |(company, position, start_date, description)| Experience {
                    company,
                    position,
                    start_date,
                    end_date: String::new(),
                    description,
                },
            )
        }

        proptest! {
            #[test]
            fn set_experiences_then_get_returns_same_list(
                list in prop::collection::vec(arb_experience(), 0..6),
                hobbies in "\\PC{0,20}",
            ) {
                let mut store = ResumeStore::new();
                store.set_hobbies(hobbies.clone());
                store.set_experiences(list.clone());

                let snapshot = store.get();
                prop_assert_eq!(&snapshot.experiences, &list);
                prop_assert_eq!(&snapshot.hobbies, &hobbies);
                prop_assert_eq!(store.revision(), 2);
            }
        }
    }
}
