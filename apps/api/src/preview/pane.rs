use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::preview::{render_preview, PreviewDocument};
use crate::store::{ResumeStore, SubscriptionId};

#[derive(Debug, Default)]
struct PaneState {
    document: PreviewDocument,
    renders: u64,
}

/// The live preview: a store subscriber that re-renders on every write and
/// keeps the latest document for readers.
#[derive(Debug, Clone, Default)]
pub struct PreviewPane {
    inner: Arc<Mutex<PaneState>>,
}

impl PreviewPane {
    /// Renders the store's current snapshot and subscribes for updates.
    pub fn attach(store: &mut ResumeStore) -> (Self, SubscriptionId) {
        let pane = PreviewPane::default();
        pane.refresh(&render_preview(&store.get()));

        let sink = pane.clone();
        let id = store.subscribe(move |snapshot| sink.refresh(&render_preview(snapshot)));
        (pane, id)
    }

    fn lock(&self) -> MutexGuard<'_, PaneState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn refresh(&self, document: &PreviewDocument) {
        let mut state = self.lock();
        state.document = document.clone();
        state.renders += 1;
        debug!(
            renders = state.renders,
            sections = state.document.sections.len(),
            empty = state.document.is_empty(),
            "preview re-rendered"
        );
    }

    pub fn document(&self) -> PreviewDocument {
        self.lock().document.clone()
    }

    /// How many times the pane has rendered, including the initial render.
    pub fn renders(&self) -> u64 {
        self.lock().renders
    }
}
