use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The builder session. Each request holds the lock for its whole
    /// handler, so requests apply to the session one at a time.
    pub session: Arc<Mutex<Session>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session = Session::new(config.row_policy());
        Self {
            session: Arc::new(Mutex::new(session)),
            config,
        }
    }
}
