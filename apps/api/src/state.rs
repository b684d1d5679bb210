use crate::config::Config;
use crate::resume::store::DraftStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Drafts being edited. The validation engine itself holds no state.
    pub drafts: DraftStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let drafts = DraftStore::new(config.max_drafts, config.draft_idle_timeout);
        Self { config, drafts }
    }
}
