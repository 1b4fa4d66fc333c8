use std::sync::Arc;

use crate::config::Config;
use crate::ranking::catalog::SkillCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup, never mutated. Cloned into each `spawn_blocking` ranking task.
    pub catalog: Arc<SkillCatalog>,
}
