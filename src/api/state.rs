use std::sync::Arc;

use crate::config::Config;
use crate::services::{InMemoryResultStore, Matcher, ResultStore, DEFAULT_MATCH_COUNT};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<Matcher>,
    pub results: Arc<dyn ResultStore>,
    /// Matches returned when a request leaves the count out
    pub default_match_count: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default matcher and an empty in-memory result slot
    pub fn new() -> Self {
        Self::with_store(Matcher::default(), Arc::new(InMemoryResultStore::new()))
    }

    pub fn with_store(matcher: Matcher, results: Arc<dyn ResultStore>) -> Self {
        Self {
            matcher: Arc::new(matcher),
            results,
            default_match_count: DEFAULT_MATCH_COUNT,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::with_store(
            Matcher::new(config.diversity()),
            Arc::new(InMemoryResultStore::new()),
        );
        state.default_match_count = config.default_match_count;
        state
    }
}
