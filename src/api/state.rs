use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Content, Platform, PreferenceStore};
use crate::services::random::OsRandom;
use crate::services::selector::DEFAULT_ALTERNATE_COUNT;
use crate::services::{InMemoryCatalog, ShuffleHistory, ShuffleStats};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    pub catalog: InMemoryCatalog,
    /// Platform roster with per-session connection flags
    pub platforms: Vec<Platform>,
    pub preferences: PreferenceStore,
    pub history: ShuffleHistory,
    pub stats: ShuffleStats,
    pub current_content: Option<Content>,
    pub is_playing: bool,
    pub alternate_count: usize,
    pub rng: OsRandom,
}

impl AppState {
    /// Creates application state over the given catalog with default settings
    pub fn new(catalog: InMemoryCatalog) -> Self {
        Self::with_settings(
            catalog,
            crate::services::history::DEFAULT_HISTORY_WINDOW,
            DEFAULT_ALTERNATE_COUNT,
        )
    }

    /// Creates application state with explicit history and alternate settings
    pub fn with_settings(
        catalog: InMemoryCatalog,
        history_window: usize,
        alternate_count: usize,
    ) -> Self {
        let platforms = catalog.platforms().to_vec();
        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                catalog,
                platforms,
                preferences: PreferenceStore::new(),
                history: ShuffleHistory::new(history_window),
                stats: ShuffleStats::new(),
                current_content: None,
                is_playing: false,
                alternate_count,
                rng: OsRandom::new(),
            })),
        }
    }
}
