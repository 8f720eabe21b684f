use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{AppError, AppResult};

use super::CulturalTag;

/// User preferences applied to every shuffle request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    /// Ids of platforms the user has connected
    pub platforms: BTreeSet<String>,
    /// Genres the user prefers in `preference` mode
    pub genres: BTreeSet<String>,
    /// Cultural tags the user opts out of seeing, enforced in every mode
    pub cultural_exclusions: BTreeSet<CulturalTag>,
}

/// Partial update applied to stored preferences; absent fields are left as-is
#[derive(Debug, Default, Deserialize)]
pub struct PreferenceUpdate {
    pub platforms: Option<BTreeSet<String>>,
    pub genres: Option<BTreeSet<String>>,
    pub cultural_exclusions: Option<BTreeSet<CulturalTag>>,
}

/// In-memory holder of the session's preferences.
///
/// Mutation is confined to the named methods; the selector only ever reads
/// the snapshot returned by [`get`](Self::get).
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    prefs: UserPreferences,
}

impl PreferenceStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current preferences snapshot
    pub fn get(&self) -> &UserPreferences {
        &self.prefs
    }

    /// Applies a partial update, replacing each supplied set wholesale
    pub fn update(&mut self, update: PreferenceUpdate) -> AppResult<&UserPreferences> {
        if let Some(platforms) = update.platforms {
            validate_platform_ids(&platforms)?;
            self.prefs.platforms = platforms;
        }
        if let Some(genres) = update.genres {
            self.prefs.genres = genres;
        }
        if let Some(exclusions) = update.cultural_exclusions {
            self.prefs.cultural_exclusions = exclusions;
        }
        Ok(&self.prefs)
    }

    /// Adds or removes a single platform connection
    pub fn set_platform(&mut self, platform_id: &str, connected: bool) -> AppResult<()> {
        if platform_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "platform id must be a non-empty string".to_string(),
            ));
        }
        if connected {
            self.prefs.platforms.insert(platform_id.to_string());
        } else {
            self.prefs.platforms.remove(platform_id);
        }
        Ok(())
    }
}

fn validate_platform_ids(platforms: &BTreeSet<String>) -> AppResult<()> {
    if platforms.iter().any(|id| id.trim().is_empty()) {
        return Err(AppError::InvalidInput(
            "platform id must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}
