use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

/// Identifier for a piece of catalog content (e.g., "tt13406094" or "st-s1e1")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Type of content
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
}

/// Content classification a user may opt to exclude entirely
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CulturalTag {
    Pride,
    Religious,
    Political,
    SocialJustice,
}

/// Availability of a piece of content on one platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformAvailability {
    pub available: bool,
    /// Platform-specific launch URL, when the provider supplies one
    #[serde(default)]
    pub deep_link: Option<String>,
}

/// A movie or series as supplied by the catalog provider.
///
/// Immutable once fetched for the session; the selector only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub content_type: ContentType,
    pub release_year: i32,
    pub duration_minutes: u32,
    /// 0.0 to 10.0
    pub rating: f32,
    #[serde(default)]
    pub genres: BTreeSet<String>,
    #[serde(default)]
    pub cultural_tags: BTreeSet<CulturalTag>,
    /// Mapping from platform id to availability on that platform
    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformAvailability>,
    /// For episodes, the id of the series they belong to
    #[serde(default)]
    pub show_id: Option<ContentId>,
}

impl Content {
    /// Checks whether this content can be watched on the given platform
    pub fn available_on(&self, platform_id: &str) -> bool {
        self.platforms
            .get(platform_id)
            .map(|a| a.available)
            .unwrap_or(false)
    }

    /// Launch URL for the given platform, if the content is available there
    pub fn deep_link_for(&self, platform_id: &str) -> Option<&str> {
        self.platforms
            .get(platform_id)
            .filter(|a| a.available)
            .and_then(|a| a.deep_link.as_deref())
    }
}
