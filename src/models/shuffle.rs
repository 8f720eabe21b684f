use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{Content, ContentId, UserPreferences};

/// Selection strategy for a shuffle request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// Every eligible item with equal weight
    Full,
    /// Narrow to the user's preferred genres, falling back when none match
    Preference,
    /// Same pool as `full`; the view layer re-shuffles on a timer
    Cable,
    /// Restrict to a curated list
    List,
    /// Restrict to episodes of one show
    Show,
}

impl Display for ShuffleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ShuffleMode::Full => "full",
            ShuffleMode::Preference => "preference",
            ShuffleMode::Cable => "cable",
            ShuffleMode::List => "list",
            ShuffleMode::Show => "show",
        };
        write!(f, "{}", label)
    }
}

/// Content-type narrowing applied before any other filter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    Movie,
    Series,
    #[default]
    All,
}

/// A single shuffle invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuffleRequest {
    pub mode: ShuffleMode,
    /// Required when `mode` is `list`
    #[serde(default)]
    pub list_id: Option<String>,
    /// Required when `mode` is `show`
    #[serde(default)]
    pub show_id: Option<ContentId>,
    #[serde(default)]
    pub content_type: ContentFilter,
}

/// Outcome of a successful shuffle
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShuffleResult {
    pub recommendation: Content,
    /// Distinct alternates drawn from the same pool, never padded
    pub alternatives: Vec<Content>,
    pub mode: ShuffleMode,
    /// Echo of the preferences the selection was made under
    pub preferences: UserPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&ShuffleMode::Full).unwrap(), "\"full\"");
        let mode: ShuffleMode = serde_json::from_str("\"preference\"").unwrap();
        assert_eq!(mode, ShuffleMode::Preference);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ShuffleMode::Cable.to_string(), "cable");
        assert_eq!(ShuffleMode::Show.to_string(), "show");
    }

    #[test]
    fn test_request_defaults() {
        let request: ShuffleRequest = serde_json::from_str(r#"{"mode":"full"}"#).unwrap();
        assert_eq!(request.mode, ShuffleMode::Full);
        assert_eq!(request.list_id, None);
        assert_eq!(request.show_id, None);
        assert_eq!(request.content_type, ContentFilter::All);
    }
}
