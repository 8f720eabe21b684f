use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Content, ShuffleMode};

/// Session-scoped engagement counters behind the recap widget
#[derive(Debug, Clone, Default)]
pub struct ShuffleStats {
    total: u64,
    by_mode: BTreeMap<String, u64>,
    by_genre: BTreeMap<String, u64>,
}

/// Aggregated view served to the recap widget
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recap {
    pub total_shuffles: u64,
    /// Most used mode, ties broken alphabetically
    pub favorite_mode: Option<String>,
    /// Up to three most shuffled genres, most frequent first
    pub top_genres: Vec<String>,
}

impl ShuffleStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one successful shuffle
    pub fn record(&mut self, mode: ShuffleMode, recommendation: &Content) {
        self.total += 1;
        *self.by_mode.entry(mode.to_string()).or_default() += 1;
        for genre in &recommendation.genres {
            *self.by_genre.entry(genre.clone()).or_default() += 1;
        }
    }

    pub fn recap(&self) -> Recap {
        let favorite_mode = self
            .by_mode
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(mode, _)| mode.clone());

        let mut genres: Vec<(&String, &u64)> = self.by_genre.iter().collect();
        genres.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        let top_genres = genres.into_iter().take(3).map(|(g, _)| g.clone()).collect();

        Recap {
            total_shuffles: self.total,
            favorite_mode,
            top_genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentId, ContentType};
    use std::collections::{BTreeMap, BTreeSet};

    fn movie(id: &str, genres: &[&str]) -> Content {
        Content {
            id: ContentId::new(id),
            title: id.to_string(),
            content_type: ContentType::Movie,
            release_year: 2021,
            duration_minutes: 100,
            rating: 7.0,
            genres: genres.iter().map(|g| g.to_string()).collect::<BTreeSet<_>>(),
            cultural_tags: BTreeSet::new(),
            platforms: BTreeMap::new(),
            show_id: None,
        }
    }

    #[test]
    fn test_empty_recap() {
        let stats = ShuffleStats::new();
        let recap = stats.recap();
        assert_eq!(recap.total_shuffles, 0);
        assert_eq!(recap.favorite_mode, None);
        assert!(recap.top_genres.is_empty());
    }

    #[test]
    fn test_counts_modes_and_genres() {
        let mut stats = ShuffleStats::new();
        stats.record(ShuffleMode::Full, &movie("a", &["Drama"]));
        stats.record(ShuffleMode::Full, &movie("b", &["Drama", "Crime"]));
        stats.record(ShuffleMode::Preference, &movie("c", &["Comedy"]));

        let recap = stats.recap();
        assert_eq!(recap.total_shuffles, 3);
        assert_eq!(recap.favorite_mode.as_deref(), Some("full"));
        assert_eq!(recap.top_genres[0], "Drama");
        assert!(recap.top_genres.len() <= 3);
    }

    #[test]
    fn test_top_genres_limited_to_three() {
        let mut stats = ShuffleStats::new();
        stats.record(
            ShuffleMode::Full,
            &movie("a", &["Drama", "Crime", "Comedy", "Horror"]),
        );
        assert_eq!(stats.recap().top_genres.len(), 3);
    }
}
