use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::models::{Content, ContentId, ContentType, CulturalTag, Platform, PlatformAvailability};

/// Curated lists supplied alongside the catalog.
///
/// Show membership is not kept here; episodes carry their series id directly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Collections {
    #[serde(default)]
    lists: BTreeMap<String, Vec<ContentId>>,
}

impl Collections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_list(&mut self, list_id: impl Into<String>, members: Vec<ContentId>) {
        self.lists.insert(list_id.into(), members);
    }

    /// Member ids of a curated list, or `None` for an unknown list id
    pub fn list(&self, list_id: &str) -> Option<&[ContentId]> {
        self.lists.get(list_id).map(|ids| ids.as_slice())
    }
}

/// On-disk catalog seed format
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSeed {
    pub platforms: Vec<Platform>,
    pub content: Vec<Content>,
    #[serde(default)]
    pub lists: BTreeMap<String, Vec<ContentId>>,
}

/// Session-scoped catalog snapshot.
///
/// Loaded once at startup, either from a JSON seed file or from the built-in
/// demo data; the selector never performs I/O of its own.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    content: Vec<Content>,
    platforms: Vec<Platform>,
    collections: Collections,
}

impl InMemoryCatalog {
    pub fn from_seed(seed: CatalogSeed) -> Self {
        let mut collections = Collections::new();
        for (list_id, members) in seed.lists {
            collections.insert_list(list_id, members);
        }
        Self {
            content: seed.content,
            platforms: seed.platforms,
            collections,
        }
    }

    /// Loads a catalog from a JSON seed file
    pub fn from_seed_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read catalog seed {}: {}", path.display(), e))?;
        let seed: CatalogSeed = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Invalid catalog seed {}: {}", path.display(), e))?;
        Ok(Self::from_seed(seed))
    }

    pub fn content(&self) -> &[Content] {
        &self.content
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    pub fn find(&self, id: &ContentId) -> Option<&Content> {
        self.content.iter().find(|c| &c.id == id)
    }

    /// Built-in demo catalog used when no seed file is configured
    pub fn demo() -> Self {
        let platforms = vec![
            Platform::new("netflix", "Netflix"),
            Platform::new("hulu", "Hulu"),
            Platform::new("prime", "Prime Video"),
            Platform::new("disney", "Disney+"),
        ];

        let content = vec![
            item(
                "mtrx",
                "The Matrix",
                ContentType::Movie,
                1999,
                136,
                8.7,
                &["Sci-Fi", "Action"],
                &[],
                &[("netflix", Some("https://netflix.com/watch/mtrx")), ("prime", None)],
                None,
            ),
            item(
                "incp",
                "Inception",
                ContentType::Movie,
                2010,
                148,
                8.8,
                &["Sci-Fi", "Thriller"],
                &[],
                &[("hulu", Some("https://hulu.com/watch/incp"))],
                None,
            ),
            item(
                "pfume",
                "Paris Is Burning",
                ContentType::Movie,
                1990,
                78,
                8.2,
                &["Documentary"],
                &[CulturalTag::Pride],
                &[("netflix", Some("https://netflix.com/watch/pfume"))],
                None,
            ),
            item(
                "chsn",
                "The Chosen",
                ContentType::Series,
                2017,
                54,
                9.0,
                &["Drama"],
                &[CulturalTag::Religious],
                &[("prime", None)],
                None,
            ),
            item(
                "veep",
                "Veep",
                ContentType::Series,
                2012,
                28,
                8.3,
                &["Comedy"],
                &[CulturalTag::Political],
                &[("hulu", Some("https://hulu.com/watch/veep"))],
                None,
            ),
            item(
                "thir",
                "When They See Us",
                ContentType::Series,
                2019,
                64,
                8.9,
                &["Drama", "Crime"],
                &[CulturalTag::SocialJustice],
                &[("netflix", Some("https://netflix.com/watch/thir"))],
                None,
            ),
            item(
                "office",
                "The Office",
                ContentType::Series,
                2005,
                22,
                9.0,
                &["Comedy"],
                &[],
                &[("hulu", None), ("prime", Some("https://prime.com/watch/office"))],
                None,
            ),
            item(
                "mndo",
                "The Mandalorian",
                ContentType::Series,
                2019,
                40,
                8.7,
                &["Sci-Fi", "Adventure"],
                &[],
                &[("disney", Some("https://disneyplus.com/watch/mndo"))],
                None,
            ),
            // Stranger Things with its first three episodes for show mode
            item(
                "st",
                "Stranger Things",
                ContentType::Series,
                2016,
                50,
                8.6,
                &["Sci-Fi", "Horror"],
                &[],
                &[("netflix", Some("https://netflix.com/watch/st"))],
                None,
            ),
            item(
                "st-s1e1",
                "Stranger Things: The Vanishing of Will Byers",
                ContentType::Series,
                2016,
                48,
                8.5,
                &["Sci-Fi", "Horror"],
                &[],
                &[("netflix", Some("https://netflix.com/watch/st-s1e1"))],
                Some("st"),
            ),
            item(
                "st-s1e2",
                "Stranger Things: The Weirdo on Maple Street",
                ContentType::Series,
                2016,
                55,
                8.4,
                &["Sci-Fi", "Horror"],
                &[],
                &[("netflix", Some("https://netflix.com/watch/st-s1e2"))],
                Some("st"),
            ),
            item(
                "st-s1e3",
                "Stranger Things: Holly, Jolly",
                ContentType::Series,
                2016,
                51,
                8.7,
                &["Sci-Fi", "Horror"],
                &[],
                &[("netflix", Some("https://netflix.com/watch/st-s1e3"))],
                Some("st"),
            ),
            item(
                "pnch",
                "Punch-Drunk Love",
                ContentType::Movie,
                2002,
                95,
                7.3,
                &["Romance", "Comedy"],
                &[],
                &[("prime", Some("https://prime.com/watch/pnch"))],
                None,
            ),
            item(
                "blnt",
                "Before Sunrise",
                ContentType::Movie,
                1995,
                101,
                8.1,
                &["Romance", "Drama"],
                &[],
                &[("hulu", None), ("netflix", Some("https://netflix.com/watch/blnt"))],
                None,
            ),
        ];

        let mut collections = Collections::new();
        collections.insert_list(
            "date-night",
            vec![
                ContentId::new("pnch"),
                ContentId::new("blnt"),
                ContentId::new("incp"),
            ],
        );
        collections.insert_list(
            "critically-acclaimed",
            vec![
                ContentId::new("mtrx"),
                ContentId::new("thir"),
                ContentId::new("office"),
            ],
        );

        Self {
            content,
            platforms,
            collections,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    title: &str,
    content_type: ContentType,
    release_year: i32,
    duration_minutes: u32,
    rating: f32,
    genres: &[&str],
    cultural_tags: &[CulturalTag],
    platforms: &[(&str, Option<&str>)],
    show_id: Option<&str>,
) -> Content {
    Content {
        id: ContentId::new(id),
        title: title.to_string(),
        content_type,
        release_year,
        duration_minutes,
        rating,
        genres: genres.iter().map(|g| g.to_string()).collect::<BTreeSet<_>>(),
        cultural_tags: cultural_tags.iter().copied().collect(),
        platforms: platforms
            .iter()
            .map(|(platform_id, deep_link)| {
                (
                    platform_id.to_string(),
                    PlatformAvailability {
                        available: true,
                        deep_link: deep_link.map(|l| l.to_string()),
                    },
                )
            })
            .collect(),
        show_id: show_id.map(ContentId::new),
    }
}
