use std::collections::HashSet;

use thiserror::Error;

use crate::models::{
    Content, ContentFilter, ContentId, ContentType, ShuffleMode, ShuffleRequest, ShuffleResult,
    UserPreferences,
};
use crate::services::catalog::Collections;
use crate::services::history::ShuffleHistory;
use crate::services::random::RandomSource;

/// Default number of alternate picks returned with each recommendation
pub const DEFAULT_ALTERNATE_COUNT: usize = 3;

/// Error types for the selector
#[derive(Debug, Error, PartialEq)]
pub enum SelectorError {
    #[error("no platforms connected")]
    NoPlatformsConnected,
    #[error("no content matches the current filters")]
    EmptyPool,
    #[error("unknown list: {0}")]
    ListNotFound(String),
    #[error("unknown show: {0}")]
    ShowNotFound(ContentId),
    #[error("list mode requires a list id")]
    MissingListId,
    #[error("show mode requires a show id")]
    MissingShowId,
}

/// Narrows the catalog to one recommendation plus alternates.
///
/// Stateless per call: reads preferences and history but mutates neither.
/// Recording the pick into history is the caller's responsibility, which
/// keeps selection pure and reproducible under a fixed random seed.
pub struct ShuffleSelector<'a> {
    catalog: &'a [Content],
    collections: &'a Collections,
    alternate_count: usize,
}

impl<'a> ShuffleSelector<'a> {
    pub fn new(catalog: &'a [Content], collections: &'a Collections) -> Self {
        Self {
            catalog,
            collections,
            alternate_count: DEFAULT_ALTERNATE_COUNT,
        }
    }

    pub fn with_alternate_count(mut self, count: usize) -> Self {
        self.alternate_count = count;
        self
    }

    /// Runs the full pipeline: filter stages in fixed order, then a uniform
    /// draw of one recommendation and up to `alternate_count` distinct
    /// alternates without replacement.
    pub fn select(
        &self,
        request: &ShuffleRequest,
        preferences: &UserPreferences,
        history: &ShuffleHistory,
        rng: &mut dyn RandomSource,
    ) -> Result<ShuffleResult, SelectorError> {
        let mut pool = self.eligible_pool(request, preferences, history)?;

        let recommendation = pool.remove(rng.pick(pool.len())).clone();
        let mut alternatives = Vec::new();
        while alternatives.len() < self.alternate_count && !pool.is_empty() {
            alternatives.push(pool.remove(rng.pick(pool.len())).clone());
        }

        Ok(ShuffleResult {
            recommendation,
            alternatives,
            mode: request.mode,
            preferences: preferences.clone(),
        })
    }

    /// Stages 1-5 of the pipeline. Each stage only narrows the pool and
    /// preserves catalog order, so the survivor set is a pure function of
    /// the inputs.
    fn eligible_pool(
        &self,
        request: &ShuffleRequest,
        preferences: &UserPreferences,
        history: &ShuffleHistory,
    ) -> Result<Vec<&'a Content>, SelectorError> {
        // A shuffle with zero connected platforms is categorically invalid,
        // never an unfiltered pass-through.
        if preferences.platforms.is_empty() {
            return Err(SelectorError::NoPlatformsConnected);
        }

        let pool: Vec<&Content> = self
            .catalog
            .iter()
            .filter(|c| matches_type(c, request.content_type))
            .filter(|c| preferences.platforms.iter().any(|p| c.available_on(p)))
            // Hard content-safety boundary: applied identically in every
            // mode and never overridden by later stages.
            .filter(|c| c.cultural_tags.is_disjoint(&preferences.cultural_exclusions))
            .collect();

        let pool = self.narrow_by_mode(pool, request, preferences)?;
        if pool.is_empty() {
            return Err(SelectorError::EmptyPool);
        }

        // K = min(bound, pool size - 1) leaves at least one survivor, since
        // at most K distinct recent ids can be removed.
        let k = history.bound().min(pool.len() - 1);
        let recent = history.recent(k);
        if recent.is_empty() {
            return Ok(pool);
        }
        Ok(pool
            .into_iter()
            .filter(|c| !recent.contains(&c.id))
            .collect())
    }

    fn narrow_by_mode(
        &self,
        pool: Vec<&'a Content>,
        request: &ShuffleRequest,
        preferences: &UserPreferences,
    ) -> Result<Vec<&'a Content>, SelectorError> {
        match request.mode {
            // Cable reuses the full pool; the autoplay timer lives in the
            // view layer, not here.
            ShuffleMode::Full | ShuffleMode::Cable => Ok(pool),
            ShuffleMode::Preference => {
                let narrowed: Vec<&Content> = pool
                    .iter()
                    .copied()
                    .filter(|c| !c.genres.is_disjoint(&preferences.genres))
                    .collect();
                // No genre match must still surface a recommendation
                if narrowed.is_empty() {
                    Ok(pool)
                } else {
                    Ok(narrowed)
                }
            }
            ShuffleMode::List => {
                let list_id = request
                    .list_id
                    .as_deref()
                    .ok_or(SelectorError::MissingListId)?;
                let members = self
                    .collections
                    .list(list_id)
                    .ok_or_else(|| SelectorError::ListNotFound(list_id.to_string()))?;
                let members: HashSet<&ContentId> = members.iter().collect();
                Ok(pool
                    .into_iter()
                    .filter(|c| members.contains(&c.id))
                    .collect())
            }
            ShuffleMode::Show => {
                let show_id = request.show_id.as_ref().ok_or(SelectorError::MissingShowId)?;
                if !self.show_exists(show_id) {
                    return Err(SelectorError::ShowNotFound(show_id.clone()));
                }
                Ok(pool
                    .into_iter()
                    .filter(|c| c.show_id.as_ref() == Some(show_id))
                    .collect())
            }
        }
    }

    /// A show id is known when any episode references it or when the
    /// catalog carries the series entry itself.
    fn show_exists(&self, show_id: &ContentId) -> bool {
        self.catalog.iter().any(|c| {
            c.show_id.as_ref() == Some(show_id)
                || (&c.id == show_id && c.content_type == ContentType::Series)
        })
    }
}

fn matches_type(content: &Content, filter: ContentFilter) -> bool {
    match filter {
        ContentFilter::All => true,
        ContentFilter::Movie => content.content_type == ContentType::Movie,
        ContentFilter::Series => content.content_type == ContentType::Series,
    }
}
