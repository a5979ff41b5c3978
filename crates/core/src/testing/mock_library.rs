//! In-memory library for testing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::library::{
    Episode, EpisodeStore, HistoryRecord, HistoryStore, Series, SeriesStore, SizeDefinitionStore,
};
use crate::quality::{Quality, QualityTier, SizeDefinition};
use crate::release::ReleaseCandidate;

/// A recorded store lookup for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedLookup {
    /// Series lookup by clean title.
    SeriesByCleanTitle(String),
    /// Episode resolution for a candidate.
    EpisodesForCandidate {
        series_id: i64,
        season_number: u32,
        episode_numbers: Vec<u32>,
    },
    /// Season boundary check.
    SeasonBoundary {
        series_id: i64,
        season_number: u32,
        episode_number: u32,
    },
    /// Best-quality-in-history lookup.
    BestQuality { episode_id: i64 },
    /// Size definition lookup.
    SizeDefinition { tier: QualityTier },
}

/// Mock implementation of all four store seams.
///
/// Holds library state in memory and records every lookup so tests can
/// assert on short-circuit behavior. Cloning shares the underlying state.
#[derive(Debug, Clone)]
pub struct MockLibrary {
    series: Arc<RwLock<Vec<Series>>>,
    episodes: Arc<RwLock<Vec<Episode>>>,
    history: Arc<RwLock<Vec<HistoryRecord>>>,
    size_definitions: Arc<RwLock<HashMap<QualityTier, SizeDefinition>>>,
    season_boundaries: Arc<RwLock<HashSet<(i64, u32, u32)>>>,
    lookups: Arc<RwLock<Vec<RecordedLookup>>>,
}

impl Default for MockLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self {
            series: Arc::new(RwLock::new(Vec::new())),
            episodes: Arc::new(RwLock::new(Vec::new())),
            history: Arc::new(RwLock::new(Vec::new())),
            size_definitions: Arc::new(RwLock::new(HashMap::new())),
            season_boundaries: Arc::new(RwLock::new(HashSet::new())),
            lookups: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Add a series.
    pub async fn add_series(&self, series: Series) {
        self.series.write().await.push(series);
    }

    /// Add an episode.
    pub async fn add_episode(&self, episode: Episode) {
        self.episodes.write().await.push(episode);
    }

    /// Add a history record.
    pub async fn add_history(&self, record: HistoryRecord) {
        self.history.write().await.push(record);
    }

    /// Set the size ceiling for a tier.
    pub async fn set_size_definition(&self, tier: QualityTier, max_size_bytes: u64) {
        self.size_definitions.write().await.insert(
            tier,
            SizeDefinition {
                tier,
                max_size_bytes,
            },
        );
    }

    /// Mark an episode as the first or last of its season.
    pub async fn mark_season_boundary(
        &self,
        series_id: i64,
        season_number: u32,
        episode_number: u32,
    ) {
        self.season_boundaries
            .write()
            .await
            .insert((series_id, season_number, episode_number));
    }

    /// Get recorded lookups.
    pub async fn recorded_lookups(&self) -> Vec<RecordedLookup> {
        self.lookups.read().await.clone()
    }

    /// Clear recorded lookups.
    pub async fn clear_recorded(&self) {
        self.lookups.write().await.clear();
    }

    async fn record(&self, lookup: RecordedLookup) {
        self.lookups.write().await.push(lookup);
    }
}

#[async_trait]
impl SeriesStore for MockLibrary {
    async fn find_by_clean_title(&self, clean_title: &str) -> Option<Series> {
        self.record(RecordedLookup::SeriesByCleanTitle(clean_title.to_string()))
            .await;
        self.series
            .read()
            .await
            .iter()
            .find(|series| series.clean_title == clean_title)
            .cloned()
    }
}

#[async_trait]
impl EpisodeStore for MockLibrary {
    async fn episodes_for_candidate(
        &self,
        series_id: i64,
        candidate: &ReleaseCandidate,
        include_file: bool,
    ) -> Vec<Episode> {
        self.record(RecordedLookup::EpisodesForCandidate {
            series_id,
            season_number: candidate.season_number,
            episode_numbers: candidate.episode_numbers.clone(),
        })
        .await;

        self.episodes
            .read()
            .await
            .iter()
            .filter(|episode| {
                episode.series_id == series_id
                    && episode.season_number == candidate.season_number
                    && candidate.episode_numbers.contains(&episode.episode_number)
            })
            .cloned()
            .map(|mut episode| {
                if !include_file {
                    episode.file = None;
                }
                episode
            })
            .collect()
    }

    async fn is_season_boundary(
        &self,
        series_id: i64,
        season_number: u32,
        episode_number: u32,
    ) -> bool {
        self.record(RecordedLookup::SeasonBoundary {
            series_id,
            season_number,
            episode_number,
        })
        .await;
        self.season_boundaries
            .read()
            .await
            .contains(&(series_id, season_number, episode_number))
    }
}

#[async_trait]
impl HistoryStore for MockLibrary {
    async fn best_quality(&self, episode_id: i64) -> Option<Quality> {
        self.record(RecordedLookup::BestQuality { episode_id }).await;
        self.history
            .read()
            .await
            .iter()
            .filter(|record| record.episode_id == episode_id)
            .map(|record| record.quality)
            .max()
    }
}

#[async_trait]
impl SizeDefinitionStore for MockLibrary {
    async fn definition_for(&self, tier: QualityTier) -> Option<SizeDefinition> {
        self.record(RecordedLookup::SizeDefinition { tier }).await;
        self.size_definitions.read().await.get(&tier).copied()
    }
}
