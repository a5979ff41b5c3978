//! Store seams consumed by the decision engine.
//!
//! Each trait is the narrow read contract the engine needs, implemented by
//! an external persistence layer. Absence is modeled as `None` or an empty
//! `Vec`, never as an error; see [`crate::testing::MockLibrary`] for the
//! in-memory implementation used in tests.

use async_trait::async_trait;

use crate::quality::{Quality, QualityTier, SizeDefinition};
use crate::release::ReleaseCandidate;

use super::types::{Episode, Series};

/// Series lookups.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    /// Find a series by its normalized title. `None` means the release
    /// is not mapped to anything in the library.
    async fn find_by_clean_title(&self, clean_title: &str) -> Option<Series>;
}

/// Episode lookups.
#[async_trait]
pub trait EpisodeStore: Send + Sync {
    /// Resolve the episodes a candidate covers within the given series.
    /// When `include_file` is false, held-file info is omitted.
    async fn episodes_for_candidate(
        &self,
        series_id: i64,
        candidate: &ReleaseCandidate,
        include_file: bool,
    ) -> Vec<Episode>;

    /// Whether the episode is the first or last of its season.
    async fn is_season_boundary(
        &self,
        series_id: i64,
        season_number: u32,
        episode_number: u32,
    ) -> bool;
}

/// Download history lookups.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Best quality previously grabbed for the episode, if any.
    async fn best_quality(&self, episode_id: i64) -> Option<Quality>;
}

/// Per-tier size reference data.
#[async_trait]
pub trait SizeDefinitionStore: Send + Sync {
    /// Size ceiling definition for a tier. Every tier referenced by a
    /// quality profile must have one; a miss is a configuration fault.
    async fn definition_for(&self, tier: QualityTier) -> Option<SizeDefinition>;
}
