//! Size acceptability gate.
//!
//! Bounds a candidate's reported size against a per-tier ceiling, scaled
//! for hour-long series, multi-episode releases, and season boundary
//! episodes. The multipliers compose multiplicatively and independently.

use std::sync::Arc;

use tracing::debug;

use crate::library::{EpisodeStore, Series, SizeDefinitionStore};
use crate::release::ReleaseCandidate;

use super::config::DecisionConfig;
use super::error::DecisionError;

/// Gate that rejects candidates exceeding the heuristic size ceiling.
pub struct SizeGate {
    config: DecisionConfig,
    episodes: Arc<dyn EpisodeStore>,
    sizes: Arc<dyn SizeDefinitionStore>,
}

impl SizeGate {
    /// Create a size gate.
    pub fn new(
        config: DecisionConfig,
        episodes: Arc<dyn EpisodeStore>,
        sizes: Arc<dyn SizeDefinitionStore>,
    ) -> Self {
        Self {
            config,
            episodes,
            sizes,
        }
    }

    /// Whether the candidate's size is within the allowed ceiling.
    ///
    /// A missing size definition for the candidate's tier is inconsistent
    /// reference data and surfaces as an error instead of a rejection.
    pub async fn is_acceptable(
        &self,
        candidate: &ReleaseCandidate,
        series: &Series,
    ) -> Result<bool, DecisionError> {
        let definition = self
            .sizes
            .definition_for(candidate.quality.tier)
            .await
            .ok_or(DecisionError::MissingSizeDefinition(candidate.quality.tier))?;

        let mut max_size = definition.max_size_bytes;

        // Ceilings assume a ~30 minute episode; hour-long series get double.
        if self.config.is_hour_long(series.runtime_minutes) {
            max_size *= 2;
        }

        // Combined releases are proportionally larger.
        max_size *= candidate.episode_count() as u64;

        // Season premieres and finales often run long.
        if let [episode_number] = candidate.episode_numbers[..] {
            if self
                .episodes
                .is_season_boundary(series.id, candidate.season_number, episode_number)
                .await
            {
                max_size *= 2;
            }
        }

        if candidate.size_bytes > max_size {
            debug!(
                "{} is too large ({} > {} bytes), rejecting",
                candidate, candidate.size_bytes, max_size
            );
            return Ok(false);
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::{Quality, QualityTier};
    use crate::testing::{fixtures, MockLibrary};

    const BASE: u64 = 500 * 1024 * 1024;

    async fn harness() -> (MockLibrary, SizeGate) {
        let library = MockLibrary::new();
        library
            .set_size_definition(QualityTier::Hdtv, BASE)
            .await;
        let gate = SizeGate::new(
            DecisionConfig::default(),
            Arc::new(library.clone()),
            Arc::new(library.clone()),
        );
        (library, gate)
    }

    fn candidate(numbers: &[u32], size_bytes: u64) -> ReleaseCandidate {
        ReleaseCandidate {
            size_bytes,
            ..fixtures::candidate("firefly", 1, numbers, Quality::new(QualityTier::Hdtv, false))
        }
    }

    #[tokio::test]
    async fn test_single_episode_within_base_ceiling() {
        let (_library, gate) = harness().await;
        let series = fixtures::series(1, "firefly");

        assert!(gate
            .is_acceptable(&candidate(&[2], BASE), &series)
            .await
            .unwrap());
        assert!(!gate
            .is_acceptable(&candidate(&[2], BASE + 1), &series)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_multi_episode_scales_ceiling() {
        let (_library, gate) = harness().await;
        let mut series = fixtures::series(1, "firefly");
        series.runtime_minutes = 22;

        let within = candidate(&[3, 4, 5], BASE * 3);
        let over = candidate(&[3, 4, 5], BASE * 3 + 1);
        assert!(gate.is_acceptable(&within, &series).await.unwrap());
        assert!(!gate.is_acceptable(&over, &series).await.unwrap());
    }

    #[tokio::test]
    async fn test_hour_long_finale_compounds_multipliers() {
        let (library, gate) = harness().await;
        let mut series = fixtures::series(1, "firefly");
        series.runtime_minutes = 55;
        library.mark_season_boundary(1, 1, 13).await;

        // Runtime x2 and finale x2 compound to x4 over the base.
        let within = candidate(&[13], BASE * 4);
        let over = candidate(&[13], BASE * 4 + 1);
        assert!(gate.is_acceptable(&within, &series).await.unwrap());
        assert!(!gate.is_acceptable(&over, &series).await.unwrap());
    }

    #[tokio::test]
    async fn test_boundary_multiplier_only_applies_to_single_episode() {
        let (library, gate) = harness().await;
        let mut series = fixtures::series(1, "firefly");
        series.runtime_minutes = 22;
        library.mark_season_boundary(1, 1, 1).await;

        // Two episodes, one of them a premiere: no boundary doubling.
        let within = candidate(&[1, 2], BASE * 2);
        let over = candidate(&[1, 2], BASE * 2 + 1);
        assert!(gate.is_acceptable(&within, &series).await.unwrap());
        assert!(!gate.is_acceptable(&over, &series).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_definition_is_an_error() {
        let library = MockLibrary::new();
        let gate = SizeGate::new(
            DecisionConfig::default(),
            Arc::new(library.clone()),
            Arc::new(library),
        );
        let series = fixtures::series(1, "firefly");

        let result = gate.is_acceptable(&candidate(&[1], BASE), &series).await;
        assert!(matches!(
            result,
            Err(DecisionError::MissingSizeDefinition(QualityTier::Hdtv))
        ));
    }
}
