//! The decision engine - top-level acceptance verdict for a candidate.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::library::{EpisodeStore, HistoryStore, Series, SeriesStore, SizeDefinitionStore};
use crate::metrics;
use crate::quality::is_upgrade;
use crate::release::ReleaseCandidate;

use super::config::DecisionConfig;
use super::error::DecisionError;
use super::monitoring::MonitoringGate;
use super::size::SizeGate;

/// Evaluates whether a discovered release should be accepted for download.
///
/// Stateless across evaluations; safe to share behind an `Arc` and invoke
/// concurrently, one call per candidate. All blocking work lives behind
/// the store seams.
pub struct DecisionEngine {
    monitoring: MonitoringGate,
    size: SizeGate,
    episodes: Arc<dyn EpisodeStore>,
    history: Arc<dyn HistoryStore>,
}

impl DecisionEngine {
    /// Create an engine over the given store seams.
    pub fn new(
        config: DecisionConfig,
        series: Arc<dyn SeriesStore>,
        episodes: Arc<dyn EpisodeStore>,
        history: Arc<dyn HistoryStore>,
        sizes: Arc<dyn SizeDefinitionStore>,
    ) -> Self {
        Self {
            monitoring: MonitoringGate::new(series, Arc::clone(&episodes)),
            size: SizeGate::new(config, Arc::clone(&episodes), sizes),
            episodes,
            history,
        }
    }

    /// Resolve the candidate's series if it is monitored and has at least
    /// one wanted episode among the matches. See [`MonitoringGate`].
    pub async fn resolve_monitored(&self, candidate: &ReleaseCandidate) -> Option<Series> {
        self.monitoring.resolve_monitored(candidate).await
    }

    /// Whether the candidate is needed at the required quality level.
    ///
    /// Assumes the series was already resolved via [`Self::resolve_monitored`].
    /// Checks run in a fixed order - profile, size, then per-episode file and
    /// history comparisons - and the first failing check rejects. For
    /// multi-episode releases every matched episode must pass.
    pub async fn is_quality_needed(
        &self,
        candidate: &ReleaseCandidate,
        series: &Series,
    ) -> Result<bool, DecisionError> {
        trace!(
            "checking if {} meets quality requirements for profile {}",
            candidate,
            series.profile.name
        );

        if !series.profile.is_allowed(candidate.quality.tier) {
            trace!(
                "quality {} rejected by the series' profile",
                candidate.quality
            );
            metrics::QUALITY_DECISIONS
                .with_label_values(&["profile_rejected"])
                .inc();
            return Ok(false);
        }

        let cutoff = series.profile.cutoff;

        if !self.size.is_acceptable(candidate, series).await? {
            metrics::QUALITY_DECISIONS
                .with_label_values(&["size_rejected"])
                .inc();
            return Ok(false);
        }

        let episodes = self
            .episodes
            .episodes_for_candidate(series.id, candidate, true)
            .await;

        if episodes.is_empty() {
            debug!("{} matches no episodes in the library, skipping", candidate);
            metrics::QUALITY_DECISIONS
                .with_label_values(&["no_episodes"])
                .inc();
            return Ok(false);
        }

        for episode in &episodes {
            if let Some(file) = &episode.file {
                trace!(
                    "comparing existing file quality {} with release",
                    file.quality
                );
                if !is_upgrade(file.quality, candidate.quality, cutoff) {
                    metrics::QUALITY_DECISIONS
                        .with_label_values(&["upgrade_rejected"])
                        .inc();
                    return Ok(false);
                }
            }

            if let Some(best_in_history) = self.history.best_quality(episode.id).await {
                trace!("comparing history quality {} with release", best_in_history);
                if !is_upgrade(best_in_history, candidate.quality, cutoff) {
                    metrics::QUALITY_DECISIONS
                        .with_label_values(&["upgrade_rejected"])
                        .inc();
                    return Ok(false);
                }
            }
        }

        debug!("{} is needed", candidate);
        metrics::QUALITY_DECISIONS
            .with_label_values(&["accepted"])
            .inc();
        Ok(true)
    }

    /// Full evaluation: monitoring gate followed by the quality check.
    /// Unmonitored candidates come back as `Ok(false)`.
    pub async fn evaluate(&self, candidate: &ReleaseCandidate) -> Result<bool, DecisionError> {
        match self.resolve_monitored(candidate).await {
            Some(series) => self.is_quality_needed(candidate, &series).await,
            None => Ok(false),
        }
    }
}
