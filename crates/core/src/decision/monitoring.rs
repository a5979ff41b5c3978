//! Monitoring gate - decides whether a candidate is worth evaluating at all.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::library::{EpisodeStore, Series, SeriesStore};
use crate::metrics;
use crate::release::ReleaseCandidate;

/// Gate that maps a candidate onto the library and checks monitoring state.
pub struct MonitoringGate {
    series: Arc<dyn SeriesStore>,
    episodes: Arc<dyn EpisodeStore>,
}

impl MonitoringGate {
    /// Create a monitoring gate.
    pub fn new(series: Arc<dyn SeriesStore>, episodes: Arc<dyn EpisodeStore>) -> Self {
        Self { series, episodes }
    }

    /// Resolve the candidate's series and check that it is monitored with
    /// at least one non-ignored episode among the matches.
    ///
    /// Returns the resolved series on success so callers can pass it on to
    /// the quality check without the candidate carrying hidden state.
    pub async fn resolve_monitored(&self, candidate: &ReleaseCandidate) -> Option<Series> {
        let series = match self.series.find_by_clean_title(&candidate.clean_title).await {
            Some(series) => series,
            None => {
                trace!(
                    "{} is not mapped to any series in the library, skipping",
                    candidate.clean_title
                );
                metrics::MONITORING_CHECKS.with_label_values(&["unmapped"]).inc();
                return None;
            }
        };

        if !series.monitored {
            debug!(
                "{} is in the library but not tracked, skipping",
                candidate.clean_title
            );
            metrics::MONITORING_CHECKS
                .with_label_values(&["unmonitored"])
                .inc();
            return None;
        }

        let episodes = self
            .episodes
            .episodes_for_candidate(series.id, candidate, true)
            .await;

        // Monitored as long as any matched episode is still wanted.
        if episodes.iter().any(|episode| !episode.ignored) {
            metrics::MONITORING_CHECKS
                .with_label_values(&["monitored"])
                .inc();
            return Some(series);
        }

        debug!("all episodes matched by {} are ignored, skipping", candidate);
        metrics::MONITORING_CHECKS
            .with_label_values(&["all_ignored"])
            .inc();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::{Quality, QualityTier};
    use crate::testing::{fixtures, MockLibrary, RecordedLookup};

    fn gate(library: &MockLibrary) -> MonitoringGate {
        MonitoringGate::new(Arc::new(library.clone()), Arc::new(library.clone()))
    }

    fn candidate() -> ReleaseCandidate {
        fixtures::candidate("firefly", 1, &[2], Quality::new(QualityTier::Hdtv, false))
    }

    #[tokio::test]
    async fn test_unmapped_title_short_circuits() {
        let library = MockLibrary::new();
        let gate = gate(&library);

        assert!(gate.resolve_monitored(&candidate()).await.is_none());

        // The episode store must not have been consulted.
        let lookups = library.recorded_lookups().await;
        assert!(lookups
            .iter()
            .all(|l| matches!(l, RecordedLookup::SeriesByCleanTitle(_))));
    }

    #[tokio::test]
    async fn test_unmonitored_series_is_skipped() {
        let library = MockLibrary::new();
        let mut series = fixtures::series(1, "firefly");
        series.monitored = false;
        library.add_series(series).await;
        library.add_episode(fixtures::episode(10, 1, 1, 2)).await;

        assert!(gate(&library).resolve_monitored(&candidate()).await.is_none());
    }

    #[tokio::test]
    async fn test_all_ignored_episodes_are_skipped() {
        let library = MockLibrary::new();
        library.add_series(fixtures::series(1, "firefly")).await;
        let mut episode = fixtures::episode(10, 1, 1, 2);
        episode.ignored = true;
        library.add_episode(episode).await;

        assert!(gate(&library).resolve_monitored(&candidate()).await.is_none());
    }

    #[tokio::test]
    async fn test_one_wanted_episode_is_enough() {
        let library = MockLibrary::new();
        library.add_series(fixtures::series(1, "firefly")).await;
        let mut ignored = fixtures::episode(10, 1, 1, 2);
        ignored.ignored = true;
        library.add_episode(ignored).await;
        library.add_episode(fixtures::episode(11, 1, 1, 3)).await;

        let multi = fixtures::candidate(
            "firefly",
            1,
            &[2, 3],
            Quality::new(QualityTier::Hdtv, false),
        );
        let series = gate(&library).resolve_monitored(&multi).await;
        assert_eq!(series.map(|s| s.id), Some(1));
    }
}
