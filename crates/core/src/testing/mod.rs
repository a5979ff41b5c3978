//! Testing utilities and in-memory store implementations.
//!
//! [`MockLibrary`] implements every store seam the decision engine
//! consumes, so decisions can be exercised end to end without a real
//! persistence layer.

mod mock_library;

pub use mock_library::{MockLibrary, RecordedLookup};

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::library::{Episode, EpisodeFile, HistoryRecord, Series};
    use crate::quality::{Quality, QualityProfile, QualityTier};
    use crate::release::ReleaseCandidate;

    /// A profile accepting every real tier, cutoff at the top.
    pub fn default_profile() -> QualityProfile {
        QualityProfile::new(
            "Any",
            vec![
                QualityTier::Sdtv,
                QualityTier::Dvd,
                QualityTier::Hdtv,
                QualityTier::WebDl,
                QualityTier::Bluray720,
                QualityTier::Bluray1080,
            ],
            QualityTier::Bluray1080,
        )
    }

    /// Create a monitored 30-minute series with the default profile.
    /// The clean title is the given title verbatim.
    pub fn series(id: i64, clean_title: &str) -> Series {
        Series {
            id,
            title: clean_title.to_string(),
            clean_title: clean_title.to_string(),
            monitored: true,
            runtime_minutes: 30,
            profile: default_profile(),
        }
    }

    /// Create a wanted episode with no held file.
    pub fn episode(id: i64, series_id: i64, season_number: u32, episode_number: u32) -> Episode {
        Episode {
            id,
            series_id,
            season_number,
            episode_number,
            ignored: false,
            air_date: None,
            file: None,
        }
    }

    /// Create an episode holding a file at the given quality.
    pub fn episode_with_file(
        id: i64,
        series_id: i64,
        season_number: u32,
        episode_number: u32,
        quality: Quality,
    ) -> Episode {
        Episode {
            file: Some(EpisodeFile {
                quality,
                size_bytes: 350 * 1024 * 1024,
                added_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            }),
            ..episode(id, series_id, season_number, episode_number)
        }
    }

    /// Create a history record for an episode.
    pub fn history_record(episode_id: i64, quality: Quality) -> HistoryRecord {
        HistoryRecord {
            episode_id,
            quality,
            date: Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap(),
        }
    }

    /// Create a release candidate with a reasonable default size.
    pub fn candidate(
        clean_title: &str,
        season_number: u32,
        episode_numbers: &[u32],
        quality: Quality,
    ) -> ReleaseCandidate {
        let episodes = episode_numbers
            .iter()
            .map(|n| format!("E{:02}", n))
            .collect::<String>();
        ReleaseCandidate {
            title: format!("{}.S{:02}{}.720p", clean_title, season_number, episodes),
            clean_title: clean_title.to_string(),
            season_number,
            episode_numbers: episode_numbers.to_vec(),
            quality,
            size_bytes: 350 * 1024 * 1024,
        }
    }
}
