//! Domain entities read from the library.
//!
//! These are read-only from the decision engine's perspective; their
//! lifecycles belong to the persistence layer behind the store seams.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::quality::{Quality, QualityProfile};

/// A tracked media entity owning a quality profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Library-assigned identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Normalized title, matched against candidate clean titles.
    pub clean_title: String,
    /// Whether the library is actively acquiring this series.
    pub monitored: bool,
    /// Nominal episode runtime in minutes.
    pub runtime_minutes: u32,
    /// Download policy for this series.
    pub profile: QualityProfile,
}

/// A file currently held for an episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeFile {
    /// Quality of the held file.
    pub quality: Quality,
    /// Size in bytes.
    pub size_bytes: u64,
    /// When the file was imported.
    pub added_at: DateTime<Utc>,
}

/// A single episode of a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Library-assigned identifier.
    pub id: i64,
    /// Owning series.
    pub series_id: i64,
    /// Season this episode belongs to.
    pub season_number: u32,
    /// Number within the season.
    pub episode_number: u32,
    /// Excluded from monitoring when true.
    pub ignored: bool,
    /// Original air date, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_date: Option<NaiveDate>,
    /// Currently held file, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<EpisodeFile>,
}

/// A prior download attempt recorded for an episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Episode the grab was for.
    pub episode_id: i64,
    /// Quality that was grabbed.
    pub quality: Quality,
    /// When the grab happened.
    pub date: DateTime<Utc>,
}
