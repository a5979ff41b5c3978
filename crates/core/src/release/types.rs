//! Types for parsed release candidates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quality::Quality;

/// A parsed release under evaluation for acceptance.
///
/// One candidate may cover several episode numbers (a combined
/// multi-episode release); it is evaluated as a single unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseCandidate {
    /// Raw release title as discovered.
    pub title: String,
    /// Normalized series title, used to map the release onto the library.
    pub clean_title: String,
    /// Season the release belongs to.
    pub season_number: u32,
    /// Episode numbers covered by the release. Never accepted when empty.
    pub episode_numbers: Vec<u32>,
    /// Parsed quality of the release.
    pub quality: Quality,
    /// Reported size in bytes.
    pub size_bytes: u64,
}

impl ReleaseCandidate {
    /// Number of episodes this release covers.
    pub fn episode_count(&self) -> usize {
        self.episode_numbers.len()
    }
}

impl fmt::Display for ReleaseCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} S{:02}", self.clean_title, self.season_number)?;
        for number in &self.episode_numbers {
            write!(f, "E{:02}", number)?;
        }
        write!(f, " [{}]", self.quality)
    }
}
