//! Types for the quality model.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ranked quality tier for an episodic release.
///
/// Ordering goes through [`QualityTier::rank`] so the ranking is an explicit
/// table rather than a side effect of declaration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    /// Could not be determined from the release name.
    Unknown,
    /// Standard definition TV capture.
    Sdtv,
    /// DVD rip.
    Dvd,
    /// High definition TV capture (720p).
    Hdtv,
    /// Web download (720p).
    WebDl,
    /// Blu-ray rip, 720p.
    Bluray720,
    /// Blu-ray rip, 1080p.
    Bluray1080,
}

impl QualityTier {
    /// All tiers in ascending rank order.
    pub const ALL: [QualityTier; 7] = [
        QualityTier::Unknown,
        QualityTier::Sdtv,
        QualityTier::Dvd,
        QualityTier::Hdtv,
        QualityTier::WebDl,
        QualityTier::Bluray720,
        QualityTier::Bluray1080,
    ];

    /// Ordinal rank of this tier. Higher rank means better quality.
    pub fn rank(self) -> u8 {
        match self {
            QualityTier::Unknown => 0,
            QualityTier::Sdtv => 1,
            QualityTier::Dvd => 2,
            QualityTier::Hdtv => 3,
            QualityTier::WebDl => 4,
            QualityTier::Bluray720 => 5,
            QualityTier::Bluray1080 => 6,
        }
    }
}

impl Ord for QualityTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for QualityTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QualityTier::Unknown => "unknown",
            QualityTier::Sdtv => "sdtv",
            QualityTier::Dvd => "dvd",
            QualityTier::Hdtv => "hdtv",
            QualityTier::WebDl => "web_dl",
            QualityTier::Bluray720 => "bluray720",
            QualityTier::Bluray1080 => "bluray1080",
        };
        write!(f, "{}", name)
    }
}

/// A concrete release quality: a tier plus the "proper" flag.
///
/// A proper is a re-released correction of an earlier grab at the same tier,
/// so it orders above a non-proper of that tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Quality {
    /// The ranked tier.
    pub tier: QualityTier,
    /// Whether this is a proper re-release.
    #[serde(default)]
    pub proper: bool,
}

impl Quality {
    /// Create a quality value.
    pub fn new(tier: QualityTier, proper: bool) -> Self {
        Self { tier, proper }
    }
}

impl Ord for Quality {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then(self.proper.cmp(&other.proper))
    }
}

impl PartialOrd for Quality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.proper {
            write!(f, "{} [proper]", self.tier)
        } else {
            write!(f, "{}", self.tier)
        }
    }
}

/// Per-series download policy: which tiers are acceptable, and the tier
/// at or above which no further upgrades are sought.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfile {
    /// Profile name for display and logs.
    pub name: String,
    /// Tiers this profile accepts.
    pub allowed: Vec<QualityTier>,
    /// Tiers at or above this one are good enough; upgrades stop here.
    pub cutoff: QualityTier,
}

impl QualityProfile {
    /// Create a profile.
    pub fn new(name: impl Into<String>, allowed: Vec<QualityTier>, cutoff: QualityTier) -> Self {
        Self {
            name: name.into(),
            allowed,
            cutoff,
        }
    }

    /// Whether the given tier is accepted by this profile.
    pub fn is_allowed(&self, tier: QualityTier) -> bool {
        self.allowed.contains(&tier)
    }

    /// The cutoff must be one of the allowed tiers, or rank above all of them.
    pub fn has_valid_cutoff(&self) -> bool {
        self.allowed.contains(&self.cutoff)
            || self.allowed.iter().all(|tier| *tier < self.cutoff)
    }
}

/// Per-tier reference data: the nominal size ceiling for a standard-length
/// (~30 minute) episode at that tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SizeDefinition {
    /// The tier this ceiling applies to.
    pub tier: QualityTier,
    /// Maximum size in bytes for a single standard-length episode.
    pub max_size_bytes: u64,
}
