//! Quality model: ranked tiers, per-series profiles, and the upgrade policy.

mod types;
mod upgrade;

pub use types::{Quality, QualityProfile, QualityTier, SizeDefinition};
pub use upgrade::is_upgrade;
