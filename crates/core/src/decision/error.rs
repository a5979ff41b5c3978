use thiserror::Error;

use crate::quality::QualityTier;

/// Errors surfaced by the decision engine.
///
/// Rejections are not errors; a release that is unmapped, unmonitored, or
/// simply not wanted comes back as a `false` verdict. Only inconsistent
/// reference data escalates here.
#[derive(Debug, Error)]
pub enum DecisionError {
    /// A profile allows a tier that has no size definition configured.
    #[error("no size definition for quality tier {0}")]
    MissingSizeDefinition(QualityTier),
}
