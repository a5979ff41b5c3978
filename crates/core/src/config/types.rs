use serde::{Deserialize, Serialize};

use crate::decision::DecisionConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Decision engine tunables.
    #[serde(default)]
    pub decision: DecisionConfig,
}
