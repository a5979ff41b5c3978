//! Configuration for the decision engine.

use serde::{Deserialize, Serialize};

/// Tunables for the size acceptability heuristic.
///
/// Per-tier ceilings assume a ~30 minute episode; series whose nominal
/// runtime falls inside the hour-long window get double the ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Lower bound (inclusive, minutes) of the hour-long runtime window.
    #[serde(default = "default_hour_long_min")]
    pub hour_long_runtime_min: u32,

    /// Upper bound (inclusive, minutes) of the hour-long runtime window.
    #[serde(default = "default_hour_long_max")]
    pub hour_long_runtime_max: u32,
}

fn default_hour_long_min() -> u32 {
    50
}

fn default_hour_long_max() -> u32 {
    65
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            hour_long_runtime_min: default_hour_long_min(),
            hour_long_runtime_max: default_hour_long_max(),
        }
    }
}

impl DecisionConfig {
    /// Whether the given runtime counts as hour-long format.
    pub fn is_hour_long(&self, runtime_minutes: u32) -> bool {
        (self.hour_long_runtime_min..=self.hour_long_runtime_max).contains(&runtime_minutes)
    }

    /// Sets the hour-long runtime window.
    pub fn with_hour_long_window(mut self, min: u32, max: u32) -> Self {
        self.hour_long_runtime_min = min;
        self.hour_long_runtime_max = max;
        self
    }
}
