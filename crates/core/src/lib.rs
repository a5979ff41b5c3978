pub mod config;
pub mod decision;
pub mod library;
pub mod metrics;
pub mod quality;
pub mod release;
pub mod testing;

pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use decision::{DecisionConfig, DecisionEngine, DecisionError, MonitoringGate, SizeGate};
pub use library::{
    Episode, EpisodeFile, EpisodeStore, HistoryRecord, HistoryStore, Series, SeriesStore,
    SizeDefinitionStore,
};
pub use quality::{is_upgrade, Quality, QualityProfile, QualityTier, SizeDefinition};
pub use release::{normalize_title, ReleaseCandidate};
