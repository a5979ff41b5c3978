//! Library entities and the store seams the engine reads them through.

mod traits;
mod types;

pub use traits::{EpisodeStore, HistoryStore, SeriesStore, SizeDefinitionStore};
pub use types::{Episode, EpisodeFile, HistoryRecord, Series};
