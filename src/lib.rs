pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::{FileStore, MemoryStore};
pub use config::AppConfig;
pub use crate::core::{
    aggregator::compute_common, classifier::classify, parser::CardListParser,
    serializer::serialize_card_list, store::CardListStore,
};
pub use domain::ports::{ConfigProvider, KeyValueStore};
pub use domain::model::{CardEntry, CardList, CommonCard, ExportedFile, NamedCardList, ParseResult};
pub use utils::error::{Result, SortError};
