pub mod aggregator;
pub mod classifier;
pub mod export;
pub mod parser;
pub mod report;
pub mod serializer;
pub mod snapshot;
pub mod store;

pub use crate::domain::model::{
    CardEntry, CardList, CommonCard, ExportedFile, NamedCardList, ParseResult,
};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore};
pub use crate::utils::error::Result;
