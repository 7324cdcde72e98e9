use crate::core::aggregator::compute_common;
use crate::core::export::{bundle_zip, export_list};
use crate::core::parser::CardListParser;
use crate::core::serializer::serialize_card_list;
use crate::core::{snapshot, CommonCard, ExportedFile, KeyValueStore, NamedCardList, ParseResult};
use crate::utils::error::Result;

pub const DEFAULT_STORAGE_KEY: &str = "singleton-sort-card-lists";

/// Ordered collection of named card lists, persisted after every change.
///
/// Lists are addressed by position. Removing a list shifts every later index
/// down by one. Index-addressed operations with an out-of-range index do
/// nothing.
///
/// Storage failures never reach the caller: they are logged and the
/// in-memory collection stays authoritative.
pub struct CardListStore<S: KeyValueStore> {
    backend: S,
    key: String,
    parser: CardListParser,
    lists: Vec<NamedCardList>,
    errors: Vec<String>,
}

impl<S: KeyValueStore> CardListStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Creates the store and adopts whatever collection is saved under `key`.
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            backend,
            key: key.into(),
            parser: CardListParser::new(),
            lists: Vec::new(),
            errors: Vec::new(),
        };
        store.load_from_storage();
        store
    }

    /// Parses `text` and appends it as a new list named `Deck {n}`.
    pub fn add_from_text(&mut self, text: &str) -> ParseResult {
        self.add_named_from_text(text, None)
    }

    pub fn add_named_from_text(&mut self, text: &str, name: Option<&str>) -> ParseResult {
        self.errors.clear();

        let result = self.parser.parse(text);

        match (&result.card_list, result.success) {
            (Some(card_list), true) => {
                let name = name
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Deck {}", self.lists.len() + 1));
                tracing::info!(
                    "➕ Added '{}' ({} cards) at index {}",
                    name,
                    card_list.total_cards(),
                    self.lists.len()
                );
                self.lists.push(NamedCardList::new(name, card_list.clone()));
                self.save_to_storage();
            }
            _ => {
                tracing::debug!("Rejected card list with {} errors", result.errors.len());
                self.errors = result.errors.clone();
            }
        }

        result
    }

    pub fn remove(&mut self, index: usize) {
        if index >= self.lists.len() {
            return;
        }
        let removed = self.lists.remove(index);
        tracing::info!("🗑️ Removed '{}' from index {}", removed.name(), index);
        self.save_to_storage();
    }

    pub fn clear_all(&mut self) {
        self.lists.clear();
        self.errors.clear();
        tracing::info!("Cleared all card lists");
        self.clear_storage();
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Flips the collapse flag. This is display state and is not saved on its own.
    pub fn toggle_collapsed(&mut self, index: usize) {
        if let Some(list) = self.lists.get_mut(index) {
            list.toggle_collapsed();
        }
    }

    /// Renames a list. Callers reject blank names before calling this.
    pub fn rename(&mut self, index: usize, new_name: &str) {
        let Some(list) = self.lists.get_mut(index) else {
            return;
        };
        tracing::info!("✏️ Renamed '{}' to '{}'", list.name(), new_name);
        list.set_name(new_name);
        self.save_to_storage();
    }

    pub fn serialize_at(&self, index: usize) -> Option<String> {
        self.lists.get(index).map(|l| serialize_card_list(l.list()))
    }

    pub fn export_at(&self, index: usize) -> Option<ExportedFile> {
        self.lists.get(index).map(export_list)
    }

    pub fn export_all(&self) -> Result<Vec<u8>> {
        bundle_zip(&self.lists)
    }

    pub fn lists(&self) -> &[NamedCardList] {
        &self.lists
    }

    pub fn get(&self, index: usize) -> Option<&NamedCardList> {
        self.lists.get(index)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn has_lists(&self) -> bool {
        !self.lists.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Cards shared by two or more lists, rebuilt from the current collection.
    pub fn common_cards(&self) -> Vec<CommonCard> {
        compute_common(&self.lists)
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn load_from_storage(&mut self) {
        let raw = match self.backend.load(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No saved card lists under '{}'", self.key);
                return;
            }
            Err(e) => {
                tracing::error!("Failed to load card lists from storage: {}", e);
                return;
            }
        };

        match snapshot::decode(&raw) {
            Ok(lists) => {
                tracing::info!("📂 Loaded {} card lists from storage", lists.len());
                self.lists = lists;
            }
            Err(e) => tracing::warn!("Ignoring saved card lists: {}", e),
        }
    }

    fn save_to_storage(&mut self) {
        let encoded = match snapshot::encode(&self.lists) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!("Failed to encode card lists: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.save(&self.key, &encoded) {
            tracing::error!("Failed to save card lists to storage: {}", e);
        }
    }

    fn clear_storage(&mut self) {
        if let Err(e) = self.backend.erase(&self.key) {
            tracing::error!("Failed to clear card lists from storage: {}", e);
        }
    }
}
