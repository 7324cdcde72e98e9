use serde::{Deserialize, Serialize};

/// One `quantity name` line of a card list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub quantity: u32,
    pub name: String,
}

impl CardEntry {
    pub fn new(quantity: u32, name: impl Into<String>) -> Self {
        Self {
            quantity,
            name: name.into(),
        }
    }
}

/// Parsed cards plus their total. The total is always derived from `cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardList {
    cards: Vec<CardEntry>,
    total_cards: u64,
}

impl CardList {
    pub fn from_entries(cards: Vec<CardEntry>) -> Self {
        let total_cards = cards.iter().map(|c| u64::from(c.quantity)).sum();
        Self { cards, total_cards }
    }

    pub fn cards(&self) -> &[CardEntry] {
        &self.cards
    }

    pub fn total_cards(&self) -> u64 {
        self.total_cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 檢查從外部讀入的資料是否仍符合不變量
    pub fn is_consistent(&self) -> bool {
        let sum: u64 = self.cards.iter().map(|c| u64::from(c.quantity)).sum();
        sum == self.total_cards
            && self
                .cards
                .iter()
                .all(|c| c.quantity > 0 && is_clean_name(&c.name))
    }
}

/// Parsed names are trimmed, non-empty and single-line.
fn is_clean_name(name: &str) -> bool {
    !name.is_empty() && name == name.trim() && !name.contains('\n')
}

/// A card list as held in the collection: named, with a presentation-only
/// collapse flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedCardList {
    name: String,
    #[serde(flatten)]
    list: CardList,
    is_collapsed: bool,
}

impl NamedCardList {
    pub fn new(name: impl Into<String>, list: CardList) -> Self {
        Self {
            name: name.into(),
            list,
            is_collapsed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn list(&self) -> &CardList {
        &self.list
    }

    pub fn cards(&self) -> &[CardEntry] {
        self.list.cards()
    }

    pub fn total_cards(&self) -> u64 {
        self.list.total_cards()
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn toggle_collapsed(&mut self) {
        self.is_collapsed = !self.is_collapsed;
    }
}

/// Outcome of parsing one block of card list text.
///
/// `card_list` is `None` only when the whole input was blank. Otherwise it
/// holds every valid line even if other lines produced errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub success: bool,
    pub card_list: Option<CardList>,
    pub errors: Vec<String>,
}

/// A card name found in two or more lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonCard {
    pub name: String,
    pub deck_indices: Vec<usize>,
    pub group: Option<&'static str>,
}

/// Plain text content ready to be written out as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_derived_from_entries() {
        let list = CardList::from_entries(vec![
            CardEntry::new(4, "Lightning Bolt"),
            CardEntry::new(20, "Mountain"),
        ]);
        assert_eq!(list.total_cards(), 24);
        assert!(list.is_consistent());
    }

    #[test]
    fn test_named_list_json_shape() {
        let named = NamedCardList::new(
            "Burn",
            CardList::from_entries(vec![CardEntry::new(1, "Sol Ring")]),
        );
        let value = serde_json::to_value(&named).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Burn",
                "cards": [{"quantity": 1, "name": "Sol Ring"}],
                "totalCards": 1,
                "isCollapsed": false
            })
        );
    }

    #[test]
    fn test_inconsistent_total_is_detected() {
        let tampered: CardList = serde_json::from_value(serde_json::json!({
            "cards": [{"quantity": 2, "name": "Island"}],
            "totalCards": 5
        }))
        .unwrap();
        assert!(!tampered.is_consistent());
    }

    #[test]
    fn test_names_that_would_not_reparse_are_inconsistent() {
        for name in [" Sol Ring", "Sol Ring ", "Sol\nRing", ""] {
            let tampered: CardList = serde_json::from_value(serde_json::json!({
                "cards": [{"quantity": 1, "name": name}],
                "totalCards": 1
            }))
            .unwrap();
            assert!(!tampered.is_consistent(), "{:?}", name);
        }
    }
}
