use crate::core::CardList;

/// Converts a card list back to `quantity name` text, one entry per line.
pub fn serialize_card_list(card_list: &CardList) -> String {
    card_list
        .cards()
        .iter()
        .map(|card| format!("{} {}", card.quantity, card.name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::CardListParser;
    use crate::core::CardEntry;

    #[test]
    fn test_serialize_keeps_order() {
        let list = CardList::from_entries(vec![
            CardEntry::new(1, "Sol Ring"),
            CardEntry::new(30, "Island"),
            CardEntry::new(1, "Arcane Signet"),
        ]);
        assert_eq!(serialize_card_list(&list), "1 Sol Ring\n30 Island\n1 Arcane Signet");
    }

    #[test]
    fn test_serialize_empty_list() {
        assert_eq!(serialize_card_list(&CardList::from_entries(vec![])), "");
    }

    #[test]
    fn test_parser_reads_back_serialized_text() {
        let parser = CardListParser::new();
        let original = parser
            .parse("  2   Brainstorm \n\n1 Force of Will\n1 Force of Will\n12 Island\r\n")
            .card_list
            .unwrap();

        let reparsed = parser.parse(&serialize_card_list(&original));

        assert!(reparsed.success);
        assert_eq!(reparsed.card_list.unwrap().cards(), original.cards());
    }
}
