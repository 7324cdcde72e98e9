use crate::core::{CardEntry, CardList, ParseResult};
use regex::Regex;

pub const EMPTY_INPUT_ERROR: &str = "Card list is empty";

/// Parses `quantity name` card lists, one card per line.
///
/// ```text
/// 1 Lightning Bolt
/// 2 Forest
/// 1 Black Lotus
/// ```
#[derive(Debug, Clone)]
pub struct CardListParser {
    line_pattern: Regex,
}

impl Default for CardListParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardListParser {
    pub fn new() -> Self {
        // 數量、至少一個空白、其餘為卡名（卡名可為空，之後另行檢查）
        let line_pattern = Regex::new(r"^([0-9]+)\s+(.*)$").unwrap();
        Self { line_pattern }
    }

    pub fn parse(&self, text: &str) -> ParseResult {
        // Windows 編輯器存檔時常帶 BOM
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        if text.trim().is_empty() {
            return ParseResult {
                success: false,
                card_list: None,
                errors: vec![EMPTY_INPUT_ERROR.to_string()],
            };
        }

        let mut errors = Vec::new();
        let mut cards = Vec::new();

        for (i, raw_line) in text.split('\n').enumerate() {
            let line_no = i + 1;
            if raw_line.trim().is_empty() {
                continue;
            }

            let line = raw_line.trim_start();
            let Some(caps) = self.line_pattern.captures(line) else {
                errors.push(format!(
                    "Line {}: Invalid format - \"{}\"",
                    line_no,
                    raw_line.trim()
                ));
                continue;
            };

            let quantity = match caps[1].parse::<u32>() {
                Ok(0) => {
                    errors.push(format!("Line {}: Quantity must be positive", line_no));
                    continue;
                }
                Ok(q) => q,
                Err(_) => {
                    errors.push(format!("Line {}: Quantity is too large", line_no));
                    continue;
                }
            };

            let name = caps[2].trim();
            if name.is_empty() {
                errors.push(format!("Line {}: Card name is empty", line_no));
                continue;
            }

            cards.push(CardEntry::new(quantity, name));
        }

        tracing::debug!(
            "Parsed {} card entries with {} errors",
            cards.len(),
            errors.len()
        );

        ParseResult {
            success: errors.is_empty(),
            card_list: Some(CardList::from_entries(cards)),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParseResult {
        CardListParser::new().parse(text)
    }

    #[test]
    fn test_parse_simple_list() {
        let result = parse("1 Lightning Bolt\n2 Forest\n1 Black Lotus");

        assert!(result.success);
        assert!(result.errors.is_empty());
        let list = result.card_list.unwrap();
        assert_eq!(
            list.cards(),
            &[
                CardEntry::new(1, "Lightning Bolt"),
                CardEntry::new(2, "Forest"),
                CardEntry::new(1, "Black Lotus"),
            ]
        );
        assert_eq!(list.total_cards(), 4);
    }

    #[test]
    fn test_blank_input_short_circuits() {
        for text in ["", "   ", "\n\n", " \t\n "] {
            let result = parse(text);
            assert!(!result.success);
            assert!(result.card_list.is_none());
            assert_eq!(result.errors, vec!["Card list is empty".to_string()]);
        }
    }

    #[test]
    fn test_errors_accumulate_in_line_order() {
        let result = parse("2 Forest\n0 Plains\nabc\n1 ");

        assert!(!result.success);
        assert_eq!(
            result.errors,
            vec![
                "Line 2: Quantity must be positive".to_string(),
                "Line 3: Invalid format - \"abc\"".to_string(),
                "Line 4: Card name is empty".to_string(),
            ]
        );
        let list = result.card_list.unwrap();
        assert_eq!(list.cards(), &[CardEntry::new(2, "Forest")]);
        assert_eq!(list.total_cards(), 2);
    }

    #[test]
    fn test_blank_lines_are_skipped_but_counted() {
        let result = parse("\n1 Sol Ring\n\n   \nnope");
        assert_eq!(result.errors, vec!["Line 5: Invalid format - \"nope\"".to_string()]);
        assert_eq!(result.card_list.unwrap().cards().len(), 1);
    }

    #[test]
    fn test_whitespace_is_trimmed_around_parts() {
        let result = parse("   3\t\tCounterspell   \r\n1  Jace, the Mind Sculptor\r");
        assert!(result.success);
        let list = result.card_list.unwrap();
        assert_eq!(list.cards()[0], CardEntry::new(3, "Counterspell"));
        assert_eq!(list.cards()[1], CardEntry::new(1, "Jace, the Mind Sculptor"));
    }

    #[test]
    fn test_missing_separator_is_invalid_format() {
        let result = parse("4Lightning Bolt\nBolt 4\n-1 Island");
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().all(|e| e.contains("Invalid format")));
        assert!(result.card_list.unwrap().is_empty());
    }

    #[test]
    fn test_leading_zeros_and_overflow() {
        let result = parse("007 Island\n000 Swamp\n99999999999 Mountain");
        assert_eq!(
            result.errors,
            vec![
                "Line 2: Quantity must be positive".to_string(),
                "Line 3: Quantity is too large".to_string(),
            ]
        );
        assert_eq!(result.card_list.unwrap().cards(), &[CardEntry::new(7, "Island")]);
    }

    #[test]
    fn test_duplicate_lines_are_kept_separately() {
        let list = parse("1 Island\n1 Island").card_list.unwrap();
        assert_eq!(list.cards().len(), 2);
        assert_eq!(list.total_cards(), 2);
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let result = parse("\u{feff}1 Sol Ring\n1 Mana Crypt");
        assert!(result.success, "{:?}", result.errors);
        assert_eq!(
            result.card_list.unwrap().cards(),
            &[CardEntry::new(1, "Sol Ring"), CardEntry::new(1, "Mana Crypt")]
        );

        let blank = parse("\u{feff}\n  ");
        assert_eq!(blank.errors, vec!["Card list is empty".to_string()]);
        assert!(blank.card_list.is_none());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "1 Sol Ring\nbad line\n2 Arcane Signet";
        assert_eq!(parse(text), parse(text));
    }
}
