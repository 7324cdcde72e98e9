use crate::core::{CommonCard, NamedCardList};
use crate::utils::error::{Result, SortError};
use serde::Serialize;

const UNGROUPED_HEADING: &str = "Other Cards";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRow<'a> {
    #[serde(flatten)]
    card: &'a CommonCard,
    deck_names: Vec<&'a str>,
}

/// Renders the common-card view. `lists` resolves indices to list names and
/// must be the collection the view was computed from.
pub fn render_common(
    common: &[CommonCard],
    lists: &[NamedCardList],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(common, lists)),
        OutputFormat::Csv => render_csv(common, lists),
        OutputFormat::Json => {
            let rows: Vec<JsonRow> = common
                .iter()
                .map(|card| JsonRow {
                    card,
                    deck_names: deck_names(card, lists),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
    }
}

fn deck_names<'a>(card: &CommonCard, lists: &'a [NamedCardList]) -> Vec<&'a str> {
    card.deck_indices
        .iter()
        .filter_map(|&i| lists.get(i).map(|l| l.name()))
        .collect()
}

fn render_text(common: &[CommonCard], lists: &[NamedCardList]) -> String {
    if common.is_empty() {
        return "No cards are shared between lists.".to_string();
    }

    let mut lines = Vec::new();
    let mut current: Option<Option<&str>> = None;

    // 輸入已依群組排序，只要在群組切換時插入標題
    for card in common {
        if current != Some(card.group) {
            if current.is_some() {
                lines.push(String::new());
            }
            lines.push(card.group.unwrap_or(UNGROUPED_HEADING).to_string());
            current = Some(card.group);
        }
        lines.push(format!(
            "  {} ({}/{}): {}",
            card.name,
            card.deck_indices.len(),
            lists.len(),
            deck_names(card, lists).join(", ")
        ));
    }

    lines.join("\n")
}

fn render_csv(common: &[CommonCard], lists: &[NamedCardList]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "group", "deck_count", "deck_indices", "deck_names"])?;

    for card in common {
        let indices = card
            .deck_indices
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(";");
        let count = card.deck_indices.len().to_string();
        let names = deck_names(card, lists).join(";");
        writer.write_record([
            card.name.as_str(),
            card.group.unwrap_or(""),
            count.as_str(),
            indices.as_str(),
            names.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| SortError::ProcessingError {
        message: format!("failed to flush CSV output: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| SortError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
