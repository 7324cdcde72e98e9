use crate::core::classifier::classify;
use crate::core::{CommonCard, NamedCardList};
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Basic lands never count as common cards.
pub const BASIC_LAND_NAMES: [&str; 5] = ["Plains", "Island", "Swamp", "Mountain", "Forest"];

/// Finds every card name shared by at least two lists.
///
/// Results are ordered by group (ungrouped cards last), then by name. The
/// whole view is rebuilt from `lists` on every call.
pub fn compute_common(lists: &[NamedCardList]) -> Vec<CommonCard> {
    if lists.len() < 2 {
        return Vec::new();
    }

    let mut appearances: HashMap<&str, BTreeSet<usize>> = HashMap::new();
    for (index, list) in lists.iter().enumerate() {
        for card in list.cards() {
            if BASIC_LAND_NAMES.contains(&card.name.as_str()) {
                continue;
            }
            appearances
                .entry(card.name.as_str())
                .or_default()
                .insert(index);
        }
    }

    let mut common: Vec<CommonCard> = appearances
        .into_iter()
        .filter(|(_, indices)| indices.len() >= 2)
        .map(|(name, indices)| CommonCard {
            name: name.to_string(),
            deck_indices: indices.into_iter().collect(),
            group: classify(name),
        })
        .collect();

    let collator = NameCollator::new();
    common.sort_by(|a, b| {
        compare_groups(&collator, a.group, b.group).then_with(|| collator.compare(&a.name, &b.name))
    });

    tracing::debug!("Found {} common cards across {} lists", common.len(), lists.len());
    common
}

fn compare_groups(collator: &NameCollator, a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => collator.compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Dictionary ordering for card names using the Unicode root collation:
/// accents and case only break ties, `Æ` sorts as `ae`.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameCollator {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator = match Collator::try_new(&locale!("und").into(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("Root collation unavailable, falling back to code point order: {}", e);
                None
            }
        };
        Self { collator }
    }

    /// Exact text breaks ties so distinct names never compare equal.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        };
        collated.then_with(|| a.cmp(b))
    }
}
