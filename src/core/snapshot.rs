use crate::core::NamedCardList;
use crate::utils::error::{Result, SortError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

/// Stored form of the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub lists: Vec<NamedCardList>,
}

pub fn encode(lists: &[NamedCardList]) -> Result<String> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        saved_at: Utc::now(),
        lists: lists.to_vec(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Decodes a stored collection. Any invalid list rejects the whole snapshot.
pub fn decode(raw: &str) -> Result<Vec<NamedCardList>> {
    let snapshot: Snapshot = serde_json::from_str(raw)?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SortError::SnapshotError {
            message: format!("unsupported snapshot version {}", snapshot.version),
        });
    }

    if let Some((index, bad)) = snapshot
        .lists
        .iter()
        .enumerate()
        .find(|(_, list)| !list.list().is_consistent())
    {
        return Err(SortError::SnapshotError {
            message: format!("list {} ('{}') has invalid cards or totals", index, bad.name()),
        });
    }

    tracing::debug!(
        "Decoded {} lists saved at {}",
        snapshot.lists.len(),
        snapshot.saved_at.to_rfc3339()
    );
    Ok(snapshot.lists)
}
