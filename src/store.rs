use std::cmp::Ordering;
use std::collections::HashSet;

use serde_json::Value;
use web_sys::Storage;

use crate::types::PadEntry;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored recent pads are not a JSON array: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result of reading the stored list: the entries that parsed, plus a count
/// of array elements that had to be dropped.
#[derive(Debug, Default, PartialEq)]
pub struct StoredPads {
    pub entries: Vec<PadEntry>,
    pub skipped: usize,
}

/// Parse the raw `localStorage` value. A missing value is an empty list.
pub fn parse_recent_pads(raw: Option<&str>) -> Result<StoredPads, StoreError> {
    let Some(raw) = raw else {
        return Ok(StoredPads::default());
    };
    let items: Vec<Value> = serde_json::from_str(raw)?;
    let mut stored = StoredPads::default();
    for item in items {
        match serde_json::from_value::<PadEntry>(item) {
            Ok(entry) => stored.entries.push(entry),
            Err(_) => stored.skipped += 1,
        }
    }
    Ok(stored)
}

/// Read the list from storage and normalize it. Never fails: anything
/// unreadable degrades to an empty list with a console warning.
pub fn load_recent_pads(storage: Option<&Storage>, key: &str) -> Vec<PadEntry> {
    let raw = storage.and_then(|s| s.get_item(key).ok().flatten());
    match parse_recent_pads(raw.as_deref()) {
        Ok(stored) => {
            if stored.skipped > 0 {
                web_sys::console::warn_1(
                    &format!("[recent-pads] skipped {} unreadable entries", stored.skipped).into(),
                );
            }
            normalize(stored.entries)
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[recent-pads] {e}").into());
            Vec::new()
        }
    }
}

/// Drop repeated names (first occurrence wins), then order most recent first.
pub fn normalize(entries: Vec<PadEntry>) -> Vec<PadEntry> {
    let mut seen = HashSet::new();
    let mut pads: Vec<PadEntry> = entries
        .into_iter()
        .filter(|pad| seen.insert(pad.name.clone()))
        .collect();
    pads.sort_by(|a, b| by_recency(a.visited_at_ms(), b.visited_at_ms()));
    pads
}

// Undated entries go last; sort_by is stable so they keep their order.
fn by_recency(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
