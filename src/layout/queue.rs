//! Print-queue expansion.
//!
//! The queue stores one entry per distinct label with a copy count. The
//! layout engine wants the flat, ordered list of physical instances.

use serde::{Deserialize, Serialize};

/// One queued label and how many copies to print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry<T> {
    pub data: T,
    #[serde(default = "default_copies")]
    pub copies: usize,
}

fn default_copies() -> usize {
    1
}

/// Flatten queue entries into instances, preserving queue order. Entries
/// with zero copies contribute nothing.
pub fn expand_queue<T: Clone>(entries: &[QueueEntry<T>]) -> Vec<T> {
    let total = entries.iter().map(|e| e.copies).sum();
    let mut instances = Vec::with_capacity(total);
    for entry in entries {
        instances.extend(std::iter::repeat(entry.data.clone()).take(entry.copies));
    }
    instances
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_in_order() {
        let entries = vec![
            QueueEntry { data: "bolt", copies: 2 },
            QueueEntry { data: "nut", copies: 0 },
            QueueEntry { data: "washer", copies: 3 },
        ];
        assert_eq!(
            expand_queue(&entries),
            vec!["bolt", "bolt", "washer", "washer", "washer"]
        );
    }

    #[test]
    fn copies_default_to_one() {
        let entry: QueueEntry<String> = serde_json::from_str(r#"{ "data": "SKU-1" }"#).unwrap();
        assert_eq!(entry.copies, 1);
        assert!(expand_queue::<String>(&[]).is_empty());
    }
}
