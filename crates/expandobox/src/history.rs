//! Bounded most-recent-first history of previously chosen extras.
//!
//! While the control is collapsed, the projection tail shows this history in
//! place of the full extras list. The queue never grows past its capacity;
//! the oldest entry is silently dropped on overflow. A capacity of zero makes
//! every [`record`](SelectionHistory::record) a no-op.
//!
//! Two deduplication policies exist, modelled as named variants rather than
//! conditionally-populated fields:
//!
//! - [`ByText`](SelectionHistory::ByText): a label already present is never
//!   re-inserted. Re-selecting an existing label is a plain no-op — the entry
//!   is *not* promoted to the front.
//! - [`ByIndex`](SelectionHistory::ByIndex): the projection index of each
//!   pick is tracked alongside its label; an index already recorded is not
//!   re-inserted even if its label text differs from the earlier pick.

use std::collections::VecDeque;

/// One remembered pick: the projection index it was activated at, and its
/// label at that time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Projection index of the pick.
    pub index: usize,
    /// Label of the pick.
    pub label: String,
}

/// Bounded queue of recently selected extras, newest first.
#[derive(Debug, Clone)]
pub enum SelectionHistory {
    /// Deduplicate by label text.
    ByText {
        /// Maximum number of remembered labels.
        capacity: usize,
        /// Remembered labels, newest first.
        labels: VecDeque<String>,
    },
    /// Deduplicate by projection index.
    ByIndex {
        /// Maximum number of remembered entries.
        capacity: usize,
        /// Remembered entries, newest first.
        entries: VecDeque<HistoryEntry>,
    },
}

impl SelectionHistory {
    /// Create an empty text-deduplicated history.
    pub fn by_text(capacity: usize) -> Self {
        Self::ByText {
            capacity,
            labels: VecDeque::with_capacity(capacity),
        }
    }

    /// Create an empty index-deduplicated history.
    pub fn by_index(capacity: usize) -> Self {
        Self::ByIndex {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// The fixed capacity this history was constructed with.
    pub fn capacity(&self) -> usize {
        match self {
            Self::ByText { capacity, .. } | Self::ByIndex { capacity, .. } => *capacity,
        }
    }

    /// Number of remembered picks.
    pub fn len(&self) -> usize {
        match self {
            Self::ByText { labels, .. } => labels.len(),
            Self::ByIndex { entries, .. } => entries.len(),
        }
    }

    /// Returns `true` if nothing has been remembered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record a pick made at `index` with the given `label`.
    ///
    /// Returns `true` if the pick was inserted, `false` if it was rejected as
    /// a duplicate (or the capacity is zero). Insertion is at the front;
    /// entries beyond capacity are evicted from the back without error.
    pub fn record(&mut self, label: &str, index: usize) -> bool {
        match self {
            Self::ByText { capacity, labels } => {
                if *capacity == 0 || labels.iter().any(|known| known.as_str() == label) {
                    return false;
                }
                labels.push_front(label.to_owned());
                labels.truncate(*capacity);
                true
            }
            Self::ByIndex { capacity, entries } => {
                if *capacity == 0 || entries.iter().any(|entry| entry.index == index) {
                    return false;
                }
                entries.push_front(HistoryEntry {
                    index,
                    label: label.to_owned(),
                });
                entries.truncate(*capacity);
                true
            }
        }
    }

    /// Remembered labels, newest first.
    pub fn labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::ByText { labels, .. } => Box::new(labels.iter().map(String::as_str)),
            Self::ByIndex { entries, .. } => {
                Box::new(entries.iter().map(|entry| entry.label.as_str()))
            }
        }
    }

    /// Returns `true` if a pick with this label is remembered.
    pub fn contains_label(&self, label: &str) -> bool {
        self.labels().any(|known| known == label)
    }

    /// Drop every entry matching `label`; in index mode, also entries whose
    /// recorded index equals `display_index`.
    ///
    /// Backs removal of an extra: a history entry with no backing extra must
    /// not survive. Returns the number of entries dropped.
    pub fn purge(&mut self, label: &str, display_index: usize) -> usize {
        match self {
            Self::ByText { labels, .. } => {
                let before = labels.len();
                labels.retain(|known| known.as_str() != label);
                before - labels.len()
            }
            Self::ByIndex { entries, .. } => {
                let before = entries.len();
                entries.retain(|entry| entry.label != label && entry.index != display_index);
                before - entries.len()
            }
        }
    }

    /// Forget every remembered pick.
    pub fn clear(&mut self) {
        match self {
            Self::ByText { labels, .. } => labels.clear(),
            Self::ByIndex { entries, .. } => entries.clear(),
        }
    }
}
