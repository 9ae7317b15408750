//! Projection building and diffing.
//!
//! The projection is the flat sequence of rows the display surface actually
//! shows: the defaults, then (when both lists are non-empty) the expander,
//! then either the extras (expanded) or the selection history (collapsed).
//! It is derived state; the engine keeps its own mirror and pushes explicit
//! incremental edits to the surface rather than clearing and rebuilding.
//!
//! All offset arithmetic lives here: `build_projection` recomputes the
//! intended projection from logical state, and `diff_projection` turns the
//! difference between the mirror and the intended projection into ordered
//! insert/remove operations that are each valid at the moment they are
//! applied. A real rendering surface therefore only ever receives the
//! minimal diff and keeps its scroll and selection-adjacent state.

use crate::history::SelectionHistory;
use crate::store::ItemStore;

// ============================================================================
// Entries
// ============================================================================

/// Decoration marker a surface may render next to a projection row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemBadge {
    /// The row is a remembered previous pick (history tail). Surfaces
    /// typically render it with a small clock glyph.
    Recent,
}

/// One row of the projection: a label plus an optional badge.
///
/// The badge takes part in equality, so a diff never silently reuses a
/// history row as a plain extras row or vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) label: String,
    pub(crate) badge: Option<ItemBadge>,
}

impl Entry {
    pub(crate) fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            badge: None,
        }
    }

    pub(crate) fn recent(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            badge: Some(ItemBadge::Recent),
        }
    }
}

/// A single ordered edit against the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EditOp {
    /// Insert `entry` so that it ends up at `index`.
    Insert { index: usize, entry: Entry },
    /// Remove the row currently at `index`.
    Remove { index: usize },
}

// ============================================================================
// Builder
// ============================================================================

/// Recompute the intended projection from logical state.
///
/// Layouts:
/// - no defaults: the extras alone (empty when both lists are empty);
/// - defaults but no extras: the defaults alone;
/// - both: defaults, the expander, then extras (expanded) or the history
///   newest-first with a [`Recent`](ItemBadge::Recent) badge (collapsed).
pub(crate) fn build_projection(
    store: &ItemStore,
    history: &SelectionHistory,
    expanded: bool,
) -> Vec<Entry> {
    let defaults = store.defaults();
    let extras = store.extras();

    if defaults.is_empty() {
        return extras.iter().map(Entry::plain).collect();
    }

    let mut projection: Vec<Entry> = defaults.iter().map(Entry::plain).collect();
    if !extras.is_empty() {
        projection.push(Entry::plain(store.expander()));
        if expanded {
            projection.extend(extras.iter().map(Entry::plain));
        } else {
            projection.extend(history.labels().map(Entry::recent));
        }
    }
    projection
}

// ============================================================================
// Diff
// ============================================================================

/// Compute the ordered edits that turn `old` into `new`.
///
/// Rows in the common prefix and suffix are never touched. The edits come
/// out as removals at descending indices followed by insertions at ascending
/// indices; applied in that order, every index is valid against the surface
/// as it stands when that specific edit lands.
pub(crate) fn diff_projection(old: &[Entry], new: &[Entry]) -> Vec<EditOp> {
    let mut start = 0;
    while start < old.len() && start < new.len() && old[start] == new[start] {
        start += 1;
    }

    let mut old_end = old.len();
    let mut new_end = new.len();
    while old_end > start && new_end > start && old[old_end - 1] == new[new_end - 1] {
        old_end -= 1;
        new_end -= 1;
    }

    let mut ops = Vec::with_capacity((old_end - start) + (new_end - start));
    for index in (start..old_end).rev() {
        ops.push(EditOp::Remove { index });
    }
    for index in start..new_end {
        ops.push(EditOp::Insert {
            index,
            entry: new[index].clone(),
        });
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ItemStore;

    fn strings(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| (*label).to_owned()).collect()
    }

    fn store(defaults: &[&str], extras: &[&str]) -> ItemStore {
        ItemStore::new(strings(defaults), strings(extras), "...".into(), false).unwrap()
    }

    fn plain(labels: &[&str]) -> Vec<Entry> {
        labels.iter().map(|label| Entry::plain(*label)).collect()
    }

    /// Apply `ops` in order to a copy of `old`, panicking on any index that
    /// is invalid at the moment its op is applied.
    fn apply(old: &[Entry], ops: &[EditOp]) -> Vec<Entry> {
        let mut rows = old.to_vec();
        for op in ops {
            match op {
                EditOp::Insert { index, entry } => {
                    assert!(*index <= rows.len(), "insert out of range: {op:?}");
                    rows.insert(*index, entry.clone());
                }
                EditOp::Remove { index } => {
                    assert!(*index < rows.len(), "remove out of range: {op:?}");
                    rows.remove(*index);
                }
            }
        }
        rows
    }

    #[test]
    fn test_build_defaults_only() {
        let history = SelectionHistory::by_text(3);
        let projection = build_projection(&store(&["a", "b"], &[]), &history, false);
        assert_eq!(projection, plain(&["a", "b"]));
    }

    #[test]
    fn test_build_extras_only_ignores_expansion_flag() {
        let history = SelectionHistory::by_text(3);
        let store = store(&[], &["x", "y"]);
        assert_eq!(build_projection(&store, &history, false), plain(&["x", "y"]));
        assert_eq!(build_projection(&store, &history, true), plain(&["x", "y"]));
    }

    #[test]
    fn test_build_collapsed_tail_is_history_newest_first() {
        let mut history = SelectionHistory::by_text(3);
        history.record("d", 4);
        history.record("c", 3);
        let projection = build_projection(&store(&["a"], &["c", "d"]), &history, false);

        let mut expected = plain(&["a", "..."]);
        expected.push(Entry::recent("c"));
        expected.push(Entry::recent("d"));
        assert_eq!(projection, expected);
    }

    #[test]
    fn test_build_expanded_tail_is_extras_in_order() {
        let mut history = SelectionHistory::by_text(3);
        history.record("d", 4);
        let projection = build_projection(&store(&["a"], &["c", "d"]), &history, true);
        assert_eq!(projection, plain(&["a", "...", "c", "d"]));
    }

    #[test]
    fn test_diff_tail_swap_preserves_defaults_prefix() {
        let mut history = SelectionHistory::by_text(2);
        history.record("d", 4);
        let store = store(&["a", "b"], &["c", "d"]);

        let collapsed = build_projection(&store, &history, false);
        let expanded = build_projection(&store, &history, true);
        let ops = diff_projection(&collapsed, &expanded);

        // The defaults and expander rows are untouched: only the tail moves.
        assert!(ops.iter().all(|op| match op {
            EditOp::Insert { index, .. } => *index >= 3,
            EditOp::Remove { index } => *index >= 3,
        }));
        // Badged history row removed, both extras rows inserted.
        assert_eq!(
            ops,
            vec![
                EditOp::Remove { index: 3 },
                EditOp::Insert { index: 3, entry: Entry::plain("c") },
                EditOp::Insert { index: 4, entry: Entry::plain("d") },
            ]
        );
        assert_eq!(apply(&collapsed, &ops), expanded);
    }

    #[test]
    fn test_diff_identical_is_empty() {
        let rows = plain(&["a", "b"]);
        assert!(diff_projection(&rows, &rows).is_empty());
    }

    #[test]
    fn test_diff_badge_mismatch_is_not_reused() {
        // A history row never stands in for an extras row with the same label.
        let old = vec![Entry::plain("a"), Entry::recent("x")];
        let new = vec![Entry::plain("a"), Entry::plain("x")];
        let ops = diff_projection(&old, &new);
        assert_eq!(
            ops,
            vec![
                EditOp::Remove { index: 1 },
                EditOp::Insert { index: 1, entry: Entry::plain("x") },
            ]
        );
    }

    #[test]
    fn test_diff_ops_apply_cleanly_across_layout_changes() {
        let history = SelectionHistory::by_text(2);
        let extras_only = build_projection(&store(&[], &["x", "y"]), &history, false);
        let promoted = build_projection(&store(&["d"], &["x", "y"]), &history, false);

        let ops = diff_projection(&extras_only, &promoted);
        assert_eq!(apply(&extras_only, &ops), promoted);

        let ops_back = diff_projection(&promoted, &extras_only);
        assert_eq!(apply(&promoted, &ops_back), extras_only);
    }
}
