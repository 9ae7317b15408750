//! The expandable selection control.
//!
//! [`ExpandoBox`] is the state and projection engine behind a single-choice
//! picker with a short always-visible default list and a longer secondary
//! list ("extras") revealed by activating a sentinel row (the "expander").
//! While collapsed, the tail of the list shows a bounded history of previous
//! extra picks instead of the full extras.
//!
//! The control owns no rendering: it drives an injected
//! [`DisplaySurface`](crate::DisplaySurface) with minimal ordered edits and
//! interprets the activation events the surface reports back.
//!
//! # Example
//!
//! ```
//! use expandobox::{ExpandoBox, ExpandoOptions, HeadlessSurface};
//!
//! let surface = HeadlessSurface::new();
//! let probe = surface.clone();
//! let mut control = ExpandoBox::with_options(
//!     Box::new(surface),
//!     ExpandoOptions::new()
//!         .with_defaults(["A", "B"])
//!         .with_extras(["C", "D", "E"])
//!         .with_history_capacity(2),
//! )?;
//!
//! assert_eq!(probe.labels(), ["A", "B", "..."]);
//!
//! control.on_activated(2); // the expander
//! assert_eq!(probe.labels(), ["A", "B", "...", "C", "D", "E"]);
//!
//! control.on_activated(4); // "D"
//! assert_eq!(probe.labels(), ["A", "B", "...", "D"]);
//! assert_eq!(probe.current_text(), "D");
//! # Ok::<(), expandobox::Error>(())
//! ```

use tracing::{debug, trace};

use crate::error::Result;
use crate::history::SelectionHistory;
use crate::options::ExpandoOptions;
use crate::projection::{EditOp, Entry, build_projection, diff_projection};
use crate::signal::Signal;
use crate::store::{ItemSelector, ItemStore};
use crate::suggest::{CaseSensitivity, SuggestionModel, match_prefix};
use crate::surface::DisplaySurface;

// ============================================================================
// Previous
// ============================================================================

/// The last committed pick, used to restore the displayed value when an
/// interaction is abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Previous {
    /// Projection index at commit time; `-1` means nothing committed yet.
    pub index: i32,
    /// Committed label (initially the placeholder).
    pub text: String,
}

// ============================================================================
// ExpandoBox
// ============================================================================

/// State and projection engine for an expandable selection control.
///
/// # Signals
///
/// - `activated(i32)`: a non-expander row was committed (projection index at
///   activation time, `-1` for a completion that resolved to a hidden item)
/// - `current_text_changed(String)`: the committed text changed
/// - `expansion_changed(bool)`: the expansion state flipped
pub struct ExpandoBox {
    /// Logical item lists.
    store: ItemStore,
    /// Recently picked extras, shown while collapsed.
    history: SelectionHistory,
    /// Whether the extras are currently revealed.
    expanded: bool,
    /// Last committed pick.
    previous: Previous,
    /// Mirror of what the surface currently shows. The surface is never
    /// read back.
    shown: Vec<Entry>,
    /// The injected display surface; this engine is its only writer.
    surface: Box<dyn DisplaySurface>,
    /// Initially displayed text.
    placeholder: String,
    /// Display hint: extras rows the popup should show at once.
    visible_extras: usize,

    /// Signal emitted when a non-expander row is committed.
    pub activated: Signal<i32>,
    /// Signal emitted when the committed text changes.
    pub current_text_changed: Signal<String>,
    /// Signal emitted when the expansion state flips.
    pub expansion_changed: Signal<bool>,
}

impl std::fmt::Debug for ExpandoBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpandoBox")
            .field("store", &self.store)
            .field("history", &self.history)
            .field("expanded", &self.expanded)
            .field("previous", &self.previous)
            .field("shown", &self.shown)
            .field("placeholder", &self.placeholder)
            .field("visible_extras", &self.visible_extras)
            .finish_non_exhaustive()
    }
}

impl ExpandoBox {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create an empty control with default settings.
    pub fn new(surface: Box<dyn DisplaySurface>) -> Self {
        let options = ExpandoOptions::new();
        let store = ItemStore::empty(options.expander, options.unique);
        let history = SelectionHistory::by_index(options.history_capacity);
        Self::assemble(surface, store, history, options.placeholder, options.visible_extras)
    }

    /// Create a control from `options`, validating the supplied lists.
    ///
    /// Fails with [`Error::Config`](crate::Error::Config) — enumerating
    /// every offending label group — when the expander appears among the
    /// items, or uniqueness was requested and violated. No control is
    /// created on failure.
    pub fn with_options(surface: Box<dyn DisplaySurface>, options: ExpandoOptions) -> Result<Self> {
        let ExpandoOptions {
            defaults,
            extras,
            unique,
            history_capacity,
            visible_extras,
            placeholder,
            expander,
        } = options;

        let store = ItemStore::new(defaults, extras, expander, unique)?;
        let history = if unique {
            SelectionHistory::by_index(history_capacity)
        } else {
            SelectionHistory::by_text(history_capacity)
        };
        Ok(Self::assemble(surface, store, history, placeholder, visible_extras))
    }

    fn assemble(
        surface: Box<dyn DisplaySurface>,
        store: ItemStore,
        history: SelectionHistory,
        placeholder: String,
        visible_extras: usize,
    ) -> Self {
        let mut control = Self {
            store,
            history,
            expanded: false,
            previous: Previous {
                index: -1,
                text: placeholder.clone(),
            },
            shown: Vec::new(),
            surface,
            placeholder,
            visible_extras,
            activated: Signal::new(),
            current_text_changed: Signal::new(),
            expansion_changed: Signal::new(),
        };
        control.sync_projection();
        let text = control.placeholder.clone();
        control.surface.set_current_text(&text);
        control
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The always-visible items.
    pub fn defaults(&self) -> &[String] {
        self.store.defaults()
    }

    /// The items revealed by expansion.
    pub fn extras(&self) -> &[String] {
        self.store.extras()
    }

    /// `defaults ++ extras`, the suggestion-matching list.
    pub fn all_items(&self) -> &[String] {
        self.store.all_items()
    }

    /// The reserved expander label.
    pub fn expander(&self) -> &str {
        self.store.expander()
    }

    /// The initially displayed text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether uniqueness validation was requested at construction.
    pub fn is_unique(&self) -> bool {
        self.store.is_unique()
    }

    /// Whether the extras are currently revealed.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Remembered previous extra picks, newest first.
    pub fn history_labels(&self) -> Vec<String> {
        self.history.labels().map(str::to_owned).collect()
    }

    /// The fixed history capacity.
    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }

    /// The last committed pick.
    pub fn previous(&self) -> &Previous {
        &self.previous
    }

    /// Number of rows currently projected.
    pub fn count(&self) -> usize {
        self.shown.len()
    }

    /// The label at a projection row.
    pub fn item_text(&self, index: usize) -> Option<String> {
        self.shown.get(index).map(|entry| entry.label.clone())
    }

    /// The projected labels, in display order.
    pub fn projection_labels(&self) -> Vec<String> {
        self.shown.iter().map(|entry| entry.label.clone()).collect()
    }

    /// Display hint: how many rows the popup should show at once (all
    /// defaults, the expander, and the configured number of extras).
    pub fn max_visible_rows(&self) -> usize {
        self.store.defaults().len() + 1 + self.visible_extras
    }

    // =========================================================================
    // Selection handling
    // =========================================================================

    /// Handle an activation event reported by the surface.
    ///
    /// Activating the expander toggles expansion and is never a selection;
    /// the displayed value falls back to the previous commit and the popup
    /// stays open. Any other row commits: while expanded, an extras-segment
    /// pick is offered to the history and the control collapses; while
    /// collapsed, only the committed value changes. Indices outside the
    /// projection are ignored.
    pub fn on_activated(&mut self, index: usize) {
        let Some(entry) = self.shown.get(index) else {
            debug!(target: "expandobox::selection", index, "activation index outside projection, ignoring");
            return;
        };
        let label = entry.label.clone();

        if label == self.store.expander() {
            self.toggle_expansion();
            return;
        }

        // History and Previous first; projection edits only after the
        // logical state is settled.
        self.previous = Previous {
            index: index as i32,
            text: label.clone(),
        };

        if self.expanded {
            if index >= self.extras_offset() {
                let recorded = self.history.record(&label, index);
                trace!(target: "expandobox::selection", %label, index, recorded, "extra pick offered to history");
            }
            self.set_expansion_state(false);
            self.sync_projection();
            self.surface.set_current_text(&label);
            self.surface.set_editable_text(&label);
        } else {
            self.surface.set_current_text(&label);
            self.surface.set_current_index(index as i32);
            self.surface.set_editable_text(&label);
        }

        debug!(target: "expandobox::selection", %label, index, "selection committed");
        self.activated.emit(index as i32);
        self.current_text_changed.emit(label);
    }

    /// Handle a free-text edit reported by the surface.
    ///
    /// A blank editor shows the full option list; any other text closes the
    /// option popup in favor of the suggestion popup. The close bypasses
    /// [`hide_popup`](Self::hide_popup) so the typed text survives.
    pub fn on_text_edited(&mut self, text: &str) {
        if text.is_empty() {
            self.surface.show_popup();
        } else {
            self.surface.hide_popup();
        }
    }

    /// Commit a suggestion accepted in an external completion component.
    ///
    /// A suggestion naming a default commits like a collapsed pick. One
    /// naming an extra is also offered to the history, so it surfaces in the
    /// collapsed tail. Text matching no item is ignored.
    pub fn on_completion(&mut self, text: &str) {
        let Some(position) = self.store.all_items().iter().position(|item| item.as_str() == text) else {
            debug!(target: "expandobox::selection", text, "completion matches no item, ignoring");
            return;
        };

        let defaults = self.store.defaults().len();
        if position >= defaults {
            let display_index = self.extras_offset() + (position - defaults);
            let recorded = self.history.record(text, display_index);
            trace!(target: "expandobox::selection", text, display_index, recorded, "completed extra offered to history");
            self.sync_projection();
        }

        let shown_index = self
            .shown
            .iter()
            .position(|entry| entry.label == text)
            .map_or(-1, |shown| shown as i32);
        self.previous = Previous {
            index: shown_index,
            text: text.to_owned(),
        };
        self.surface.set_current_text(text);
        self.surface.set_current_index(shown_index);
        self.surface.set_editable_text(text);

        debug!(target: "expandobox::selection", text, "completion committed");
        self.activated.emit(shown_index);
        self.current_text_changed.emit(text.to_owned());
    }

    /// Close the popup, restoring the displayed value first.
    ///
    /// This is the abandoned-interaction path: whatever was highlighted or
    /// half-typed is discarded and the previous commit is shown again.
    /// Expansion state and history are untouched.
    pub fn hide_popup(&mut self) {
        self.surface.set_current_text(&self.previous.text);
        self.surface.set_current_index(self.previous.index);
        self.surface.set_editable_text(&self.previous.text);
        self.surface.hide_popup();
    }

    // =========================================================================
    // Item modification
    // =========================================================================

    /// Append one default.
    ///
    /// Adding the first default while extras exist replaces the bare extras
    /// listing with "default, expander" (plus the tail the current expansion
    /// state calls for).
    pub fn add_default(&mut self, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        self.store.add_default(label.clone())?;
        debug!(target: "expandobox::mutation", %label, "default added");
        self.sync_projection();
        Ok(())
    }

    /// Append several defaults. Either all are added or none.
    pub fn add_defaults(
        &mut self,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<()> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Ok(());
        }
        let count = labels.len();
        self.store.add_defaults(labels)?;
        debug!(target: "expandobox::mutation", count, "defaults added");
        self.sync_projection();
        Ok(())
    }

    /// Append one extra.
    ///
    /// The first extra alongside existing defaults brings the expander with
    /// it. While expanded the new extra is shown immediately; while
    /// collapsed it stays logical-only until the next expansion.
    pub fn add_extra(&mut self, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        self.store.add_extra(label.clone())?;
        debug!(target: "expandobox::mutation", %label, "extra added");
        self.sync_projection();
        Ok(())
    }

    /// Append several extras. Either all are added or none.
    pub fn add_extras(
        &mut self,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<()> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Ok(());
        }
        let count = labels.len();
        self.store.add_extras(labels)?;
        debug!(target: "expandobox::mutation", count, "extras added");
        self.sync_projection();
        Ok(())
    }

    /// Remove defaults by position or by label (every occurrence).
    ///
    /// An out-of-range position is a no-op. Removing the last default while
    /// extras remain drops the expander and shows the extras outright,
    /// expanding if necessary.
    pub fn remove_default(&mut self, selector: impl Into<ItemSelector>) {
        let selector = selector.into();
        let removed = self.store.remove_defaults(&selector);
        if removed.is_empty() {
            return;
        }
        debug!(target: "expandobox::mutation", ?selector, count = removed.len(), "defaults removed");
        if self.store.defaults().is_empty() && !self.store.extras().is_empty() {
            // The expander would dangle without defaults in front of it.
            self.set_expansion_state(true);
        }
        self.sync_projection();
    }

    /// Remove extras by position or by label (every occurrence).
    ///
    /// An out-of-range position is a no-op. Matching history entries are
    /// purged so no remembered pick outlives its backing extra. Removing the
    /// last extra while defaults remain drops the expander and collapses.
    pub fn remove_extra(&mut self, selector: impl Into<ItemSelector>) {
        let selector = selector.into();
        let removed = self.store.remove_extras(&selector);
        if removed.is_empty() {
            return;
        }
        debug!(target: "expandobox::mutation", ?selector, count = removed.len(), "extras removed");

        let offset = self.extras_offset();
        for (position, label) in &removed {
            let purged = self.history.purge(label, offset + position);
            if purged > 0 {
                trace!(target: "expandobox::mutation", %label, purged, "history entries purged");
            }
        }

        if self.store.extras().is_empty() {
            self.set_expansion_state(false);
        }
        self.sync_projection();
    }

    /// Drop every default, applying the same boundary adjustment as removing
    /// them one by one.
    pub fn clear_defaults(&mut self) {
        if self.store.defaults().is_empty() {
            return;
        }
        self.store.clear_defaults();
        debug!(target: "expandobox::mutation", "defaults cleared");
        if !self.store.extras().is_empty() {
            self.set_expansion_state(true);
        }
        self.sync_projection();
    }

    /// Drop every extra. The history goes with them: nothing it remembers
    /// has a backing extra anymore.
    pub fn clear_extras(&mut self) {
        if self.store.extras().is_empty() {
            return;
        }
        self.store.clear_extras();
        self.history.clear();
        debug!(target: "expandobox::mutation", "extras cleared");
        self.set_expansion_state(false);
        self.sync_projection();
    }

    /// Forget every remembered pick.
    pub fn clear_history(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.history.clear();
        debug!(target: "expandobox::mutation", "history cleared");
        self.sync_projection();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// First projection index of the extras segment: past the defaults and,
    /// when one is shown, the expander row.
    fn extras_offset(&self) -> usize {
        let defaults = self.store.defaults().len();
        if defaults == 0 { 0 } else { defaults + 1 }
    }

    fn set_expansion_state(&mut self, expanded: bool) {
        if self.expanded != expanded {
            self.expanded = expanded;
            self.expansion_changed.emit(expanded);
        }
    }

    fn toggle_expansion(&mut self) {
        let expanded = !self.expanded;
        debug!(target: "expandobox::selection", expanded, "expander activated");
        self.set_expansion_state(expanded);
        self.sync_projection();

        // Keep the popup open, and make sure the click itself does not read
        // as a selection: the displayed value falls back to the previous
        // commit and any in-progress edit is dropped.
        self.surface.show_popup();
        self.surface.set_current_text(&self.previous.text);
        self.surface.set_current_index(self.previous.index);
        self.surface.set_editable_text("");
    }

    /// Recompute the intended projection and push the difference to the
    /// surface as ordered edits.
    fn sync_projection(&mut self) {
        let intended = build_projection(&self.store, &self.history, self.expanded);
        let ops = diff_projection(&self.shown, &intended);
        for op in &ops {
            trace!(target: "expandobox::projection", ?op, "projection edit");
            match op {
                EditOp::Insert { index, entry } => {
                    self.surface.insert_at(*index, &entry.label, entry.badge);
                }
                EditOp::Remove { index } => self.surface.remove_at(*index),
            }
        }
        self.shown = intended;
    }
}

impl SuggestionModel for ExpandoBox {
    fn completions(&self, prefix: &str, case_sensitivity: CaseSensitivity) -> Vec<String> {
        match_prefix(self.store.all_items(), prefix, case_sensitivity)
    }

    fn count(&self) -> Option<usize> {
        Some(self.store.all_items().len())
    }
}
