//! The display-surface boundary.
//!
//! The engine owns no rendering. It drives an injected [`DisplaySurface`] —
//! any ordered display list that supports indexed insert/remove and a
//! current-value display — and is the surface's only writer. Embedders wire
//! the surface's activation events back into
//! [`ExpandoBox::on_activated`](crate::ExpandoBox::on_activated) and route
//! popup-hide requests through
//! [`ExpandoBox::hide_popup`](crate::ExpandoBox::hide_popup) so the
//! previous-value restore runs first.
//!
//! [`HeadlessSurface`] is the built-in implementation: a clonable handle
//! over shared state that records everything the engine does to it. It backs
//! the test suite and doubles as a template for real adapters.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::projection::ItemBadge;

// ============================================================================
// DisplaySurface
// ============================================================================

/// An ordered display list driven by the engine.
///
/// Implementations must honor the positions they are given: the engine
/// guarantees every `remove_at` position is in range, and `insert_at`
/// positions at or past the current length mean append.
pub trait DisplaySurface {
    /// Insert one row so it ends up at `position`; positions at or past the
    /// current length append.
    fn insert_at(&mut self, position: usize, label: &str, badge: Option<ItemBadge>);

    /// Remove the row at `position`.
    fn remove_at(&mut self, position: usize);

    /// Set the displayed current value.
    fn set_current_text(&mut self, text: &str);

    /// Set the displayed current row (`-1` means no row).
    fn set_current_index(&mut self, index: i32);

    /// Set the in-progress free-text edit.
    fn set_editable_text(&mut self, text: &str);

    /// Open the dropdown popup (or keep it open).
    fn show_popup(&mut self);

    /// Close the dropdown popup, without any restore logic.
    fn hide_popup(&mut self);
}

// ============================================================================
// HeadlessSurface
// ============================================================================

#[derive(Debug)]
struct HeadlessState {
    rows: Vec<(String, Option<ItemBadge>)>,
    current_text: String,
    current_index: i32,
    edit_text: String,
    popup_visible: bool,
}

impl Default for HeadlessState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            current_text: String::new(),
            current_index: -1,
            edit_text: String::new(),
            popup_visible: false,
        }
    }
}

/// An in-memory [`DisplaySurface`].
///
/// Cloning yields another handle onto the same state, so a test (or an
/// embedder) can keep a probe while the engine owns the boxed surface:
///
/// ```
/// use expandobox::{ExpandoBox, HeadlessSurface};
///
/// let surface = HeadlessSurface::new();
/// let probe = surface.clone();
/// let control = ExpandoBox::new(Box::new(surface));
/// assert!(probe.labels().is_empty());
/// # let _ = control;
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    state: Arc<Mutex<HeadlessState>>,
}

impl HeadlessSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently shown.
    pub fn len(&self) -> usize {
        self.state.lock().rows.len()
    }

    /// Returns `true` if no rows are shown.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The shown labels, in order.
    pub fn labels(&self) -> Vec<String> {
        self.state
            .lock()
            .rows
            .iter()
            .map(|(label, _)| label.clone())
            .collect()
    }

    /// The badge of the row at `position`, if any.
    pub fn badge_at(&self, position: usize) -> Option<ItemBadge> {
        self.state
            .lock()
            .rows
            .get(position)
            .and_then(|(_, badge)| *badge)
    }

    /// The displayed current value.
    pub fn current_text(&self) -> String {
        self.state.lock().current_text.clone()
    }

    /// The displayed current row (`-1` means no row).
    pub fn current_index(&self) -> i32 {
        self.state.lock().current_index
    }

    /// The in-progress free-text edit.
    pub fn edit_text(&self) -> String {
        self.state.lock().edit_text.clone()
    }

    /// Whether the dropdown popup is open.
    pub fn is_popup_visible(&self) -> bool {
        self.state.lock().popup_visible
    }
}

impl DisplaySurface for HeadlessSurface {
    fn insert_at(&mut self, position: usize, label: &str, badge: Option<ItemBadge>) {
        let mut state = self.state.lock();
        let position = position.min(state.rows.len());
        state.rows.insert(position, (label.to_owned(), badge));
    }

    fn remove_at(&mut self, position: usize) {
        let mut state = self.state.lock();
        if position < state.rows.len() {
            state.rows.remove(position);
        }
    }

    fn set_current_text(&mut self, text: &str) {
        self.state.lock().current_text = text.to_owned();
    }

    fn set_current_index(&mut self, index: i32) {
        self.state.lock().current_index = index;
    }

    fn set_editable_text(&mut self, text: &str) {
        self.state.lock().edit_text = text.to_owned();
    }

    fn show_popup(&mut self) {
        self.state.lock().popup_visible = true;
    }

    fn hide_popup(&mut self) {
        self.state.lock().popup_visible = false;
    }
}
