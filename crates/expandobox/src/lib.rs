//! Expandobox — state and projection engine for an expandable selection
//! control.
//!
//! A single-choice picker shows a short list of defaults plus a sentinel row
//! (the "expander") that reveals a longer extras list in place of a bounded
//! history of previous extra picks. This crate owns the logical state of one
//! such control — the item lists, the expand/collapse state machine, the
//! selection protocol, and the history policy — and keeps a rendered
//! projection in sync through minimal ordered edits against an injected
//! [`DisplaySurface`].
//!
//! The crate renders nothing itself: plug in any surface that can insert,
//! remove, and display a current value, route its activation events back
//! into [`ExpandoBox::on_activated`], and the engine does the rest.
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
//!         .with_defaults(["bled us dry", "taken everything we had"])
//!         .with_extras(["aqueduct", "sanitation", "roads", "wine"])
//!         .with_history_capacity(2)
//!         .with_placeholder("What have the Romans ever done?"),
//! )?;
//!
//! // Collapsed: defaults plus the expander row.
//! assert_eq!(probe.len(), 3);
//!
//! control.on_activated(2); // expand
//! control.on_activated(6); // pick "wine"
//! assert_eq!(probe.current_text(), "wine");
//! assert_eq!(control.history_labels(), ["wine"]);
//! # Ok::<(), expandobox::Error>(())
//! ```

pub mod error;
pub mod expando_box;
pub mod history;
pub mod options;
pub mod projection;
pub mod signal;
pub mod store;
pub mod suggest;
pub mod surface;

pub use error::{ConfigError, Error, InvalidItemError, Result};
pub use expando_box::{ExpandoBox, Previous};
pub use history::{HistoryEntry, SelectionHistory};
pub use options::ExpandoOptions;
pub use projection::ItemBadge;
pub use signal::{ConnectionId, Signal};
pub use store::{ItemSelector, ItemStore};
pub use suggest::{CaseSensitivity, SuggestionModel};
pub use surface::{DisplaySurface, HeadlessSurface};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Selection and activation handling.
    pub const SELECTION: &str = "expandobox::selection";
    /// Item add/remove/clear operations.
    pub const MUTATION: &str = "expandobox::mutation";
    /// Projection edit emission.
    pub const PROJECTION: &str = "expandobox::projection";
    /// Signal emission.
    pub const SIGNAL: &str = "expandobox::signal";
}
