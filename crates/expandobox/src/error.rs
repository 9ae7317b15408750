//! Error types for the expandobox engine.
//!
//! Two failure classes exist, both pure and deterministic:
//!
//! - [`ConfigError`] — construction-time validation failed; the control is
//!   not created. The message enumerates every offending group so a caller
//!   can fix all of them at once.
//! - [`InvalidItemError`] — an add operation supplied the reserved expander
//!   label. The call has no effect on state.
//!
//! Out-of-range removal indices are deliberately *not* errors; removal is
//! lenient and treats them as no-ops.

use std::fmt;

/// Result type alias for expandobox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or mutating an expandobox.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Construction-time validation failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An add operation supplied the reserved expander label.
    #[error(transparent)]
    InvalidItem(#[from] InvalidItemError),
}

// ============================================================================
// ConfigError
// ============================================================================

/// Construction-time validation failure.
///
/// Every violated constraint is collected before the error is raised, so a
/// single failure reports the complete set of offending labels rather than
/// the first one found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigError {
    /// The reserved expander label, when it was also supplied as an item.
    pub expander_collision: Option<String>,
    /// Labels appearing more than once in the defaults (uniqueness mode).
    pub repeated_defaults: Vec<String>,
    /// Labels appearing more than once in the extras (uniqueness mode).
    pub repeated_extras: Vec<String>,
    /// Labels supplied as both a default and an extra (uniqueness mode).
    pub shared: Vec<String>,
}

impl ConfigError {
    /// Returns `true` if no constraint was violated.
    pub fn is_empty(&self) -> bool {
        self.expander_collision.is_none()
            && self.repeated_defaults.is_empty()
            && self.repeated_extras.is_empty()
            && self.shared.is_empty()
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid expandobox configuration:")?;
        if let Some(expander) = &self.expander_collision {
            write!(
                f,
                "\n  the expander label cannot be a default or extra item: {expander:?}"
            )?;
        }
        if !self.repeated_defaults.is_empty() {
            write!(
                f,
                "\n  repeated default items: {:?}",
                self.repeated_defaults
            )?;
        }
        if !self.repeated_extras.is_empty() {
            write!(f, "\n  repeated extra items: {:?}", self.repeated_extras)?;
        }
        if !self.shared.is_empty() {
            write!(
                f,
                "\n  items given as both defaults and extras: {:?}",
                self.shared
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// InvalidItemError
// ============================================================================

/// An add operation supplied the reserved expander label.
///
/// Batch variants report every offending offset within the supplied batch,
/// not just the first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemError {
    /// A single-item add supplied the expander label.
    #[error("cannot add the expander label {label:?} as an item")]
    Single {
        /// The offending label.
        label: String,
    },

    /// A batch add supplied the expander label at the given offsets.
    #[error("cannot add the expander label {label:?} as an item (batch offsets {indices:?})")]
    Batch {
        /// The offending label.
        label: String,
        /// Every offset within the batch holding the expander label.
        indices: Vec<usize>,
    },
}
