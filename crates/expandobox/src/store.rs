//! Logical list store: defaults, extras, and the derived suggestion list.
//!
//! [`ItemStore`] owns the two logical item lists plus the cached
//! concatenation used for suggestion matching, and enforces the constraints
//! around them:
//!
//! - the reserved expander label never appears in either list (checked at
//!   construction and again on every add);
//! - when uniqueness is requested, each list is internally duplicate-free and
//!   the two lists do not overlap (construction only).
//!
//! Construction failures collect every violated group into one
//! [`ConfigError`]. Add failures are [`InvalidItemError`]s raised before any
//! state changes. Removal is lenient: out-of-range indices resolve to
//! nothing and the call is a no-op.

use std::collections::{HashMap, HashSet};

use crate::error::{ConfigError, InvalidItemError};

// ============================================================================
// ItemSelector
// ============================================================================

/// Designates items to remove: one position, or every occurrence of a label.
///
/// Accepting this enum (via `impl Into<ItemSelector>`) makes the
/// positional-or-label argument a compile-time choice; there is no runtime
/// "wrong argument type" case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    /// A single 0-based position. Out of range resolves to nothing.
    Index(usize),
    /// Every position whose label matches.
    Label(String),
}

impl From<usize> for ItemSelector {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ItemSelector {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<String> for ItemSelector {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// Resolve a selector against `list` into removal positions.
///
/// Label selectors match every occurrence. Because each removal shifts the
/// positions after it left by one, the emitted indices are pre-adjusted
/// (`original position - matches already removed before it`) and must be
/// applied in the order returned; every index is then valid against the list
/// as it stands at the moment of that specific removal.
pub(crate) fn removal_indices(list: &[String], selector: &ItemSelector) -> Vec<usize> {
    match selector {
        ItemSelector::Index(index) if *index < list.len() => vec![*index],
        ItemSelector::Index(_) => Vec::new(),
        ItemSelector::Label(label) => {
            let mut matched = 0;
            let mut indices = Vec::new();
            for (position, item) in list.iter().enumerate() {
                if item == label {
                    indices.push(position - matched);
                    matched += 1;
                }
            }
            indices
        }
    }
}

// ============================================================================
// ItemStore
// ============================================================================

/// Owns the defaults and extras lists and the derived suggestion list.
#[derive(Debug, Clone)]
pub struct ItemStore {
    defaults: Vec<String>,
    extras: Vec<String>,
    /// Cached `defaults ++ extras`, re-derived after every mutation.
    all_items: Vec<String>,
    expander: String,
    unique: bool,
}

impl ItemStore {
    /// Create a store, validating the supplied lists.
    ///
    /// Fails with a [`ConfigError`] enumerating every violated group: the
    /// expander label found among the items, repeated defaults, repeated
    /// extras, and labels shared between the two lists (the latter three
    /// only when `unique` is set).
    pub fn new(
        defaults: Vec<String>,
        extras: Vec<String>,
        expander: String,
        unique: bool,
    ) -> Result<Self, ConfigError> {
        let report = validate(&defaults, &extras, &expander, unique);
        if !report.is_empty() {
            return Err(report);
        }

        let mut store = Self {
            defaults,
            extras,
            all_items: Vec::new(),
            expander,
            unique,
        };
        store.refresh_all_items();
        Ok(store)
    }

    /// Create a store with no items. Cannot violate any constraint.
    pub fn empty(expander: String, unique: bool) -> Self {
        Self {
            defaults: Vec::new(),
            extras: Vec::new(),
            all_items: Vec::new(),
            expander,
            unique,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The always-visible items.
    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    /// The items revealed by expansion.
    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    /// `defaults ++ extras`, the suggestion-matching list.
    pub fn all_items(&self) -> &[String] {
        &self.all_items
    }

    /// The reserved expander label.
    pub fn expander(&self) -> &str {
        &self.expander
    }

    /// Whether uniqueness validation was requested at construction.
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    // =========================================================================
    // Adds
    // =========================================================================

    /// Append one default.
    pub fn add_default(&mut self, label: String) -> Result<(), InvalidItemError> {
        self.check_label(&label)?;
        self.defaults.push(label);
        self.refresh_all_items();
        Ok(())
    }

    /// Append several defaults. Either all are added or none.
    pub fn add_defaults(&mut self, labels: Vec<String>) -> Result<(), InvalidItemError> {
        self.check_batch(&labels)?;
        self.defaults.extend(labels);
        self.refresh_all_items();
        Ok(())
    }

    /// Append one extra.
    pub fn add_extra(&mut self, label: String) -> Result<(), InvalidItemError> {
        self.check_label(&label)?;
        self.extras.push(label);
        self.refresh_all_items();
        Ok(())
    }

    /// Append several extras. Either all are added or none.
    pub fn add_extras(&mut self, labels: Vec<String>) -> Result<(), InvalidItemError> {
        self.check_batch(&labels)?;
        self.extras.extend(labels);
        self.refresh_all_items();
        Ok(())
    }

    // =========================================================================
    // Removals
    // =========================================================================

    /// Remove defaults matching `selector`.
    ///
    /// Returns the removed `(position, label)` pairs, each position valid at
    /// the moment of its removal. Out-of-range index: empty result.
    pub fn remove_defaults(&mut self, selector: &ItemSelector) -> Vec<(usize, String)> {
        let removed = remove_matching(&mut self.defaults, selector);
        if !removed.is_empty() {
            self.refresh_all_items();
        }
        removed
    }

    /// Remove extras matching `selector`; same contract as
    /// [`remove_defaults`](Self::remove_defaults).
    pub fn remove_extras(&mut self, selector: &ItemSelector) -> Vec<(usize, String)> {
        let removed = remove_matching(&mut self.extras, selector);
        if !removed.is_empty() {
            self.refresh_all_items();
        }
        removed
    }

    /// Drop every default.
    pub fn clear_defaults(&mut self) {
        self.defaults.clear();
        self.refresh_all_items();
    }

    /// Drop every extra.
    pub fn clear_extras(&mut self) {
        self.extras.clear();
        self.refresh_all_items();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn check_label(&self, label: &str) -> Result<(), InvalidItemError> {
        if label == self.expander {
            return Err(InvalidItemError::Single {
                label: label.to_owned(),
            });
        }
        Ok(())
    }

    fn check_batch(&self, labels: &[String]) -> Result<(), InvalidItemError> {
        let indices: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|(_, label)| **label == self.expander)
            .map(|(index, _)| index)
            .collect();
        if !indices.is_empty() {
            return Err(InvalidItemError::Batch {
                label: self.expander.clone(),
                indices,
            });
        }
        Ok(())
    }

    fn refresh_all_items(&mut self) {
        self.all_items.clear();
        self.all_items.extend(self.defaults.iter().cloned());
        self.all_items.extend(self.extras.iter().cloned());
    }
}

fn remove_matching(list: &mut Vec<String>, selector: &ItemSelector) -> Vec<(usize, String)> {
    let indices = removal_indices(list, selector);
    let mut removed = Vec::with_capacity(indices.len());
    for index in indices {
        let label = list.remove(index);
        removed.push((index, label));
    }
    removed
}

// ============================================================================
// Validation
// ============================================================================

fn validate(defaults: &[String], extras: &[String], expander: &str, unique: bool) -> ConfigError {
    let mut report = ConfigError::default();

    if defaults.iter().chain(extras).any(|label| label.as_str() == expander) {
        report.expander_collision = Some(expander.to_owned());
    }

    if unique {
        report.repeated_defaults = repeated(defaults);
        report.repeated_extras = repeated(extras);

        let extra_set: HashSet<&str> = extras.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        report.shared = defaults
            .iter()
            .filter(|label| extra_set.contains(label.as_str()) && seen.insert(label.as_str()))
            .cloned()
            .collect();
    }

    report
}

/// Labels occurring more than once, in first-occurrence order.
fn repeated(labels: &[String]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label.as_str()).or_default() += 1;
    }
    let mut seen = HashSet::new();
    labels
        .iter()
        .filter(|label| counts[label.as_str()] > 1 && seen.insert(label.as_str()))
        .cloned()
        .collect()
}
