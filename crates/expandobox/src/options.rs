//! Construction-time configuration for [`ExpandoBox`](crate::ExpandoBox).

/// Configuration for an [`ExpandoBox`](crate::ExpandoBox).
///
/// The item lists are taken by value; the control owns its state outright.
///
/// # Example
///
/// ```
/// use expandobox::ExpandoOptions;
///
/// let options = ExpandoOptions::new()
///     .with_defaults(["bled us dry", "taken everything we had"])
///     .with_extras(["aqueduct", "sanitation", "roads"])
///     .with_history_capacity(2)
///     .with_placeholder("What have the Romans ever done?");
/// ```
#[derive(Debug, Clone)]
pub struct ExpandoOptions {
    /// Always-visible items.
    pub defaults: Vec<String>,
    /// Items revealed by expansion.
    pub extras: Vec<String>,
    /// Validate uniqueness at construction and deduplicate history by
    /// projection index rather than by label text.
    pub unique: bool,
    /// History capacity; zero disables history entirely.
    pub history_capacity: usize,
    /// How many extras the popup should show at once — a display-surface
    /// hint, not logical state.
    pub visible_extras: usize,
    /// Initially displayed text.
    pub placeholder: String,
    /// The reserved sentinel label that toggles expansion.
    pub expander: String,
}

impl Default for ExpandoOptions {
    fn default() -> Self {
        Self {
            defaults: Vec::new(),
            extras: Vec::new(),
            unique: true,
            history_capacity: 3,
            visible_extras: 5,
            placeholder: String::new(),
            expander: "...".to_owned(),
        }
    }
}

impl ExpandoOptions {
    /// Create options with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial defaults.
    pub fn with_defaults(mut self, defaults: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.defaults = defaults.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initial extras.
    pub fn with_extras(mut self, extras: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extras = extras.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable uniqueness validation (and index-based history
    /// deduplication).
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Set the history capacity.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the visible-extras display hint.
    pub fn with_visible_extras(mut self, count: usize) -> Self {
        self.visible_extras = count;
        self
    }

    /// Set the initially displayed text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the reserved expander label.
    pub fn with_expander(mut self, expander: impl Into<String>) -> Self {
        self.expander = expander.into();
        self
    }
}
