//! Suggestion data source for external completion components.
//!
//! The control exposes its full item list (defaults then extras) for
//! autocomplete matching while the user types. An external completer asks
//! for [`completions`](SuggestionModel::completions) against the current
//! prefix and feeds the accepted suggestion back through
//! [`ExpandoBox::on_completion`](crate::ExpandoBox::on_completion).

/// Controls how suggestion matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g. "App" won't match "apple").
    CaseSensitive,
    /// Case-insensitive matching (e.g. "App" will match "apple").
    #[default]
    CaseInsensitive,
}

/// Trait for providing completion suggestions.
///
/// The model filters its items against the input prefix and returns the
/// matches in model order. An empty prefix matches everything.
pub trait SuggestionModel {
    /// Get suggestions matching the given prefix.
    fn completions(&self, prefix: &str, case_sensitivity: CaseSensitivity) -> Vec<String>;

    /// Total number of items in the model, before filtering.
    ///
    /// Returns `None` if the count is unknown.
    fn count(&self) -> Option<usize> {
        None
    }
}

/// Prefix-filter `items`, preserving their order.
pub(crate) fn match_prefix(
    items: &[String],
    prefix: &str,
    case_sensitivity: CaseSensitivity,
) -> Vec<String> {
    if prefix.is_empty() {
        return items.to_vec();
    }

    match case_sensitivity {
        CaseSensitivity::CaseSensitive => items
            .iter()
            .filter(|item| item.starts_with(prefix))
            .cloned()
            .collect(),
        CaseSensitivity::CaseInsensitive => {
            let prefix_lower = prefix.to_lowercase();
            items
                .iter()
                .filter(|item| item.to_lowercase().starts_with(&prefix_lower))
                .cloned()
                .collect()
        }
    }
}
