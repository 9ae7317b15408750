//! Shared helpers for the integration suite.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Once;

use expandobox::{ExpandoBox, ExpandoOptions, HeadlessSurface};

static INIT: Once = Once::new();

/// Install a `RUST_LOG`-filtered subscriber once, so failing tests can be
/// re-run with engine tracing enabled.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a control over a fresh headless surface, returning a probe handle
/// onto the same surface state.
pub fn build(options: ExpandoOptions) -> (ExpandoBox, HeadlessSurface) {
    init_tracing();
    let surface = HeadlessSurface::new();
    let probe = surface.clone();
    let control = ExpandoBox::with_options(Box::new(surface), options).expect("valid options");
    (control, probe)
}

/// Assert the engine's structural invariants, and that the surface shows
/// exactly what the engine believes it shows.
pub fn assert_invariants(control: &ExpandoBox, probe: &HeadlessSurface) {
    let defaults = control.defaults().to_vec();
    let extras = control.extras().to_vec();
    let history = control.history_labels();
    let labels = control.projection_labels();
    let expander = control.expander().to_owned();

    assert_eq!(probe.labels(), labels, "surface mirror out of sync");

    // Expander present exactly once, right after the defaults, iff both
    // lists are non-empty.
    let expander_rows = labels.iter().filter(|label| **label == expander).count();
    if !defaults.is_empty() && !extras.is_empty() {
        assert_eq!(expander_rows, 1, "expander missing or repeated");
        assert_eq!(
            labels[defaults.len()],
            expander,
            "expander not directly after the last default"
        );
    } else {
        assert_eq!(expander_rows, 0, "dangling expander");
    }

    // History stays within its capacity.
    assert!(
        history.len() <= control.history_capacity(),
        "history over capacity"
    );

    // The projection decomposes per the expansion state.
    if !defaults.is_empty() && !extras.is_empty() {
        assert_eq!(&labels[..defaults.len()], &defaults[..]);
        let tail = &labels[defaults.len() + 1..];
        if control.is_expanded() {
            assert_eq!(tail, &extras[..], "expanded tail is not the extras");
        } else {
            assert_eq!(tail, &history[..], "collapsed tail is not the history");
        }
    } else if defaults.is_empty() {
        assert_eq!(labels, extras, "extras-only projection mismatch");
    } else {
        assert_eq!(labels, defaults, "defaults-only projection mismatch");
    }

    // The expander is not an item and never remembered.
    assert!(!defaults.contains(&expander));
    assert!(!extras.contains(&expander));
    assert!(!history.contains(&expander));

    // The suggestion list is the live concatenation.
    let mut all = defaults.clone();
    all.extend(extras.iter().cloned());
    assert_eq!(control.all_items(), &all[..], "all-items list out of date");

    // Uniqueness, when it was requested at construction.
    if control.is_unique() {
        let mut seen = HashSet::new();
        for label in defaults.iter().chain(extras.iter()) {
            assert!(seen.insert(label.clone()), "duplicate item {label:?} in unique mode");
        }
    }
}
