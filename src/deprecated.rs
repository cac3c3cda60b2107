//! Deprecation notices for legacy accessors.
//!
//! Each key is reported once per thread through `tracing::warn!`. The grid
//! runs on the single UI thread, so this amounts to once per session.

use std::cell::RefCell;
use std::collections::HashSet;

thread_local! {
    static REPORTED: RefCell<HashSet<&'static str>> = RefCell::new(HashSet::new());
}

/// Report use of a deprecated API. Returns `true` if the notice was emitted
/// now, `false` if this key was already reported.
pub fn deprecated(key: &'static str, message: &str) -> bool {
    let first = REPORTED.with(|reported| reported.borrow_mut().insert(key));
    if first {
        tracing::warn!(deprecated = key, "{message}");
    }
    first
}
