// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in catalog of named spinners.
//!
//! Definitions are embedded as JSON and parsed on first use.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::{Result, SpinnerError};
use crate::frames::{Definition, SpinnerDefinition};

/// Name of the catalog entry matching [`Definition::default`].
pub const DEFAULT_NAME: &str = "dots";

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    interval: u64,
    frames: Vec<String>,
}

static CATALOG: LazyLock<BTreeMap<String, Definition>> = LazyLock::new(|| {
    // The embedded JSON is a compile-time constant covered by tests.
    #[allow(clippy::expect_used)]
    let entries: BTreeMap<String, CatalogEntry> =
        serde_json::from_str(include_str!("spinners.json")).expect("embedded spinners.json is invalid");

    let catalog: BTreeMap<String, Definition> = entries
        .into_iter()
        .filter_map(|(name, entry)| {
            match SpinnerDefinition::new(entry.frames, entry.interval) {
                Ok(SpinnerDefinition::Valid(definition)) => Some((name, definition)),
                _ => None,
            }
        })
        .collect();
    tracing::debug!(count = catalog.len(), "loaded spinner catalog");
    catalog
});

/// Look up a named spinner.
pub fn get(name: &str) -> Result<Definition> {
    CATALOG
        .get(name)
        .cloned()
        .ok_or_else(|| SpinnerError::UnknownSpinner(name.to_string()))
}

/// All catalog names, sorted.
pub fn names() -> Vec<&'static str> {
    CATALOG.keys().map(String::as_str).collect()
}

/// Iterate over every entry in name order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static Definition)> {
    CATALOG.iter().map(|(name, definition)| (name.as_str(), definition))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
