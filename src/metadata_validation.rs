//! Validation helpers for cross-checking input documents and compiled catalogs.
//!
//! Unlike the compiler, which stops at the first fatal error, these helpers
//! collect every problem so `symcat check` can report a whole document at
//! once. `audit_catalog` re-checks the catalog invariants from the outside
//! and is used by tests and the CLI after decoding an artifact.

use crate::catalog::{Catalog, CategoryId};
use crate::loader::RawDocuments;
use std::collections::{BTreeMap, BTreeSet};

pub fn lint_documents(raw: &RawDocuments) -> Vec<String> {
    // Collect rather than short-circuit so callers see every issue.
    let mut errors = Vec::new();

    let mut registered: BTreeSet<&str> = BTreeSet::new();
    for descriptor in &raw.categories {
        let id = descriptor.identifier.as_str();
        if !registered.insert(id) {
            errors.push(format!("category '{id}' is declared more than once"));
        }
        if descriptor.label.trim().is_empty() {
            errors.push(format!("category '{id}' has an empty label"));
        }
        if descriptor.icon.trim().is_empty() {
            errors.push(format!("category '{id}' has an empty icon"));
        }
    }

    let mut reported_unknown: BTreeSet<&CategoryId> = BTreeSet::new();
    let mut mapped: BTreeMap<&str, usize> = BTreeMap::new();
    for group in &raw.mapping {
        let id = group.category.as_str();
        let occurrences = mapped.entry(id).or_insert(0);
        *occurrences += 1;
        if *occurrences == 2 {
            errors.push(format!("category '{id}' is listed more than once in the mapping"));
        }
        if !registered.contains(id) {
            if let Some(first) = group.symbols.first() {
                if reported_unknown.insert(&group.category) {
                    errors.push(format!(
                        "symbol '{first}' references unknown category '{id}'"
                    ));
                }
            }
        }

        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for name in &group.symbols {
            if name.is_empty() {
                errors.push(format!("category '{id}' lists an empty symbol name"));
                continue;
            }
            let count = seen.entry(name.as_str()).or_insert(0);
            *count += 1;
            // Report once per name, on its second occurrence.
            if *count == 2 {
                errors.push(format!("category '{id}' lists symbol '{name}' more than once"));
            }
        }
    }

    errors
}

pub fn audit_catalog(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    let mut names = BTreeSet::new();
    for symbol in catalog.all_symbols() {
        if !names.insert(symbol.name()) {
            errors.push(format!("symbol '{}' appears more than once", symbol.name()));
        }
        for category in symbol.categories() {
            if catalog.category_descriptor(category.as_str()).is_none() {
                errors.push(format!(
                    "symbol '{}' references unknown category '{}'",
                    symbol.name(),
                    category
                ));
            } else if !catalog
                .symbols_for(category.as_str())
                .iter()
                .any(|member| member.name() == symbol.name())
            {
                errors.push(format!(
                    "symbol '{}' claims category '{}' but is missing from its index",
                    symbol.name(),
                    category
                ));
            }
        }
    }

    for descriptor in catalog.categories() {
        let id = descriptor.identifier.as_str();
        for member in catalog.symbols_for(id) {
            if !member.belongs_to(id) {
                errors.push(format!(
                    "category '{id}' indexes symbol '{}' which does not claim it",
                    member.name()
                ));
            }
        }
    }

    errors
}
