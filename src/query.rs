//! Query engine over a compiled catalog.
//!
//! Queries are total and side-effect free: unknown identifiers select
//! nothing, empty inputs widen to the whole universe, and results always come
//! back in universe order.

use crate::catalog::{Catalog, CategoryId, SymbolEntry};
use std::collections::BTreeSet;

/// Symbols visible for the given filters and search text.
///
/// Pool selection:
/// - `active` non-empty: union of the active categories (`scope` ignored);
/// - `active` empty, `scope` non-empty: union of the scoped categories;
/// - both empty: the whole universe.
///
/// A non-empty `search` then keeps symbols whose lowercased name contains the
/// lowercased search text anywhere.
pub fn visible_symbols<'a>(
    catalog: &'a Catalog,
    active: &BTreeSet<CategoryId>,
    scope: &[CategoryId],
    search: &str,
) -> Vec<&'a SymbolEntry> {
    let pool = if !active.is_empty() {
        Some(pool_mask(catalog, active.iter()))
    } else if !scope.is_empty() {
        Some(pool_mask(catalog, scope.iter()))
    } else {
        None
    };

    let needle = search.to_lowercase();
    catalog
        .all_symbols()
        .iter()
        .enumerate()
        .filter(|(idx, _)| pool.as_ref().is_none_or(|mask| mask[*idx]))
        .filter(|(_, symbol)| needle.is_empty() || matches_search(symbol.name(), &needle))
        .map(|(_, symbol)| symbol)
        .collect()
}

/// Case-insensitive substring match; `needle` must already be lowercased.
fn matches_search(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

// Universe-position membership for the union of `categories`.
fn pool_mask<'c>(
    catalog: &Catalog,
    categories: impl Iterator<Item = &'c CategoryId>,
) -> Vec<bool> {
    let mut mask = vec![false; catalog.len()];
    for category in categories {
        for &idx in catalog.category_members(category.as_str()) {
            mask[idx] = true;
        }
    }
    mask
}

/// Caller-owned picker state: configured scope, toggled filters, search text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterState {
    scope: Vec<CategoryId>,
    active: BTreeSet<CategoryId>,
    search: String,
}

impl FilterState {
    /// Start with no active filters; an empty `scope` means every category.
    pub fn new(scope: Vec<CategoryId>) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    pub fn scope(&self) -> &[CategoryId] {
        &self.scope
    }

    pub fn active(&self) -> &BTreeSet<CategoryId> {
        &self.active
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Activate `category` if inactive, deactivate it otherwise.
    ///
    /// Returns whether the category is active afterwards.
    pub fn toggle(&mut self, category: CategoryId) -> bool {
        if self.active.remove(&category) {
            false
        } else {
            self.active.insert(category);
            true
        }
    }

    pub fn is_active(&self, category: &CategoryId) -> bool {
        self.active.contains(category)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn clear_filters(&mut self) {
        self.active.clear();
    }

    /// Category toggles are only meaningful with more than one scoped category.
    pub fn shows_filter_bar(&self) -> bool {
        self.scope.len() > 1
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a SymbolEntry> {
        visible_symbols(catalog, &self.active, &self.scope, &self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_documents;

    fn catalog() -> Catalog {
        compile_documents(
            r#"[
                {"identifier": "a", "label": "A", "icon": "a.circle"},
                {"identifier": "b", "label": "B", "icon": "b.circle"},
                {"identifier": "c", "label": "C", "icon": "c.circle"}
            ]"#,
            r#"{"a": ["x", "y"], "b": ["y", "z"], "c": ["Arrow.Up"]}"#,
        )
        .unwrap()
    }

    fn names(symbols: Vec<&SymbolEntry>) -> Vec<&str> {
        symbols.into_iter().map(SymbolEntry::name).collect()
    }

    fn ids(raw: &[&str]) -> Vec<CategoryId> {
        raw.iter().map(|s| CategoryId::from(*s)).collect()
    }

    #[test]
    fn union_of_active_categories_counts_shared_symbols_once() {
        let catalog = catalog();
        let active: BTreeSet<_> = ids(&["b", "a"]).into_iter().collect();
        assert_eq!(names(visible_symbols(&catalog, &active, &[], "")), vec!["x", "y", "z"]);
    }

    #[test]
    fn active_filters_override_scope() {
        let catalog = catalog();
        let active: BTreeSet<_> = ids(&["c"]).into_iter().collect();
        let visible = visible_symbols(&catalog, &active, &ids(&["a"]), "");
        assert_eq!(names(visible), vec!["Arrow.Up"]);
    }

    #[test]
    fn scope_limits_pool_when_nothing_active() {
        let catalog = catalog();
        let visible = visible_symbols(&catalog, &BTreeSet::new(), &ids(&["b"]), "");
        assert_eq!(names(visible), vec!["y", "z"]);
    }

    #[test]
    fn unknown_identifiers_select_nothing() {
        let catalog = catalog();
        let active: BTreeSet<_> = ids(&["nope"]).into_iter().collect();
        assert!(visible_symbols(&catalog, &active, &[], "").is_empty());
        assert!(visible_symbols(&catalog, &BTreeSet::new(), &ids(&["nope"]), "").is_empty());
    }

    #[test]
    fn search_folds_case_on_both_sides() {
        let catalog = catalog();
        let visible = visible_symbols(&catalog, &BTreeSet::new(), &[], "ROW.u");
        assert_eq!(names(visible), vec!["Arrow.Up"]);
        assert!(visible_symbols(&catalog, &BTreeSet::new(), &[], "missing").is_empty());
    }

    #[test]
    fn filter_state_toggles_and_delegates() {
        let catalog = catalog();
        let mut state = FilterState::new(ids(&["a", "b"]));
        assert!(state.shows_filter_bar());
        assert_eq!(names(state.visible(&catalog)), vec!["x", "y", "z"]);

        assert!(state.toggle(CategoryId::from("a")));
        assert!(state.is_active(&CategoryId::from("a")));
        assert_eq!(names(state.visible(&catalog)), vec!["x", "y"]);

        state.set_search("Y");
        assert_eq!(names(state.visible(&catalog)), vec!["y"]);

        assert!(!state.toggle(CategoryId::from("a")));
        state.clear_search();
        assert_eq!(names(state.visible(&catalog)), vec!["x", "y", "z"]);

        assert!(!FilterState::new(ids(&["a"])).shows_filter_bar());
    }
}
