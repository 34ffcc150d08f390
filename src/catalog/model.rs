//! Compiled catalog: the symbol universe plus the derived category index.
//!
//! A `Catalog` can only be produced through [`Catalog::assemble`], which every
//! construction path (compiler, artifact decoder, static tables) funnels
//! through, so the invariants below hold for any value callers can observe:
//!
//! - symbol names are unique;
//! - every category a symbol claims is registered;
//! - `index[c]` lists exactly the symbols whose set contains `c`, in universe
//!   order.

use crate::catalog::identity::CategoryId;
use crate::catalog::registry::{CategoryDescriptor, CategoryRegistry};
use crate::error::{CatalogError, Result};
use crate::query;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

/// A named symbol and the categories that reference it.
///
/// Identity is the name alone: two entries with the same name compare equal
/// regardless of their category sets.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolEntry {
    name: String,
    pub(crate) categories: Vec<CategoryId>,
}

impl SymbolEntry {
    pub fn new(name: impl Into<String>, categories: Vec<CategoryId>) -> Self {
        Self {
            name: name.into(),
            categories,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Categories in the order they were first attached.
    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn belongs_to(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.as_str() == category)
    }
}

impl PartialEq for SymbolEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SymbolEntry {}

impl Hash for SymbolEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Immutable, validated symbol catalog.
#[derive(Clone, Debug)]
pub struct Catalog {
    registry: CategoryRegistry,
    symbols: Vec<SymbolEntry>,
    by_name: BTreeMap<String, usize>,
    // One list of universe positions per registry entry, in registry order.
    by_category: Vec<Vec<usize>>,
}

impl Catalog {
    /// Validate a frozen universe against `registry` and derive the indexes.
    pub(crate) fn assemble(registry: CategoryRegistry, symbols: Vec<SymbolEntry>) -> Result<Self> {
        let mut by_name = BTreeMap::new();
        let mut by_category = vec![Vec::new(); registry.len()];

        for (position, symbol) in symbols.iter().enumerate() {
            if by_name.insert(symbol.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSymbol {
                    symbol: symbol.name.clone(),
                });
            }

            let mut seen = BTreeSet::new();
            for category in &symbol.categories {
                let Some(slot) = registry.position(category.as_str()) else {
                    return Err(CatalogError::UnknownCategory {
                        category: category.0.clone(),
                        symbol: symbol.name.clone(),
                    });
                };
                if !seen.insert(slot) {
                    return Err(CatalogError::malformed(
                        "catalog",
                        format!(
                            "symbol '{}' lists category '{}' more than once",
                            symbol.name, category
                        ),
                    ));
                }
                by_category[slot].push(position);
            }
        }

        Ok(Self {
            registry,
            symbols,
            by_name,
            by_category,
        })
    }

    /// The full universe in first-seen order.
    pub fn all_symbols(&self) -> &[SymbolEntry] {
        &self.symbols
    }

    /// Symbols tagged with `category`, in universe order.
    ///
    /// Unknown identifiers yield an empty list.
    pub fn symbols_for(&self, category: &str) -> Vec<&SymbolEntry> {
        self.category_members(category)
            .iter()
            .map(|&idx| &self.symbols[idx])
            .collect()
    }

    pub fn symbol(&self, name: &str) -> Option<&SymbolEntry> {
        self.by_name.get(name).map(|&idx| &self.symbols[idx])
    }

    pub fn category_descriptor(&self, identifier: &str) -> Option<&CategoryDescriptor> {
        self.registry.get(identifier)
    }

    /// Registry descriptors in registry order.
    pub fn categories(&self) -> &[CategoryDescriptor] {
        self.registry.descriptors()
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// See [`query::visible_symbols`].
    pub fn visible_symbols(
        &self,
        active: &BTreeSet<CategoryId>,
        scope: &[CategoryId],
        search: &str,
    ) -> Vec<&SymbolEntry> {
        query::visible_symbols(self, active, scope, search)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Universe positions of the members of `category`.
    pub(crate) fn category_members(&self, category: &str) -> &[usize] {
        match self.registry.position(category) {
            Some(slot) => &self.by_category[slot],
            None => &[],
        }
    }
}
