//! Catalog compiler.
//!
//! Folds the mapping document into a name-deduplicated universe (first-seen
//! order), then hands the frozen universe to [`Catalog::assemble`], which
//! derives the category index in registry order and rejects symbols that
//! reference unregistered categories. The pass is pure: identical documents
//! always yield identical catalogs.

use crate::catalog::{Catalog, CategoryRegistry, Insertion, OrderedSymbolMap};
use crate::error::{CatalogError, Result};
use crate::loader::RawDocuments;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Knobs for [`compile_with`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CompileOptions {
    /// Reject empty symbol names instead of accepting them as ordinary keys.
    pub strict: bool,
}

/// Compile with default (permissive) options.
pub fn compile(raw: &RawDocuments) -> Result<Catalog> {
    compile_with(raw, CompileOptions::default())
}

pub fn compile_with(raw: &RawDocuments, options: CompileOptions) -> Result<Catalog> {
    let registry = CategoryRegistry::new(raw.categories.clone())?;
    let mut universe = OrderedSymbolMap::new();
    let mut mapped: BTreeSet<&str> = BTreeSet::new();

    for group in &raw.mapping {
        if !mapped.insert(group.category.as_str()) {
            warn!(category = %group.category, "category listed more than once in mapping; merging groups");
        }
        if group.symbols.is_empty() && !registry.contains(group.category.as_str()) {
            // Nothing references it, so it cannot fail validation below.
            warn!(category = %group.category, "mapping lists an unknown category with no symbols");
        }

        for name in &group.symbols {
            if name.is_empty() {
                if options.strict {
                    return Err(CatalogError::EmptySymbolName {
                        category: group.category.0.clone(),
                    });
                }
                warn!(category = %group.category, "empty symbol name accepted");
            }

            if universe.insert(name, &group.category) == Insertion::Unchanged {
                debug!(symbol = %name, category = %group.category, "repeated symbol ignored");
            }
        }
    }

    let catalog = Catalog::assemble(registry, universe.into_entries())?;
    debug!(
        symbols = catalog.len(),
        categories = catalog.categories().len(),
        "compiled catalog"
    );
    Ok(catalog)
}

/// Parse and compile two documents held in memory.
pub fn compile_documents(categories: &str, mapping: &str) -> Result<Catalog> {
    compile(&RawDocuments::parse(categories, mapping)?)
}
