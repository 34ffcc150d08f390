//! Symbol catalog compiler and query engine.
//!
//! The pipeline has two phases. At build time, [`loader`] parses the category
//! registry and the category → symbol mapping, [`compiler`] folds them into a
//! deduplicated, deterministically ordered [`Catalog`], and [`emitter`] writes
//! it out as an artifact. At runtime the artifact is decoded once and
//! [`query`] answers filter/search requests against the read-only catalog.
//!
//! The reference documents under `data/` are embedded in the library;
//! [`bundled`] compiles them on first use.

use std::sync::OnceLock;

pub mod catalog;
pub mod compiler;
pub mod emitter;
pub mod error;
pub mod loader;
pub mod metadata_validation;
pub mod query;
mod schema_loader;

pub use catalog::{Catalog, CategoryDescriptor, CategoryId, CategoryRegistry, SymbolEntry};
pub use compiler::{CompileOptions, compile, compile_documents, compile_with};
pub use emitter::{
    ARTIFACT_SCHEMA_VERSION, EmitFormat, emit, from_artifact_str, read_artifact,
    to_artifact_string, to_rust_source, write_artifact,
};
pub use error::{CatalogError, Result};
pub use loader::{RawCategorySymbols, RawDocuments, parse_categories, parse_mapping};
pub use metadata_validation::{audit_catalog, lint_documents};
pub use query::{FilterState, visible_symbols};

/// Reference category registry (document A).
pub const REFERENCE_CATEGORIES: &str = include_str!("../data/categories.json");
/// Reference category → symbol mapping (document B).
pub const REFERENCE_MAPPING: &str = include_str!("../data/symbol_categories.json");

static BUNDLED: OnceLock<Catalog> = OnceLock::new();

/// The catalog compiled from the embedded reference documents.
///
/// Compiled once per process; later calls return the cached catalog.
pub fn bundled() -> Result<&'static Catalog> {
    if let Some(catalog) = BUNDLED.get() {
        return Ok(catalog);
    }
    let catalog = compile_documents(REFERENCE_CATEGORIES, REFERENCE_MAPPING)?;
    Ok(BUNDLED.get_or_init(|| catalog))
}
