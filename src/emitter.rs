//! Catalog emitter and artifact decoder.
//!
//! The JSON artifact stores the registry and the symbol universe in their
//! canonical order; the category index is re-derived on decode, which runs
//! the same validation as compilation. Writes go through a temporary file in
//! the destination directory so a failed run never leaves a partial artifact.

use crate::catalog::{Catalog, CategoryDescriptor, CategoryId, CategoryRegistry, SymbolEntry};
use crate::error::{CatalogError, Result};
use crate::schema_loader::{DocumentKind, parse_and_validate};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

pub const ARTIFACT_SCHEMA_VERSION: &str = "symcat_catalog_v1";

/// Output encodings for [`emit`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EmitFormat {
    /// JSON artifact readable by [`from_artifact_str`].
    #[default]
    Json,
    /// Rust source with `CATEGORIES`/`SYMBOLS` tables for
    /// [`Catalog::from_static_tables`].
    RustSource,
}

#[derive(Serialize)]
struct ArtifactRef<'a> {
    schema_version: &'a str,
    categories: &'a [CategoryDescriptor],
    symbols: &'a [SymbolEntry],
}

#[derive(Deserialize)]
struct ArtifactDocument {
    schema_version: String,
    categories: Vec<CategoryDescriptor>,
    symbols: Vec<SymbolEntry>,
}

pub fn emit(catalog: &Catalog, format: EmitFormat) -> Result<String> {
    match format {
        EmitFormat::Json => to_artifact_string(catalog),
        EmitFormat::RustSource => Ok(to_rust_source(catalog)),
    }
}

/// Serialize to the pretty-printed JSON artifact (newline-terminated).
pub fn to_artifact_string(catalog: &Catalog) -> Result<String> {
    let artifact = ArtifactRef {
        schema_version: ARTIFACT_SCHEMA_VERSION,
        categories: catalog.categories(),
        symbols: catalog.all_symbols(),
    };
    let mut text = serde_json::to_string_pretty(&artifact)
        .map_err(|err| CatalogError::malformed(DocumentKind::Artifact.label(), err.to_string()))?;
    text.push('\n');
    Ok(text)
}

/// Decode a JSON artifact, re-validating every catalog invariant.
pub fn from_artifact_str(text: &str) -> Result<Catalog> {
    let value = parse_and_validate(DocumentKind::Artifact, text)?;
    let document: ArtifactDocument = serde_json::from_value(value)
        .map_err(|err| CatalogError::malformed(DocumentKind::Artifact.label(), err.to_string()))?;
    if document.schema_version != ARTIFACT_SCHEMA_VERSION {
        return Err(CatalogError::UnsupportedArtifactVersion {
            found: document.schema_version,
        });
    }
    let registry = CategoryRegistry::new(document.categories)?;
    Catalog::assemble(registry, document.symbols)
}

pub fn read_artifact(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path).map_err(|err| CatalogError::io(path, err))?;
    from_artifact_str(&text)
}

/// Emit `catalog` to `path`, replacing any existing file only on success.
pub fn write_artifact(catalog: &Catalog, path: &Path, format: EmitFormat) -> Result<()> {
    let contents = emit(catalog, format)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|err| CatalogError::io(dir, err))?;
    staged
        .write_all(contents.as_bytes())
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|err| CatalogError::io(staged.path(), err))?;
    staged
        .persist(path)
        .map_err(|err| CatalogError::io(path, err.error))?;

    debug!(path = %path.display(), bytes = contents.len(), ?format, "wrote catalog artifact");
    Ok(())
}

/// Render the catalog as Rust source holding two static tables.
pub fn to_rust_source(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("// @generated by symcat. Do not edit.\n");
    let _ = writeln!(out, "// schema_version: {ARTIFACT_SCHEMA_VERSION}");
    out.push('\n');

    out.push_str("pub static CATEGORIES: &[(&str, &str, &str)] = &[\n");
    for descriptor in catalog.categories() {
        let _ = writeln!(
            out,
            "    ({:?}, {:?}, {:?}),",
            descriptor.identifier.as_str(),
            descriptor.label,
            descriptor.icon
        );
    }
    out.push_str("];\n\n");

    out.push_str("pub static SYMBOLS: &[(&str, &[&str])] = &[\n");
    for symbol in catalog.all_symbols() {
        let categories = symbol
            .categories()
            .iter()
            .map(|c| format!("{:?}", c.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "    ({:?}, &[{categories}]),", symbol.name());
    }
    out.push_str("];\n");
    out
}

impl Catalog {
    /// Load the tables produced by [`EmitFormat::RustSource`].
    pub fn from_static_tables(
        categories: &[(&str, &str, &str)],
        symbols: &[(&str, &[&str])],
    ) -> Result<Catalog> {
        let registry = CategoryRegistry::new(
            categories
                .iter()
                .map(|(id, label, icon)| CategoryDescriptor::new(*id, *label, *icon))
                .collect(),
        )?;
        let symbols = symbols
            .iter()
            .map(|(name, cats)| {
                SymbolEntry::new(*name, cats.iter().map(|c| CategoryId::from(*c)).collect())
            })
            .collect();
        Catalog::assemble(registry, symbols)
    }
}
