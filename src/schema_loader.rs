//! Embedded JSON Schemas for the input documents and the compiled artifact.
//!
//! Shape checks run before any typed decoding so a malformed document is
//! reported with every violation at once instead of the first serde error.
//! Schemas ship inside the binary; nothing is resolved from disk at runtime.

use crate::error::{CatalogError, Result};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::OnceLock;

static CATEGORIES_SCHEMA: OnceLock<JSONSchema> = OnceLock::new();
static MAPPING_SCHEMA: OnceLock<JSONSchema> = OnceLock::new();
static ARTIFACT_SCHEMA: OnceLock<JSONSchema> = OnceLock::new();

/// Which embedded schema a document is checked against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DocumentKind {
    Categories,
    SymbolMapping,
    Artifact,
}

impl DocumentKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            DocumentKind::Categories => "category registry",
            DocumentKind::SymbolMapping => "symbol mapping",
            DocumentKind::Artifact => "catalog artifact",
        }
    }

    fn schema_source(self) -> &'static str {
        match self {
            DocumentKind::Categories => include_str!("../schema/categories.schema.json"),
            DocumentKind::SymbolMapping => include_str!("../schema/symbol_categories.schema.json"),
            DocumentKind::Artifact => include_str!("../schema/catalog_artifact.schema.json"),
        }
    }

    fn schema_cell(self) -> &'static OnceLock<JSONSchema> {
        match self {
            DocumentKind::Categories => &CATEGORIES_SCHEMA,
            DocumentKind::SymbolMapping => &MAPPING_SCHEMA,
            DocumentKind::Artifact => &ARTIFACT_SCHEMA,
        }
    }
}

/// The compiled validator for `kind`, built on first use.
fn compiled_schema(kind: DocumentKind) -> Result<&'static JSONSchema> {
    let cell = kind.schema_cell();
    if let Some(compiled) = cell.get() {
        return Ok(compiled);
    }
    let schema: Value = serde_json::from_str(kind.schema_source())
        .map_err(|err| CatalogError::Schema(format!("{}: {err}", kind.label())))?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| CatalogError::Schema(format!("{}: {err}", kind.label())))?;
    Ok(cell.get_or_init(|| compiled))
}

/// Parse `text` as JSON and validate it against the schema for `kind`.
///
/// Returns the parsed value so callers can decode it without re-parsing.
pub(crate) fn parse_and_validate(kind: DocumentKind, text: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| CatalogError::malformed(kind.label(), format!("invalid JSON: {err}")))?;
    validate(kind, &value)?;
    Ok(value)
}

pub(crate) fn validate(kind: DocumentKind, value: &Value) -> Result<()> {
    let compiled = compiled_schema(kind)?;
    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| format!("{} at '{}'", err, err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(CatalogError::malformed(
            kind.label(),
            format!("failed schema validation:\n{details}"),
        ));
    }
    Ok(())
}
