//! Raw mapping loader.
//!
//! Parses the category registry (document A) and the category → symbol-name
//! mapping (document B) into ordered intermediate sequences. The loader only
//! checks structure; deduplication and cross-document validation belong to
//! the compiler.

use crate::catalog::{CategoryDescriptor, CategoryId};
use crate::error::{CatalogError, Result};
use crate::schema_loader::{DocumentKind, parse_and_validate};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Symbol names listed under one category, in document order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawCategorySymbols {
    pub category: CategoryId,
    pub symbols: Vec<String>,
}

/// Both input documents after structural parsing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawDocuments {
    pub categories: Vec<CategoryDescriptor>,
    pub mapping: Vec<RawCategorySymbols>,
}

impl RawDocuments {
    /// Parse both documents from in-memory text.
    pub fn parse(categories: &str, mapping: &str) -> Result<Self> {
        Ok(Self {
            categories: parse_categories(categories)?,
            mapping: parse_mapping(mapping)?,
        })
    }

    /// Read and parse both documents from disk.
    pub fn load(categories_path: &Path, mapping_path: &Path) -> Result<Self> {
        let categories = read_document(categories_path)?;
        let mapping = read_document(mapping_path)?;
        let raw = Self::parse(&categories, &mapping)?;
        debug!(
            categories = raw.categories.len(),
            mapped_categories = raw.mapping.len(),
            "loaded input documents"
        );
        Ok(raw)
    }
}

/// Parse document A: an ordered array of `{identifier, label, icon}` records.
pub fn parse_categories(text: &str) -> Result<Vec<CategoryDescriptor>> {
    let value = parse_and_validate(DocumentKind::Categories, text)?;
    serde_json::from_value(value)
        .map_err(|err| CatalogError::malformed(DocumentKind::Categories.label(), err.to_string()))
}

/// Parse document B: an object from category identifier to symbol names.
///
/// Key order is significant; it fixes the first-seen order of symbols. A
/// category key that appears more than once yields one group per occurrence,
/// in document order, so nothing listed under an earlier occurrence is lost.
pub fn parse_mapping(text: &str) -> Result<Vec<RawCategorySymbols>> {
    // Shape check first; the typed pass below re-reads the text because a
    // `Value` object keeps only the last of any repeated keys.
    parse_and_validate(DocumentKind::SymbolMapping, text)?;
    let MappingGroups(groups) = serde_json::from_str(text)
        .map_err(|err| CatalogError::malformed(DocumentKind::SymbolMapping.label(), err.to_string()))?;
    Ok(groups)
}

struct MappingGroups(Vec<RawCategorySymbols>);

impl<'de> Deserialize<'de> for MappingGroups {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MappingGroupsVisitor)
    }
}

struct MappingGroupsVisitor;

impl<'de> Visitor<'de> for MappingGroupsVisitor {
    type Value = MappingGroups;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object from category identifier to a list of symbol names")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((category, symbols)) = map.next_entry::<String, Vec<String>>()? {
            groups.push(RawCategorySymbols {
                category: CategoryId(category),
                symbols,
            });
        }
        Ok(MappingGroups(groups))
    }
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| CatalogError::io(PathBuf::from(path), err))
}
