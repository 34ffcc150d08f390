//! Error taxonomy for loading, compiling, and decoding catalogs.
//!
//! Every variant is fatal to the generation step: callers abort instead of
//! emitting a partially valid catalog. Query operations never fail and do not
//! appear here.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// An input document (or artifact) does not match its expected shape.
    #[error("malformed {document}: {detail}")]
    MalformedInput { document: String, detail: String },

    /// A symbol references a category identifier absent from the registry.
    #[error("symbol '{symbol}' references unknown category '{category}'")]
    UnknownCategory { category: String, symbol: String },

    #[error("category '{category}' is declared more than once in the registry")]
    DuplicateCategory { category: String },

    #[error("symbol '{symbol}' appears more than once")]
    DuplicateSymbol { symbol: String },

    #[error("empty symbol name listed under category '{category}'")]
    EmptySymbolName { category: String },

    #[error("unsupported artifact schema_version '{found}'")]
    UnsupportedArtifactVersion { found: String },

    #[error("embedded schema failed to compile: {0}")]
    Schema(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub(crate) fn malformed(document: impl Into<String>, detail: impl Into<String>) -> Self {
        CatalogError::MalformedInput {
            document: document.into(),
            detail: detail.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}
