//! Symbol catalog types.
//!
//! `CategoryRegistry` holds the closed set of categories, `OrderedSymbolMap`
//! accumulates symbols during compilation, and `Catalog` is the frozen,
//! validated result that queries run against.

pub mod identity;
pub mod model;
pub mod ordered;
pub mod registry;

pub use identity::CategoryId;
pub use model::{Catalog, SymbolEntry};
pub use ordered::{Insertion, OrderedSymbolMap};
pub use registry::{CategoryDescriptor, CategoryRegistry};
