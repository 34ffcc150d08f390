//! Closed registry of category descriptors.
//!
//! The registry is built once from document A and never grows afterwards.
//! Lookups by identifier are total: unknown identifiers resolve to `None`
//! because they may come from untrusted callers.

use crate::catalog::identity::CategoryId;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Display metadata for one category.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDescriptor {
    pub identifier: CategoryId,
    pub label: String,
    /// Symbol name used as the category's icon.
    pub icon: String,
}

impl CategoryDescriptor {
    pub fn new(
        identifier: impl Into<CategoryId>,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }
}

impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Ordered category descriptors plus a position index keyed by identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    descriptors: Vec<CategoryDescriptor>,
    positions: BTreeMap<CategoryId, usize>,
}

impl CategoryRegistry {
    /// Build a registry, rejecting duplicate identifiers.
    pub fn new(descriptors: Vec<CategoryDescriptor>) -> Result<Self> {
        let mut positions = BTreeMap::new();
        for (position, descriptor) in descriptors.iter().enumerate() {
            if positions
                .insert(descriptor.identifier.clone(), position)
                .is_some()
            {
                return Err(CatalogError::DuplicateCategory {
                    category: descriptor.identifier.0.clone(),
                });
            }
        }
        Ok(Self {
            descriptors,
            positions,
        })
    }

    /// Descriptors in registry (document) order.
    pub fn descriptors(&self) -> &[CategoryDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, identifier: &str) -> Option<&CategoryDescriptor> {
        self.position(identifier).map(|idx| &self.descriptors[idx])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.positions.contains_key(identifier)
    }

    /// Registry position of `identifier`, used to address the category index.
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.positions.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
