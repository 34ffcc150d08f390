//! Insertion-ordered, name-deduplicating accumulator for symbol entries.
//!
//! A plain vector holds entries in first-seen order; a separate name index
//! points into it. Re-inserting a known name never moves it, it only unions
//! the category into the existing set.

use crate::catalog::identity::CategoryId;
use crate::catalog::model::SymbolEntry;
use std::collections::BTreeMap;

/// Outcome of [`OrderedSymbolMap::insert`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Insertion {
    /// First time this name was seen; appended at the end.
    New,
    /// Known name, new category added to its set.
    Merged,
    /// Known name already tagged with this category; nothing changed.
    Unchanged,
}

#[derive(Debug, Default)]
pub struct OrderedSymbolMap {
    entries: Vec<SymbolEntry>,
    index: BTreeMap<String, usize>,
}

impl OrderedSymbolMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, category: &CategoryId) -> Insertion {
        if let Some(&position) = self.index.get(name) {
            let entry = &mut self.entries[position];
            if entry.belongs_to(category.as_str()) {
                return Insertion::Unchanged;
            }
            entry.categories.push(category.clone());
            return Insertion::Merged;
        }

        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(SymbolEntry::new(name, vec![category.clone()]));
        Insertion::New
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze into the universe sequence, in first-seen order.
    pub fn into_entries(self) -> Vec<SymbolEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_fixes_position() {
        let comm = CategoryId::from("communication");
        let health = CategoryId::from("health");
        let mut map = OrderedSymbolMap::new();
        assert_eq!(map.insert("message", &comm), Insertion::New);
        assert_eq!(map.insert("heart", &comm), Insertion::New);
        assert_eq!(map.insert("message", &health), Insertion::Merged);
        assert_eq!(map.insert("message", &health), Insertion::Unchanged);

        let entries = map.into_entries();
        let names: Vec<&str> = entries.iter().map(SymbolEntry::name).collect();
        assert_eq!(names, vec!["message", "heart"]);
        assert_eq!(entries[0].categories(), &[comm, health]);
    }

    #[test]
    fn empty_name_is_an_ordinary_key() {
        let cat = CategoryId::from("shapes");
        let mut map = OrderedSymbolMap::new();
        assert_eq!(map.insert("", &cat), Insertion::New);
        assert_eq!(map.insert("", &cat), Insertion::Unchanged);
        assert_eq!(map.get("").map(SymbolEntry::name), Some(""));
        assert_eq!(map.len(), 1);
    }
}
