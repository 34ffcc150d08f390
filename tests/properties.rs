// Property checks over randomly generated documents: dedup, ordering,
// index consistency, determinism, and query semantics.
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use symcat::{
    Catalog, CategoryDescriptor, CategoryId, RawCategorySymbols, RawDocuments, audit_catalog,
    compile, to_artifact_string, visible_symbols,
};

const CATEGORY_COUNT: usize = 5;

fn category(idx: usize) -> String {
    format!("c{idx}")
}

fn registry() -> Vec<CategoryDescriptor> {
    (0..CATEGORY_COUNT)
        .map(|idx| CategoryDescriptor::new(category(idx), format!("Category {idx}"), "circle"))
        .collect()
}

fn documents() -> impl Strategy<Value = RawDocuments> {
    let group = (
        0..CATEGORY_COUNT,
        prop::collection::vec("[a-cA-C.]{0,4}", 0..8),
    );
    prop::collection::vec(group, 0..8).prop_map(|groups| RawDocuments {
        categories: registry(),
        mapping: groups
            .into_iter()
            .map(|(idx, symbols)| RawCategorySymbols {
                category: CategoryId(category(idx)),
                symbols,
            })
            .collect(),
    })
}

// Name -> categories listing it, plus names in first-seen order.
fn expected(raw: &RawDocuments) -> (Vec<String>, BTreeMap<String, BTreeSet<String>>) {
    let mut order = Vec::new();
    let mut claims: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for group in &raw.mapping {
        for name in &group.symbols {
            if !claims.contains_key(name) {
                order.push(name.clone());
            }
            claims
                .entry(name.clone())
                .or_default()
                .insert(group.category.0.clone());
        }
    }
    (order, claims)
}

fn names(catalog: &Catalog) -> Vec<String> {
    catalog
        .all_symbols()
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}

proptest! {
    #[test]
    fn universe_is_deduplicated_in_first_seen_order(raw in documents()) {
        let catalog = compile(&raw).unwrap();
        let (order, claims) = expected(&raw);
        prop_assert_eq!(names(&catalog), order);

        for symbol in catalog.all_symbols() {
            let got: BTreeSet<String> =
                symbol.categories().iter().map(|c| c.0.clone()).collect();
            prop_assert_eq!(got.len(), symbol.categories().len());
            prop_assert_eq!(Some(&got), claims.get(symbol.name()));
        }
    }

    #[test]
    fn index_agrees_with_symbol_sets(raw in documents()) {
        let catalog = compile(&raw).unwrap();
        prop_assert!(audit_catalog(&catalog).is_empty());
        for idx in 0..CATEGORY_COUNT {
            let id = category(idx);
            let indexed: Vec<&str> = catalog.symbols_for(&id).iter().map(|s| s.name()).collect();
            let claimed: Vec<&str> = catalog
                .all_symbols()
                .iter()
                .filter(|s| s.belongs_to(&id))
                .map(|s| s.name())
                .collect();
            prop_assert_eq!(indexed, claimed);
        }
    }

    #[test]
    fn compilation_is_deterministic(raw in documents()) {
        let first = to_artifact_string(&compile(&raw).unwrap()).unwrap();
        let second = to_artifact_string(&compile(&raw.clone()).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn search_keeps_exactly_the_matching_names(
        raw in documents(),
        needle in "[a-cA-C.]{0,2}",
        filters in prop::collection::btree_set(0..CATEGORY_COUNT, 0..3),
    ) {
        let catalog = compile(&raw).unwrap();
        let active: BTreeSet<CategoryId> =
            filters.iter().map(|idx| CategoryId(category(*idx))).collect();
        let visible: Vec<&str> = visible_symbols(&catalog, &active, &[], &needle)
            .into_iter()
            .map(|s| s.name())
            .collect();

        let folded = needle.to_lowercase();
        let expected: Vec<&str> = catalog
            .all_symbols()
            .iter()
            .filter(|s| active.is_empty() || active.iter().any(|c| s.belongs_to(c.as_str())))
            .filter(|s| s.name().to_lowercase().contains(&folded))
            .map(|s| s.name())
            .collect();
        prop_assert_eq!(visible, expected);
    }
}
