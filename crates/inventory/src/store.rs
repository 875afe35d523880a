use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::product::Product;

/// In-memory product store.
///
/// Owns an insertion-ordered sequence of records. Every query is a linear
/// scan; results that list products are sorted ascending by name, ignoring
/// case. Absent matches yield empty results, never errors.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Appends a record. No dedup: identical records are distinct entries.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the first entry equal to `product`. Returns `false` when no
    /// entry matches (the store is unchanged).
    pub fn remove(&mut self, product: &Product) -> bool {
        match self.products.iter().position(|p| p == product) {
            Some(idx) => {
                self.products.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All entries in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Total inventory value: Σ price × stock, accumulated in the wide type.
    pub fn total_value(&self) -> u64 {
        self.products
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.value()))
    }

    /// All products whose category matches `category`, ignoring case,
    /// sorted by name.
    pub fn products_in_category(&self, category: &str) -> Vec<Product> {
        self.collect_sorted(|p| eq_ignore_case(p.category(), category))
    }

    /// All products whose name matches `name`, ignoring case, sorted by name.
    pub fn search_by_name(&self, name: &str) -> Vec<Product> {
        self.collect_sorted(|p| eq_ignore_case(p.name(), name))
    }

    /// Entry count per category, keys in ascending lexicographic order.
    ///
    /// Keys are the category strings as stored: categories differing only
    /// in case count separately.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for p in &self.products {
            *counts.entry(p.category().to_owned()).or_insert(0) += 1;
        }
        counts
    }

    /// Full grouped listing: category → products sorted by name, keys in
    /// ascending lexicographic order.
    pub fn grouped_by_category(&self) -> BTreeMap<String, Vec<Product>> {
        let mut groups: BTreeMap<String, Vec<Product>> = BTreeMap::new();
        for p in &self.products {
            groups
                .entry(p.category().to_owned())
                .or_default()
                .push(p.clone());
        }
        for group in groups.values_mut() {
            sort_by_name(group);
        }
        groups
    }

    fn collect_sorted(&self, matches: impl Fn(&Product) -> bool) -> Vec<Product> {
        let mut hits: Vec<Product> = self
            .products
            .iter()
            .filter(|p| matches(p))
            .cloned()
            .collect();
        sort_by_name(&mut hits);
        hits
    }
}

/// Stable sort by name, ignoring case: names equal under the fold keep
/// insertion order.
fn sort_by_name(products: &mut [Product]) {
    products.sort_by(|a, b| cmp_ignore_case(a.name(), b.name()));
}

/// Per-char case-insensitive ordering. Matching and sorting share this
/// helper so they always agree on which names are "the same".
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    cmp_ignore_case(a, b) == Ordering::Equal
}
