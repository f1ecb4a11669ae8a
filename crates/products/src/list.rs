use std::collections::BTreeMap;

use pantry_core::Entity;

use crate::product::Product;

/// Named collection of products, unique by product name.
///
/// Products are kept in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductList {
    products: BTreeMap<String, Product>,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product, merging into an existing entry with the same name.
    ///
    /// On merge every incoming purchase is re-added to the existing product in
    /// order, after its current history. The existing product's scalar price
    /// and weight are kept.
    pub fn add_product(&mut self, product: Product) {
        match self.products.get_mut(product.id()) {
            Some(existing) => {
                for purchase in product.purchases() {
                    existing.add_purchase(purchase.timestamp(), purchase.price(), purchase.weight());
                }
                tracing::debug!(
                    product = existing.name(),
                    merged = product.purchase_count(),
                    total = existing.purchase_count(),
                    "merged purchase history"
                );
            }
            None => {
                tracing::debug!(product = product.name(), "inserted product");
                self.products.insert(product.id().to_owned(), product);
            }
        }
    }

    /// Remove a product by name. Absent names are a no-op.
    pub fn remove_product(&mut self, name: &str) -> Option<Product> {
        let removed = self.products.remove(name);
        if removed.is_some() {
            tracing::debug!(product = name, "removed product");
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    /// Products in name order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
