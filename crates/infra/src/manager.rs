//! Top-level store of named product lists.

use std::collections::BTreeMap;
use std::path::PathBuf;

use pantry_core::{LookupError, LookupResult};
use pantry_products::{Product, ProductList};

use crate::error::StoreResult;
use crate::snapshot::{FileSnapshotStore, InMemorySnapshotStore, Snapshot, SnapshotStore};

/// Named product lists plus whole-store persistence.
///
/// The manager is loaded from its store once, at construction. After that all
/// mutations are in memory until [`ProductManager::save`] is called; nothing is
/// written implicitly.
pub struct ProductManager {
    lists: BTreeMap<String, ProductList>,
    store: Box<dyn SnapshotStore>,
}

impl ProductManager {
    /// Open a manager over `store`, loading any existing snapshot.
    ///
    /// A store with no snapshot yields an empty manager. A snapshot that cannot
    /// be decoded is reported as [`crate::StoreError::Corrupt`].
    pub fn open(store: impl SnapshotStore + 'static) -> StoreResult<Self> {
        let mut manager = Self {
            lists: BTreeMap::new(),
            store: Box::new(store),
        };
        manager.load()?;
        Ok(manager)
    }

    /// Open a manager backed by a JSON snapshot file.
    pub fn open_file(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open(FileSnapshotStore::new(path))
    }

    /// Empty manager over a private in-memory store.
    pub fn in_memory() -> Self {
        Self {
            lists: BTreeMap::new(),
            store: Box::new(InMemorySnapshotStore::new()),
        }
    }

    fn load(&mut self) -> StoreResult<()> {
        let location = self.store.location();
        match self.store.load()? {
            Some(snapshot) => {
                self.lists = snapshot.restore(&location)?;
                tracing::info!(%location, lists = self.lists.len(), "loaded snapshot");
            }
            None => {
                self.lists.clear();
                tracing::info!(%location, "starting with an empty store");
            }
        }
        Ok(())
    }

    /// Write the current state to the store, replacing the previous snapshot.
    pub fn save(&self) -> StoreResult<()> {
        let snapshot = Snapshot::capture(&self.lists)?;
        self.store.save(&snapshot).inspect_err(|err| {
            tracing::error!(location = %self.store.location(), error = %err, "failed to save snapshot");
        })?;
        tracing::info!(
            location = %self.store.location(),
            lists = snapshot.list_count(),
            "saved snapshot"
        );
        Ok(())
    }

    /// Route a product into the named list, creating the list if needed.
    pub fn add_product_to_list(&mut self, list_name: &str, product: Product) {
        if !self.lists.contains_key(list_name) {
            tracing::debug!(list = list_name, "created list");
        }
        self.lists
            .entry(list_name.to_owned())
            .or_default()
            .add_product(product);
    }

    /// Remove a product from the named list. Unknown lists and products are a no-op.
    pub fn remove_product_from_list(&mut self, list_name: &str, product_name: &str) -> Option<Product> {
        self.lists.get_mut(list_name)?.remove_product(product_name)
    }

    pub fn list(&self, list_name: &str) -> Option<&ProductList> {
        self.lists.get(list_name)
    }

    /// Look up one product by exact name.
    pub fn find_product(&self, list_name: &str, product_name: &str) -> LookupResult<&Product> {
        let list = self
            .list(list_name)
            .ok_or_else(|| LookupError::list_not_found(list_name))?;
        list.get(product_name)
            .ok_or_else(|| LookupError::product_not_found(list_name, product_name))
    }

    /// List names in order.
    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn lists(&self) -> &BTreeMap<String, ProductList> {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl core::fmt::Debug for ProductManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductManager")
            .field("lists", &self.lists)
            .field("store", &self.store.location())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn milk_at(stamp: &str) -> Product {
        let mut milk = Product::new("Milk", 3.5, 1.0);
        milk.add_purchase(stamp, 3.5, 1.0);
        milk
    }

    fn shared_store() -> Arc<InMemorySnapshotStore> {
        Arc::new(InMemorySnapshotStore::new())
    }

    #[test]
    fn opening_an_empty_store_yields_no_lists() {
        let manager = ProductManager::open(shared_store()).unwrap();
        assert!(manager.is_empty());
    }

    #[test]
    fn add_product_to_list_creates_list_lazily() {
        let mut manager = ProductManager::in_memory();
        assert!(manager.list("Groceries").is_none());

        manager.add_product_to_list("Groceries", milk_at("2024-03-01 09:00:00"));

        let list = manager.list("Groceries").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(manager.list_names().collect::<Vec<_>>(), vec!["Groceries"]);
    }

    #[test]
    fn groceries_scenario() {
        let mut manager = ProductManager::in_memory();

        manager.add_product_to_list("Groceries", milk_at("2024-03-01 09:00:00"));
        let milk = manager.find_product("Groceries", "Milk").unwrap();
        assert_eq!(milk.total_cost(), (3.5, 1.0));
        assert_eq!(milk.purchase_count(), 1);

        manager.add_product_to_list("Groceries", milk_at("2024-03-02 10:00:00"));
        assert_eq!(manager.list("Groceries").unwrap().len(), 1);
        let milk = manager.find_product("Groceries", "Milk").unwrap();
        assert_eq!(milk.total_cost(), (7.0, 2.0));
        assert_eq!(milk.purchase_count(), 2);
        let stamps: Vec<_> = milk.purchases().iter().map(|p| p.timestamp()).collect();
        assert_eq!(stamps, vec!["2024-03-01 09:00:00", "2024-03-02 10:00:00"]);

        assert!(manager.remove_product_from_list("Groceries", "Milk").is_some());
        assert!(manager.list("Groceries").unwrap().is_empty());
        assert_eq!(
            manager.find_product("Groceries", "Milk").unwrap_err(),
            LookupError::product_not_found("Groceries", "Milk")
        );
    }

    #[test]
    fn find_product_distinguishes_missing_list_from_missing_product() {
        let mut manager = ProductManager::in_memory();
        manager.add_product_to_list("Groceries", milk_at("2024-03-01 09:00:00"));

        assert!(manager.find_product("Hardware", "Milk").unwrap_err().is_list_not_found());
        assert!(!manager.find_product("Groceries", "Eggs").unwrap_err().is_list_not_found());
    }

    #[test]
    fn removing_from_missing_list_is_noop() {
        let mut manager = ProductManager::in_memory();
        manager.add_product_to_list("Groceries", milk_at("2024-03-01 09:00:00"));
        let before = manager.lists().clone();

        assert!(manager.remove_product_from_list("Hardware", "Milk").is_none());
        assert!(manager.remove_product_from_list("Groceries", "Eggs").is_none());
        assert_eq!(manager.lists(), &before);
        assert!(manager.list("Hardware").is_none());
    }

    #[test]
    fn save_then_reopen_reproduces_state() {
        let store = shared_store();
        let mut manager = ProductManager::open(store.clone()).unwrap();
        manager.add_product_to_list("Groceries", milk_at("2024-03-01 09:00:00"));
        manager.add_product_to_list("Groceries", milk_at("2024-03-02 09:00:00"));
        manager.add_product_to_list("Hardware", Product::new("Nails", 0.1, 0.01));
        manager.save().unwrap();

        let reopened = ProductManager::open(store).unwrap();
        assert_eq!(reopened.lists(), manager.lists());
    }

    #[test]
    fn list_emptied_by_removal_survives_save_and_reopen() {
        let store = shared_store();
        let mut manager = ProductManager::open(store.clone()).unwrap();
        manager.add_product_to_list("Groceries", milk_at("2024-03-01 09:00:00"));
        manager.remove_product_from_list("Groceries", "Milk");
        manager.save().unwrap();

        let reopened = ProductManager::open(store).unwrap();
        assert_eq!(reopened.list_names().collect::<Vec<_>>(), vec!["Groceries"]);
        assert!(reopened.list("Groceries").unwrap().is_empty());
        assert!(!reopened
            .find_product("Groceries", "Milk")
            .unwrap_err()
            .is_list_not_found());
    }

    #[test]
    fn mutations_are_not_persisted_until_save() {
        let store = shared_store();
        let mut manager = ProductManager::open(store.clone()).unwrap();
        manager.add_product_to_list("Groceries", milk_at("2024-03-01 09:00:00"));

        assert!(ProductManager::open(store.clone()).unwrap().is_empty());

        manager.save().unwrap();
        assert_eq!(ProductManager::open(store).unwrap().len(), 1);
    }

    #[test]
    fn save_leaves_in_memory_state_untouched() {
        let mut manager = ProductManager::in_memory();
        manager.add_product_to_list("Groceries", milk_at("2024-03-01 09:00:00"));
        let before = manager.lists().clone();

        manager.save().unwrap();
        assert_eq!(manager.lists(), &before);
    }

    #[test]
    fn opening_a_corrupt_store_fails() {
        let store = InMemorySnapshotStore::with_bytes(b"\x00\x01 definitely not a snapshot".to_vec());
        let err = ProductManager::open(store).unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn save_rejects_non_finite_values() {
        let mut manager = ProductManager::in_memory();
        manager.add_product_to_list("Groceries", Product::new("Milk", f64::INFINITY, 1.0));
        assert!(matches!(
            manager.save().unwrap_err(),
            crate::StoreError::Unrepresentable(_)
        ));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn entries() -> impl Strategy<Value = Vec<(String, String, String, f64, f64)>> {
            prop::collection::vec(
                (
                    "[A-C]",
                    "[a-d]{1,2}",
                    "2024-0[1-9]-[12][0-9] [01][0-9]:[0-5][0-9]:[0-5][0-9]",
                    any::<f64>().prop_filter("finite", |v| v.is_finite()),
                    any::<f64>().prop_filter("finite", |v| v.is_finite()),
                ),
                0..30,
            )
        }

        proptest! {
            /// Property: save followed by a fresh load reproduces every history exactly.
            #[test]
            fn save_load_round_trip(entries in entries()) {
                let store = Arc::new(InMemorySnapshotStore::new());
                let mut manager = ProductManager::open(store.clone()).unwrap();
                for (list, name, stamp, price, weight) in &entries {
                    let mut product = Product::new(name.as_str(), *price, *weight);
                    product.add_purchase(stamp.as_str(), *price, *weight);
                    manager.add_product_to_list(list, product);
                }
                manager.save().unwrap();

                let reopened = ProductManager::open(store).unwrap();
                prop_assert_eq!(reopened.lists(), manager.lists());
            }

            /// Property: removing an absent product leaves the state unchanged.
            #[test]
            fn remove_absent_is_identity(entries in entries(), list in "[A-F]", name in "[x-z]{3}") {
                let mut manager = ProductManager::in_memory();
                for (l, n, stamp, price, weight) in &entries {
                    let mut product = Product::new(n.as_str(), *price, *weight);
                    product.add_purchase(stamp.as_str(), *price, *weight);
                    manager.add_product_to_list(l, product);
                }
                let before = manager.lists().clone();

                prop_assert!(manager.remove_product_from_list(&list, &name).is_none());
                prop_assert_eq!(manager.lists(), &before);
            }
        }
    }
}
