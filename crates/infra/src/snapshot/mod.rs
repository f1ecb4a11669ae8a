//! Whole-store snapshots and the backends that hold them.
//!
//! A snapshot is the full `list name -> list` mapping encoded as one JSON
//! document. The document carries a small header (`format`, `version`) so that
//! foreign or incompatible files are reported as corrupt instead of being
//! misread. There is no migration between versions.

pub mod file;
pub mod in_memory;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pantry_products::{Product, ProductList};

use crate::error::{StoreError, StoreResult};

pub use file::{FileSnapshotStore, DEFAULT_STORE_FILE};
pub use in_memory::InMemorySnapshotStore;

const SNAPSHOT_FORMAT: &str = "pantry-snapshot";
const SNAPSHOT_VERSION: u32 = 1;

/// Serialized state of a product manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    format: String,
    version: u32,
    lists: BTreeMap<String, ListRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListRecord {
    products: BTreeMap<String, ProductRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProductRecord {
    name: String,
    price: f64,
    weight: f64,
    purchases: Vec<PurchaseRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PurchaseRecord {
    timestamp: String,
    price: f64,
    weight: f64,
}

impl Snapshot {
    /// Capture the given lists.
    ///
    /// JSON has no encoding for NaN or infinities, so any non-finite price or
    /// weight is rejected rather than written as `null`.
    pub fn capture(lists: &BTreeMap<String, ProductList>) -> StoreResult<Self> {
        let mut records = BTreeMap::new();

        for (list_name, list) in lists {
            let mut products = BTreeMap::new();
            for product in list.products() {
                products.insert(product.name().to_owned(), ProductRecord::capture(list_name, product)?);
            }
            records.insert(list_name.clone(), ListRecord { products });
        }

        Ok(Self {
            format: SNAPSHOT_FORMAT.to_owned(),
            version: SNAPSHOT_VERSION,
            lists: records,
        })
    }

    /// Rebuild the lists this snapshot was captured from.
    pub fn restore(self, location: &str) -> StoreResult<BTreeMap<String, ProductList>> {
        let mut lists = BTreeMap::new();

        for (list_name, record) in self.lists {
            let mut list = ProductList::new();
            for (key, product) in record.products {
                if key != product.name {
                    return Err(StoreError::corrupt(
                        location,
                        format!("list {list_name:?} files product {:?} under key {key:?}", product.name),
                    ));
                }
                list.add_product(product.restore());
            }
            lists.insert(list_name, list);
        }

        Ok(lists)
    }

    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Encode as pretty-printed JSON.
    pub fn encode(&self) -> StoreResult<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| StoreError::Unrepresentable(format!("snapshot as JSON: {e}")))
    }

    /// Decode a stored document.
    ///
    /// Empty (or whitespace-only) input is an empty store, reported as
    /// `Ok(None)` just like a missing one.
    pub fn decode(bytes: &[u8], location: &str) -> StoreResult<Option<Self>> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            tracing::warn!(location, "snapshot is empty; starting with no lists");
            return Ok(None);
        }

        let snapshot: Snapshot = serde_json::from_slice(bytes)
            .map_err(|e| StoreError::corrupt(location, e.to_string()))?;

        if snapshot.format != SNAPSHOT_FORMAT {
            return Err(StoreError::corrupt(
                location,
                format!("unexpected format {:?}", snapshot.format),
            ));
        }
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::corrupt(
                location,
                format!(
                    "unsupported version {} (expected {SNAPSHOT_VERSION})",
                    snapshot.version
                ),
            ));
        }

        Ok(Some(snapshot))
    }
}

impl ProductRecord {
    fn capture(list_name: &str, product: &Product) -> StoreResult<Self> {
        let finite = |what: &str, value: f64| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(StoreError::Unrepresentable(format!(
                    "{what} {value} of product {:?} in list {list_name:?}",
                    product.name()
                )))
            }
        };

        let purchases = product
            .purchases()
            .iter()
            .map(|p| -> StoreResult<PurchaseRecord> {
                Ok(PurchaseRecord {
                    timestamp: p.timestamp().to_owned(),
                    price: finite("purchase price", p.price())?,
                    weight: finite("purchase weight", p.weight())?,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(Self {
            name: product.name().to_owned(),
            price: finite("price", product.price())?,
            weight: finite("weight", product.weight())?,
            purchases,
        })
    }

    fn restore(self) -> Product {
        let mut product = Product::new(self.name, self.price, self.weight);
        for p in self.purchases {
            product.add_purchase(p.timestamp, p.price, p.weight);
        }
        product
    }
}

/// Persistent home of a single snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Read the stored snapshot, `Ok(None)` if nothing has been stored yet.
    fn load(&self) -> StoreResult<Option<Snapshot>>;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()>;

    /// Human-readable location used in logs and errors.
    fn location(&self) -> String;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn load(&self) -> StoreResult<Option<Snapshot>> {
        (**self).load()
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        (**self).save(snapshot)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
