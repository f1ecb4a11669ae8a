//! Products domain module.
//!
//! This crate contains the purchase-tracking data model, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod list;
pub mod product;

pub use list::ProductList;
pub use product::{Product, Purchase};
