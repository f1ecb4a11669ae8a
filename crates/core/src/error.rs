//! Lookup error model.

use thiserror::Error;

/// Result type for read-side lookups into lists and products.
pub type LookupResult<T> = Result<T, LookupError>;

/// A list or product was not present.
///
/// This is an expected outcome rather than a failure: callers branch on the
/// variant to render "list not found" and "product not found" differently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No list with this name exists.
    #[error("list not found: {0}")]
    ListNotFound(String),

    /// The list exists but holds no product with this name.
    #[error("product not found: {product} (list: {list})")]
    ProductNotFound { list: String, product: String },
}

impl LookupError {
    pub fn list_not_found(list: impl Into<String>) -> Self {
        Self::ListNotFound(list.into())
    }

    pub fn product_not_found(list: impl Into<String>, product: impl Into<String>) -> Self {
        Self::ProductNotFound {
            list: list.into(),
            product: product.into(),
        }
    }

    pub fn is_list_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_))
    }
}
