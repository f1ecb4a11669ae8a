//! Form-shaped facade over the product manager.
//!
//! Every action takes the raw form fields, validates them, and returns an
//! [`Outcome`] instead of an error, so a front end only has to render it.

use pantry_core::{now_timestamp, LookupError};
use pantry_infra::ProductManager;
use pantry_products::Product;

use crate::input::{parse_number, InputError};

/// How an outcome should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Result of a form action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A purchase was recorded.
    Added,
    /// Descriptions of every product in a list, in name order.
    Products(Vec<String>),
    /// The list exists but holds no products.
    EmptyList,
    /// Description of the product found by a search.
    Found(String),
    /// A product was removed from its list.
    Removed,
    /// The state was written to the store.
    Saved,
    ListNotFound,
    ProductNotFound,
    MissingListName,
    MissingProductName,
    /// Search needs both a product name and an existing list.
    MissingSearchInput,
    InvalidInput(InputError),
    SaveFailed(String),
}

impl Outcome {
    pub fn severity(&self) -> Severity {
        match self {
            Outcome::Added
            | Outcome::Products(_)
            | Outcome::EmptyList
            | Outcome::Found(_)
            | Outcome::ProductNotFound
            | Outcome::Removed
            | Outcome::Saved => Severity::Info,
            Outcome::ListNotFound
            | Outcome::MissingListName
            | Outcome::MissingProductName
            | Outcome::MissingSearchInput
            | Outcome::InvalidInput(_) => Severity::Warning,
            Outcome::SaveFailed(_) => Severity::Error,
        }
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            Outcome::Added | Outcome::Removed | Outcome::Saved => "Success",
            Outcome::Products(_) | Outcome::EmptyList => "Products",
            Outcome::Found(_) | Outcome::ProductNotFound => "Product Info",
            Outcome::SaveFailed(_) => "Error",
            _ => "Warning",
        }
    }

    /// Dialog body.
    pub fn message(&self) -> String {
        match self {
            Outcome::Added => "Product added successfully!".to_string(),
            Outcome::Products(lines) => lines.join("\n"),
            Outcome::EmptyList => "No products in this list.".to_string(),
            Outcome::Found(line) => line.clone(),
            Outcome::Removed => "Product removed successfully!".to_string(),
            Outcome::Saved => "Data saved successfully!".to_string(),
            Outcome::ListNotFound => "List does not exist.".to_string(),
            Outcome::ProductNotFound => "Product not found in this list.".to_string(),
            Outcome::MissingListName => "Please enter a list name.".to_string(),
            Outcome::MissingProductName => "Please enter a product name.".to_string(),
            Outcome::MissingSearchInput => {
                "Please enter a product name and a list name.".to_string()
            }
            Outcome::InvalidInput(err) => format!("Invalid input: {err}."),
            Outcome::SaveFailed(reason) => format!("Failed to save data: {reason}"),
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// The purchase-tracking form, owning its product manager.
#[derive(Debug)]
pub struct ProductApp {
    manager: ProductManager,
}

impl ProductApp {
    pub fn new(manager: ProductManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &ProductManager {
        &self.manager
    }

    /// Record one purchase of a product, stamped with the current local time.
    pub fn add_product(&mut self, name: &str, price: &str, weight: &str, list_name: &str) -> Outcome {
        self.add_product_at(name, price, weight, list_name, &now_timestamp())
    }

    /// Record one purchase of a product with an explicit timestamp.
    pub fn add_product_at(
        &mut self,
        name: &str,
        price: &str,
        weight: &str,
        list_name: &str,
        timestamp: &str,
    ) -> Outcome {
        let (name, list_name) = (name.trim(), list_name.trim());
        if list_name.is_empty() {
            return Outcome::MissingListName;
        }
        if name.is_empty() {
            return Outcome::MissingProductName;
        }

        let parsed = parse_number("Price", price)
            .and_then(|price| parse_number("Weight", weight).map(|weight| (price, weight)));
        let (price, weight) = match parsed {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(error = %err, "rejected product input");
                return Outcome::InvalidInput(err);
            }
        };

        let mut product = Product::new(name, price, weight);
        product.add_purchase(timestamp, price, weight);
        self.manager.add_product_to_list(list_name, product);
        tracing::info!(list = list_name, product = name, "recorded purchase");
        Outcome::Added
    }

    /// Describe every product in a list.
    pub fn show_all_products(&self, list_name: &str) -> Outcome {
        let list_name = list_name.trim();
        if list_name.is_empty() {
            return Outcome::MissingListName;
        }

        match self.manager.list(list_name) {
            None => Outcome::ListNotFound,
            Some(list) if list.is_empty() => Outcome::EmptyList,
            Some(list) => Outcome::Products(list.products().map(Product::describe).collect()),
        }
    }

    /// Look up a single product by exact name.
    pub fn search_product(&self, list_name: &str, product_name: &str) -> Outcome {
        let (list_name, product_name) = (list_name.trim(), product_name.trim());
        if list_name.is_empty() {
            return Outcome::MissingListName;
        }
        if product_name.is_empty() {
            return Outcome::MissingSearchInput;
        }

        match self.manager.find_product(list_name, product_name) {
            Ok(product) => Outcome::Found(product.describe()),
            Err(LookupError::ListNotFound(_)) => Outcome::ListNotFound,
            Err(LookupError::ProductNotFound { .. }) => Outcome::ProductNotFound,
        }
    }

    /// Remove a product from a list.
    pub fn remove_product(&mut self, list_name: &str, product_name: &str) -> Outcome {
        let (list_name, product_name) = (list_name.trim(), product_name.trim());
        if list_name.is_empty() {
            return Outcome::MissingListName;
        }
        if product_name.is_empty() {
            return Outcome::MissingProductName;
        }
        if self.manager.list(list_name).is_none() {
            return Outcome::ListNotFound;
        }

        match self.manager.remove_product_from_list(list_name, product_name) {
            Some(_) => Outcome::Removed,
            None => Outcome::ProductNotFound,
        }
    }

    /// Persist the current state.
    pub fn save(&self) -> Outcome {
        match self.manager.save() {
            Ok(()) => Outcome::Saved,
            Err(err) => Outcome::SaveFailed(err.to_string()),
        }
    }
}
