use pantry_core::{date_part, Entity, ValueObject};

/// One timestamped purchase observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    timestamp: String,
    price: f64,
    weight: f64,
}

impl Purchase {
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl ValueObject for Purchase {}

/// A named item with its purchase history.
///
/// `price` and `weight` hold the values the product was created with. They are
/// informational only; totals are always derived from the history.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: f64,
    weight: f64,
    purchases: Vec<Purchase>,
}

impl Product {
    /// Create a product with an empty history. No validation is applied.
    pub fn new(name: impl Into<String>, price: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            price,
            weight,
            purchases: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Purchase history in order of entry.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    /// Append a purchase record to the history.
    pub fn add_purchase(&mut self, timestamp: impl Into<String>, price: f64, weight: f64) {
        self.purchases.push(Purchase {
            timestamp: timestamp.into(),
            price,
            weight,
        });
    }

    /// `(total price, total weight)` across the whole history.
    pub fn total_cost(&self) -> (f64, f64) {
        self.purchases
            .iter()
            .fold((0.0, 0.0), |(price, weight), p| (price + p.price, weight + p.weight))
    }

    pub fn purchase_count(&self) -> usize {
        self.purchases.len()
    }

    /// Human-readable one-line summary.
    ///
    /// Lists the name, totals, purchase count and the date of every purchase
    /// (time-of-day dropped) in history order.
    pub fn describe(&self) -> String {
        let (total_price, total_weight) = self.total_cost();
        let dates = self
            .purchases
            .iter()
            .map(|p| date_part(&p.timestamp))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Name: {}, Total Price: {:?}, Total Weight: {:?}, Purchased {} times on: {}",
            self.name,
            total_price,
            total_weight,
            self.purchase_count(),
            dates
        )
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Product {
        Product::new("Milk", 3.5, 1.0)
    }

    #[test]
    fn new_product_has_empty_history() {
        let product = milk();
        assert_eq!(product.name(), "Milk");
        assert_eq!(product.price(), 3.5);
        assert_eq!(product.weight(), 1.0);
        assert_eq!(product.purchase_count(), 0);
        assert_eq!(product.total_cost(), (0.0, 0.0));
    }

    #[test]
    fn construction_accepts_empty_names_and_negative_values() {
        let product = Product::new("", -2.0, -0.5);
        assert_eq!(product.id(), "");
        assert_eq!(product.price(), -2.0);
        assert_eq!(product.weight(), -0.5);
    }

    #[test]
    fn add_purchase_appends_in_entry_order() {
        let mut product = milk();
        product.add_purchase("2024-03-02 10:00:00", 3.5, 1.0);
        product.add_purchase("2024-03-01 09:00:00", 4.0, 2.0);

        let stamps: Vec<_> = product.purchases().iter().map(Purchase::timestamp).collect();
        assert_eq!(stamps, vec!["2024-03-02 10:00:00", "2024-03-01 09:00:00"]);
        assert_eq!(product.total_cost(), (7.5, 3.0));
        assert_eq!(product.purchase_count(), 2);
    }

    #[test]
    fn scalar_price_and_weight_are_not_recomputed() {
        let mut product = milk();
        product.add_purchase("2024-03-01 09:00:00", 10.0, 5.0);
        assert_eq!(product.price(), 3.5);
        assert_eq!(product.weight(), 1.0);
    }

    #[test]
    fn describe_lists_fields_in_order_with_dates_only() {
        let mut product = milk();
        product.add_purchase("2024-03-01 09:00:00", 3.5, 1.0);
        product.add_purchase("2024-03-05 18:30:12", 3.5, 1.0);

        assert_eq!(
            product.describe(),
            "Name: Milk, Total Price: 7.0, Total Weight: 2.0, Purchased 2 times on: 2024-03-01, 2024-03-05"
        );
        assert_eq!(product.to_string(), product.describe());
    }

    #[test]
    fn describe_with_no_purchases() {
        assert_eq!(
            milk().describe(),
            "Name: Milk, Total Price: 0.0, Total Weight: 0.0, Purchased 0 times on: "
        );
    }

    #[test]
    fn describe_prints_large_totals_in_exponent_form() {
        let mut product = Product::new("Gold", 1.0e16, 1.0);
        product.add_purchase("2024-03-01 09:00:00", 1.0e16, 1.0);
        assert_eq!(
            product.describe(),
            "Name: Gold, Total Price: 1e16, Total Weight: 1.0, Purchased 1 times on: 2024-03-01"
        );
    }

    #[test]
    fn purchases_are_value_objects() {
        fn value_semantics<T: ValueObject>(a: &T, b: &T) -> bool {
            a.clone() == *b
        }

        let mut product = milk();
        product.add_purchase("2024-03-01 09:00:00", 3.5, 1.0);
        product.add_purchase("2024-03-01 09:00:00", 3.5, 1.0);
        assert!(value_semantics(&product.purchases()[0], &product.purchases()[1]));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: totals equal the pairwise sum of every appended record.
            #[test]
            fn totals_match_appended_values(
                records in prop::collection::vec((-1.0e6f64..1.0e6, -1.0e6f64..1.0e6), 0..50)
            ) {
                let mut product = milk();
                let mut expected = (0.0, 0.0);
                for (i, (price, weight)) in records.iter().enumerate() {
                    product.add_purchase(format!("2024-01-01 00:00:{i:02}"), *price, *weight);
                    expected.0 += price;
                    expected.1 += weight;
                }

                prop_assert_eq!(product.total_cost(), expected);
                prop_assert_eq!(product.purchase_count(), records.len());
            }
        }
    }
}
