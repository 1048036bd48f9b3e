//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongodb")
//! - `TestDataBuilder`: deterministic test data that satisfies the catalog field rules
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! # async fn example() {
//! let mongo = TestMongo::new().await;
//! let builder = TestDataBuilder::from_test_name("test_create_product");
//!
//! let db = mongo.database();
//! let name = builder.product_name("phone");
//! let price = builder.price();
//! # }
//! ```

#[cfg(feature = "mongodb")]
mod mongo;

#[cfg(feature = "mongodb")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name, so each test gets stable, distinct data.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// assert_eq!(builder.price(), TestDataBuilder::from_test_name("test_create_product").price());
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `{label}-{n}` with `n < 10000`. Keep `label` to at most 15 characters
    /// from `[A-Za-z0-9_-]` so the result stays a valid product name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(123_456).product_name("phone");
    /// assert_eq!(name, "phone-3456");
    /// ```
    pub fn product_name(&self, label: &str) -> String {
        format!("{}-{}", label, self.seed % 10_000)
    }

    /// A price below 1000 ending in `.99`.
    pub fn price(&self) -> f64 {
        (self.seed % 1_000) as f64 + 0.99
    }

    /// 24 hex digits derived from the seed, usable as an id no store assigned.
    pub fn object_id_hex(&self) -> String {
        format!("{:016x}{:08x}", self.seed, (self.seed >> 32) as u32)
    }
}
