//! Market registry
//!
//! Owns every product by id. After setup this is the only way the simulation
//! reaches a product.

use std::collections::HashMap;

use crate::entities::{Product, ProductId};
use crate::error::{MarketError, Result};

/// Registry of products keyed by id
#[derive(Debug, Clone, Default)]
pub struct Market {
    products: HashMap<ProductId, Product>,
}

impl Market {
    /// Create an empty market
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a market from a list of products
    ///
    /// Fails on the first duplicate id.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let mut market = Self::new();
        for product in products {
            market.add(product)?;
        }
        Ok(market)
    }

    /// Register a product; ids are unique
    pub fn add(&mut self, product: Product) -> Result<&Product> {
        if self.products.contains_key(product.id()) {
            return Err(MarketError::Duplicate(product.id().clone()));
        }

        let id = product.id().clone();
        Ok(self.products.entry(id).or_insert(product))
    }

    /// Look up a product by id
    pub fn get(&self, id: &ProductId) -> Result<&Product> {
        self.products
            .get(id)
            .ok_or_else(|| MarketError::NotFound(id.clone()))
    }

    /// Look up a product by id for mutation
    pub fn get_mut(&mut self, id: &ProductId) -> Result<&mut Product> {
        self.products
            .get_mut(id)
            .ok_or_else(|| MarketError::NotFound(id.clone()))
    }

    /// Remove a product from the registry
    pub fn remove(&mut self, id: &ProductId) -> Result<Product> {
        self.products
            .remove(id)
            .ok_or_else(|| MarketError::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over all registered products (unordered)
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}
