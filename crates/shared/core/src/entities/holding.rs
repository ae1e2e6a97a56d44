use serde::{Deserialize, Serialize};

use super::ProductId;

/// Units of one product held by an agent
///
/// Stock is unsigned: a sell is only attempted when `stock > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub product_id: ProductId,
    pub stock: u64,
}

impl Holding {
    /// Empty holding for a product
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            stock: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stock == 0
    }
}
