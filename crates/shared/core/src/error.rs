use thiserror::Error;

use crate::entities::ProductId;
use crate::values::Price;

/// Domain-level errors for products and the market registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("Product {id} \"{name}\" is out of stock")]
    OutOfStock { id: ProductId, name: String },

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Product {0} already exists")]
    Duplicate(ProductId),

    #[error("Product {id} cannot move its price from {price} without leaving the allowed range")]
    PriceOutOfRange { id: ProductId, price: Price },

    #[error("Invalid product: {0}")]
    InvalidProduct(String),
}

pub type Result<T> = std::result::Result<T, MarketError>;
