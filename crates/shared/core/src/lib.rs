//! Agora Core Domain
//!
//! Pure domain types for the Agora market simulation.
//! This crate contains no randomness, no I/O, and is 100% unit testable.
//!
//! - **Product**: a tradable instrument and its price-impact rule
//! - **Market**: registry owning product id uniqueness
//! - **Action**: what an agent decided to do on a tick
//! - **Holding**: an agent's inventory record for one product

pub mod entities;
pub mod error;
pub mod market;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Action, Holding, MAX_PRICE, MIN_PRICE, Product, ProductId, ProductSpec};
pub use error::{MarketError, Result};
pub use market::Market;
pub use values::{Balance, Percent, Price, TaxRate};
