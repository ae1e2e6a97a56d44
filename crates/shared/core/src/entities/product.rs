use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{MarketError, Result};
use crate::values::{Percent, Price, TaxRate};

/// Tax coefficients are expressed per mille
const PER_MILLE: Decimal = dec!(1000);

/// Lowest price a product may reach
///
/// Together with [`MAX_PRICE`] this keeps `pct_change` finite and every
/// tax multiplication far from the edges of `Decimal`'s range and scale.
pub const MIN_PRICE: Price = dec!(0.000000000001);

/// Highest price a product may reach
pub const MAX_PRICE: Price = dec!(1000000000000);

/// Unique identifier for a product
///
/// Stable reference usable as a map key in the market registry and in
/// agent inventories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// Create a new product ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Parameters a product is created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    /// Product identifier
    pub id: ProductId,
    /// Human readable name
    pub name: String,
    /// Units available at creation
    pub stock: u64,
    /// Per-mille price increase applied on every buy
    pub buy_tax: TaxRate,
    /// Per-mille price decrease applied on every sell
    pub sell_tax: TaxRate,
    /// Initial price
    pub price: Price,
    /// Price as of the previous commit (defaults to `price`)
    #[serde(default)]
    pub last_price: Option<Price>,
}

impl Default for ProductSpec {
    fn default() -> Self {
        Self {
            id: ProductId::new("GC1"),
            name: "graphicCard".to_string(),
            stock: 100_000,
            buy_tax: dec!(5),
            sell_tax: dec!(5),
            price: dec!(200),
            last_price: None,
        }
    }
}

/// A tradable instrument and its deterministic price-impact rule
///
/// Every buy pushes the price up by `buy_tax` per mille, every sell pushes it
/// down by `sell_tax` per mille. `last_price` only moves on [`Product::commit_price`],
/// which the simulation calls once per tick after all agents have acted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    stock: u64,
    buy_tax: TaxRate,
    sell_tax: TaxRate,
    price: Price,
    last_price: Price,
}

impl Product {
    /// Create a product, validating its prices and tax coefficients
    pub fn new(spec: ProductSpec) -> Result<Self> {
        if !in_range(spec.price) {
            return Err(MarketError::InvalidProduct(format!(
                "{}: price must be in [{}, {}], got {}",
                spec.id, MIN_PRICE, MAX_PRICE, spec.price
            )));
        }
        if let Some(last) = spec.last_price
            && !in_range(last)
        {
            return Err(MarketError::InvalidProduct(format!(
                "{}: last price must be in [{}, {}], got {}",
                spec.id, MIN_PRICE, MAX_PRICE, last
            )));
        }
        if spec.buy_tax <= Decimal::ZERO {
            return Err(MarketError::InvalidProduct(format!(
                "{}: buy tax must be positive, got {}",
                spec.id, spec.buy_tax
            )));
        }
        if spec.sell_tax <= Decimal::ZERO || spec.sell_tax >= PER_MILLE {
            return Err(MarketError::InvalidProduct(format!(
                "{}: sell tax must be in (0, 1000), got {}",
                spec.id, spec.sell_tax
            )));
        }

        Ok(Self {
            last_price: spec.last_price.unwrap_or(spec.price),
            id: spec.id,
            name: spec.name,
            stock: spec.stock,
            buy_tax: spec.buy_tax,
            sell_tax: spec.sell_tax,
            price: spec.price,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn buy_tax(&self) -> TaxRate {
        self.buy_tax
    }

    pub fn sell_tax(&self) -> TaxRate {
        self.sell_tax
    }

    /// Current price, including every trade of the running tick
    pub fn price(&self) -> Price {
        self.price
    }

    /// Price as of the last commit
    pub fn last_price(&self) -> Price {
        self.last_price
    }

    /// Price change since the last commit, in percent
    ///
    /// `(price - last_price) / last_price * 100`. Both prices are kept within
    /// [`MIN_PRICE`, `MAX_PRICE`], so the division is never by zero and the
    /// result fits comfortably in a `Decimal`.
    pub fn pct_change(&self) -> Percent {
        (self.price - self.last_price) / self.last_price * dec!(100)
    }

    /// Take one unit out of stock and apply buy pressure to the price
    ///
    /// Returns the new price. Fails without touching stock or price when the
    /// product is out of stock or the new price would leave the allowed range.
    pub fn buy(&mut self) -> Result<Price> {
        if self.stock == 0 {
            return Err(MarketError::OutOfStock {
                id: self.id.clone(),
                name: self.name.clone(),
            });
        }

        let price = Decimal::ONE
            .checked_add(self.buy_tax / PER_MILLE)
            .and_then(|factor| self.price.checked_mul(factor))
            .filter(|&next| next > self.price && next <= MAX_PRICE)
            .ok_or_else(|| self.out_of_range())?;

        self.stock -= 1;
        self.price = price;
        Ok(self.price)
    }

    /// Put one unit back into stock and apply sell pressure to the price
    ///
    /// Sells carry no stock precondition at the product level. Returns the new
    /// price, or fails without touching state when it would leave the allowed range.
    pub fn sell(&mut self) -> Result<Price> {
        let price = self
            .price
            .checked_mul(Decimal::ONE - self.sell_tax / PER_MILLE)
            .filter(|&next| next < self.price && next >= MIN_PRICE)
            .ok_or_else(|| self.out_of_range())?;

        self.stock += 1;
        self.price = price;
        Ok(self.price)
    }

    fn out_of_range(&self) -> MarketError {
        MarketError::PriceOutOfRange {
            id: self.id.clone(),
            price: self.price,
        }
    }

    /// Snapshot the current price as the baseline for the next tick
    pub fn commit_price(&mut self) {
        self.last_price = self.price;
    }
}

fn in_range(price: Price) -> bool {
    (MIN_PRICE..=MAX_PRICE).contains(&price)
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} \"{}\" (stock={}, price={}, last_price={}, buy_tax={}, sell_tax={})",
            self.id,
            self.name,
            self.stock,
            self.price,
            self.last_price,
            self.buy_tax,
            self.sell_tax
        )
    }
}
