//! Agent Account
//!
//! Balance, inventory and order rank shared by every agent type, plus the
//! trade-execution contract all policies go through.

use agora_core::{Action, Balance, Holding, Price, Product, ProductId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::error::{AgentError, Result};

/// Balance every agent starts with unless configured otherwise
pub const DEFAULT_BALANCE: Balance = dec!(1000);

/// Outcome of the pre-trade guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// Trade may proceed
    Eligible,
    /// Buy refused: balance must be strictly greater than the price
    InsufficientBalance { balance: Balance, price: Price },
    /// Sell refused: no units of the product held
    NoInventory,
    /// Nothing to execute
    Idle,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// Per-agent trading state
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Rank assigned once after the population is shuffled (0 = unassigned)
    pub(crate) order: u32,
    balance: Balance,
    inventory: HashMap<ProductId, Holding>,
}

impl Account {
    /// Create an account with an empty inventory
    pub fn new(balance: Balance) -> Self {
        Self {
            order: 0,
            balance,
            inventory: HashMap::new(),
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Whether an order rank has been assigned yet
    pub fn has_order(&self) -> bool {
        self.order != 0
    }

    /// Assign the order rank; only allowed once
    pub fn assign_order(&mut self, order: u32) -> Result<()> {
        if order == 0 {
            return Err(AgentError::InvalidOrder);
        }
        if self.has_order() {
            return Err(AgentError::OrderAlreadyAssigned(self.order));
        }
        self.order = order;
        Ok(())
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Holding for a product, if the agent ever bought it
    pub fn holding(&self, product_id: &ProductId) -> Option<&Holding> {
        self.inventory.get(product_id)
    }

    /// Units held of a product (0 when never bought)
    pub fn stock_of(&self, product_id: &ProductId) -> u64 {
        self.holding(product_id).map_or(0, |h| h.stock)
    }

    /// Inventory snapshot ordered by product id
    pub fn inventory(&self) -> Vec<Holding> {
        let mut holdings: Vec<Holding> = self.inventory.values().cloned().collect();
        holdings.sort_by(|a, b| a.product_id.cmp(&b.product_id));
        holdings
    }

    /// Check whether `action` may be executed against `product`
    pub fn eligibility(&self, action: Action, product: &Product) -> Eligibility {
        match action {
            Action::Buy => {
                if self.balance > product.price() {
                    Eligibility::Eligible
                } else {
                    Eligibility::InsufficientBalance {
                        balance: self.balance,
                        price: product.price(),
                    }
                }
            }
            Action::Sell => {
                if self.stock_of(product.id()) > 0 {
                    Eligibility::Eligible
                } else {
                    Eligibility::NoInventory
                }
            }
            Action::Nothing => Eligibility::Idle,
        }
    }

    /// Execute `action` at the product's current price
    ///
    /// Only the account is mutated. Returns `true` when a trade happened, in
    /// which case the caller must apply the matching `Product::buy`/`Product::sell`.
    pub fn trade(&mut self, action: Action, product: &Product) -> bool {
        let eligibility = self.eligibility(action, product);
        if !eligibility.is_eligible() {
            if action.is_trade() {
                log::trace!(
                    "Agent #{} {} on {} refused: {:?}",
                    self.order,
                    action,
                    product.id(),
                    eligibility
                );
            }
            return false;
        }

        let price = product.price();
        let holding = self
            .inventory
            .entry(product.id().clone())
            .or_insert_with(|| Holding::new(product.id().clone()));

        match action {
            Action::Buy => {
                self.balance -= price;
                holding.stock += 1;
            }
            Action::Sell => {
                self.balance += price;
                holding.stock -= 1;
            }
            Action::Nothing => return false,
        }

        true
    }

    /// Mark-to-market value of the account at the given price
    pub fn equity(&self, product_id: &ProductId, price: Price) -> Balance {
        self.balance + Decimal::from(self.stock_of(product_id)) * price
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE)
    }
}
