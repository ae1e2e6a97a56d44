//! Tiered Agent
//!
//! Position-dependent agent. On its first decision it picks a tier from its
//! order rank and a set of ascending thresholds, then keeps that tier for the
//! rest of its life:
//!
//! - **Start**: trend rule, buy 75/25 on a rise, sell 20/80 otherwise
//! - **Middle**: trend rule, buy 60/40 on a rise, sell 30/70 otherwise
//! - **End**: liquidate, sell whenever any stock is held

use agora_core::{Action, Product};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::factory::TieredConfig;
use crate::rule::{Signal, TrendRule};
use crate::{Account, Agent, AgentKind, Result};

/// Behavioural mode a tiered agent locks into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Start,
    Middle,
    End,
}

impl Tier {
    /// Select the tier for an order rank
    ///
    /// The tier is the first threshold, scanned in ascending order, that the
    /// order does not exceed. An order above every threshold keeps the last.
    pub fn select(order: u32, thresholds: &[u32; 3]) -> Tier {
        match thresholds.iter().position(|&t| order <= t) {
            Some(0) => Tier::Start,
            Some(1) => Tier::Middle,
            _ => Tier::End,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Start => write!(f, "start"),
            Tier::Middle => write!(f, "middle"),
            Tier::End => write!(f, "end"),
        }
    }
}

/// Agent whose behaviour depends on its position in the population
#[derive(Debug, Clone)]
pub struct TieredAgent {
    account: Account,
    thresholds: [u32; 3],
    start: TrendRule,
    middle: TrendRule,
    /// Cached on first decision, never recomputed
    strategy: Option<Tier>,
}

impl TieredAgent {
    pub fn new(account: Account, config: &TieredConfig) -> Result<Self> {
        config.validate()?;

        let start = TrendRule::new(
            Signal::Rising {
                at_least: config.start.threshold_pct,
            },
            config.start.buy_weights,
            config.start.sell_weights,
        )?;
        let middle = TrendRule::new(
            Signal::Rising {
                at_least: config.middle.threshold_pct,
            },
            config.middle.buy_weights,
            config.middle.sell_weights,
        )?;

        Ok(Self {
            account,
            thresholds: config.thresholds,
            start,
            middle,
            strategy: None,
        })
    }

    /// Cached tier, `None` before the first decision
    pub fn strategy(&self) -> Option<Tier> {
        self.strategy
    }

    fn tier(&mut self) -> Tier {
        let order = self.account.order();
        let thresholds = &self.thresholds;
        *self.strategy.get_or_insert_with(|| {
            let tier = Tier::select(order, thresholds);
            log::debug!("Agent #{} (custom) locked into {} tier", order, tier);
            tier
        })
    }

    fn liquidate(&self, product: &Product) -> Action {
        if self.account.stock_of(product.id()) > 0 {
            Action::Sell
        } else {
            Action::Nothing
        }
    }
}

impl Agent for TieredAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Custom
    }

    fn account(&self) -> &Account {
        &self.account
    }

    fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn decide(&mut self, product: &Product, rng: &mut dyn RngCore) -> Action {
        match self.tier() {
            Tier::Start => self.start.decide(product, rng),
            Tier::Middle => self.middle.decide(product, rng),
            Tier::End => self.liquidate(product),
        }
    }
}
