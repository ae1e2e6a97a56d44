//! Anti-Trend Agent
//!
//! Contrarian: when the price fell at least `threshold_pct` since the last
//! commit it buys with probability 0.75, otherwise it sells with probability
//! 0.20. Mirror of the trend agent's threshold.

use agora_core::{Action, Product};
use rand::RngCore;

use crate::factory::TrendConfig;
use crate::rule::{Signal, TrendRule};
use crate::{Account, Agent, AgentKind, Result};

/// Contrarian agent
#[derive(Debug, Clone)]
pub struct AntiTrendAgent {
    account: Account,
    rule: TrendRule,
}

impl AntiTrendAgent {
    pub fn new(account: Account, config: &TrendConfig) -> Result<Self> {
        let rule = TrendRule::new(
            Signal::Falling {
                at_most: -config.threshold_pct,
            },
            config.buy_weights,
            config.sell_weights,
        )?;

        Ok(Self { account, rule })
    }
}

impl Agent for AntiTrendAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::AntiTrend
    }

    fn account(&self) -> &Account {
        &self.account
    }

    fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn decide(&mut self, product: &Product, rng: &mut dyn RngCore) -> Action {
        self.rule.decide(product, rng)
    }
}
