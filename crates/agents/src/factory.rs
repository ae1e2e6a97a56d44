//! Agent Factory
//!
//! Strategy parameters for every policy and construction of boxed agents by kind.

use agora_core::{Balance, Percent};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Result};
use crate::{Account, Agent, AgentKind, AntiTrendAgent, RandomAgent, TieredAgent, TrendAgent};

/// Parameters of a trend rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Absolute percentage change that triggers the buy side
    pub threshold_pct: Percent,
    /// `[buy, nothing]` weights when the signal fires
    pub buy_weights: [u32; 2],
    /// `[sell, nothing]` weights otherwise
    pub sell_weights: [u32; 2],
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            threshold_pct: dec!(1),
            buy_weights: [75, 25],
            sell_weights: [20, 80],
        }
    }
}

/// Parameters of the tiered agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredConfig {
    /// Ascending order thresholds for start / middle / end
    pub thresholds: [u32; 3],
    /// Rule used in the start tier
    pub start: TrendConfig,
    /// Rule used in the middle tier
    pub middle: TrendConfig,
}

impl TieredConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.thresholds.windows(2).all(|w| w[0] < w[1]) {
            return Err(AgentError::InvalidThresholds(format!(
                "{:?} must be strictly ascending",
                self.thresholds
            )));
        }
        Ok(())
    }
}

impl Default for TieredConfig {
    fn default() -> Self {
        Self {
            thresholds: [40, 60, 100],
            start: TrendConfig::default(),
            middle: TrendConfig {
                threshold_pct: dec!(1),
                buy_weights: [60, 40],
                sell_weights: [30, 70],
            },
        }
    }
}

/// Parameters for every policy in the population
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub trend: TrendConfig,
    pub anti_trend: TrendConfig,
    pub tiered: TieredConfig,
}

/// Build an agent of the given kind with a fresh account
pub fn build_agent(
    kind: AgentKind,
    initial_balance: Balance,
    config: &StrategyConfig,
) -> Result<Box<dyn Agent>> {
    let account = Account::new(initial_balance);

    let agent: Box<dyn Agent> = match kind {
        AgentKind::Random => Box::new(RandomAgent::new(account)),
        AgentKind::Trend => Box::new(TrendAgent::new(account, &config.trend)?),
        AgentKind::AntiTrend => Box::new(AntiTrendAgent::new(account, &config.anti_trend)?),
        AgentKind::Custom => Box::new(TieredAgent::new(account, &config.tiered)?),
    };

    Ok(agent)
}
