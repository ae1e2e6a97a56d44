//! Decision Rules
//!
//! Weighted two-way draws and the threshold rule shared by the trend,
//! anti-trend and tiered agents.

use agora_core::{Action, Percent, Product};
use rand::RngCore;
use rand::distributions::{Distribution, WeightedIndex};

use crate::error::{AgentError, Result};

/// Weighted choice between one action and doing nothing
///
/// Weights are `[action, nothing]`, e.g. `[75, 25]` acts 75% of the time.
#[derive(Debug, Clone)]
pub struct WeightedDraw {
    action: Action,
    weights: [u32; 2],
    index: WeightedIndex<u32>,
}

impl WeightedDraw {
    pub fn new(action: Action, weights: [u32; 2]) -> Result<Self> {
        let index = WeightedIndex::new(weights).map_err(|e| {
            AgentError::InvalidWeights(format!("{} {:?}: {}", action, weights, e))
        })?;

        Ok(Self {
            action,
            weights,
            index,
        })
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn weights(&self) -> [u32; 2] {
        self.weights
    }

    pub fn sample(&self, rng: &mut dyn RngCore) -> Action {
        match self.index.sample(rng) {
            0 => self.action,
            _ => Action::Nothing,
        }
    }
}

/// Condition on the percentage price change since the last commit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// Fires when `pct_change >= at_least`
    Rising { at_least: Percent },
    /// Fires when `pct_change <= at_most`
    Falling { at_most: Percent },
}

impl Signal {
    pub fn fires(&self, pct_change: Percent) -> bool {
        match *self {
            Signal::Rising { at_least } => pct_change >= at_least,
            Signal::Falling { at_most } => pct_change <= at_most,
        }
    }
}

/// Buy on signal, otherwise maybe sell
///
/// When the signal fires draw BUY-or-NOTHING, else draw SELL-or-NOTHING.
#[derive(Debug, Clone)]
pub struct TrendRule {
    signal: Signal,
    on_signal: WeightedDraw,
    otherwise: WeightedDraw,
}

impl TrendRule {
    pub fn new(signal: Signal, buy_weights: [u32; 2], sell_weights: [u32; 2]) -> Result<Self> {
        Ok(Self {
            signal,
            on_signal: WeightedDraw::new(Action::Buy, buy_weights)?,
            otherwise: WeightedDraw::new(Action::Sell, sell_weights)?,
        })
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn decide(&self, product: &Product, rng: &mut dyn RngCore) -> Action {
        if self.signal.fires(product.pct_change()) {
            self.on_signal.sample(rng)
        } else {
            self.otherwise.sample(rng)
        }
    }
}
