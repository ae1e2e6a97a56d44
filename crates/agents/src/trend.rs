//! Trend Agent
//!
//! Momentum follower: when the price rose at least `threshold_pct` since the
//! last commit it buys with probability 0.75, otherwise it sells with
//! probability 0.20. Amplifies trends.

use agora_core::{Action, Product};
use rand::RngCore;

use crate::factory::TrendConfig;
use crate::rule::{Signal, TrendRule};
use crate::{Account, Agent, AgentKind, Result};

/// Trend-following agent
#[derive(Debug, Clone)]
pub struct TrendAgent {
    account: Account,
    rule: TrendRule,
}

impl TrendAgent {
    pub fn new(account: Account, config: &TrendConfig) -> Result<Self> {
        let rule = TrendRule::new(
            Signal::Rising {
                at_least: config.threshold_pct,
            },
            config.buy_weights,
            config.sell_weights,
        )?;

        Ok(Self { account, rule })
    }
}

impl Agent for TrendAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Trend
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

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::ProductSpec;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    fn create_agent() -> TrendAgent {
        TrendAgent::new(Account::default(), &TrendConfig::default()).unwrap()
    }

    fn product_with_change(price: &str) -> Product {
        Product::new(ProductSpec {
            price: price.parse().unwrap(),
            last_price: Some(dec!(100)),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rising_price_never_sells() {
        let mut agent = create_agent();
        let product = product_with_change("101");
        let mut rng = StdRng::seed_from_u64(42);

        let actions: Vec<Action> = (0..500).map(|_| agent.decide(&product, &mut rng)).collect();

        assert!(actions.iter().all(|a| *a != Action::Sell));
        assert!(actions.contains(&Action::Buy));
        assert!(actions.contains(&Action::Nothing));
    }

    #[test]
    fn test_flat_price_never_buys() {
        let mut agent = create_agent();
        let product = product_with_change("100.5");
        let mut rng = StdRng::seed_from_u64(42);

        let actions: Vec<Action> = (0..500).map(|_| agent.decide(&product, &mut rng)).collect();

        assert!(actions.iter().all(|a| *a != Action::Buy));
        assert!(actions.contains(&Action::Sell));
        assert!(actions.contains(&Action::Nothing));
    }

    #[test]
    fn test_falling_price_never_buys() {
        let mut agent = create_agent();
        let product = product_with_change("90");
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            assert_ne!(agent.decide(&product, &mut rng), Action::Buy);
        }
    }
}
