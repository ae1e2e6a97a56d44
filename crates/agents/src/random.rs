//! Random Agent
//!
//! Draws an action uniformly from {BUY, SELL, NOTHING} every tick, then
//! discards the draw and buys. The unconditional buy is the observable
//! behaviour of this policy and is kept as is; the draw still consumes the
//! random stream so seeded runs line up with it.

use agora_core::{Action, Product};
use rand::RngCore;
use rand::seq::SliceRandom;

use crate::{Account, Agent, AgentKind};

/// Agent that always ends up buying
#[derive(Debug, Clone, Default)]
pub struct RandomAgent {
    account: Account,
}

impl RandomAgent {
    pub fn new(account: Account) -> Self {
        Self { account }
    }
}

impl Agent for RandomAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }

    fn account(&self) -> &Account {
        &self.account
    }

    fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn decide(&mut self, _product: &Product, rng: &mut dyn RngCore) -> Action {
        let drawn = Action::ALL.choose(rng).copied().unwrap_or(Action::Nothing);
        log::trace!("Agent #{} (random) drew {}", self.account.order(), drawn);
        Action::Buy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::ProductSpec;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_agent_always_buys() {
        let mut agent = RandomAgent::default();
        let product = Product::new(ProductSpec::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            assert_eq!(agent.decide(&product, &mut rng), Action::Buy);
        }
    }

    #[test]
    fn test_random_agent_consumes_random_stream() {
        let mut agent = RandomAgent::default();
        let product = Product::new(ProductSpec::default()).unwrap();

        let mut used = StdRng::seed_from_u64(1);
        let mut fresh = StdRng::seed_from_u64(1);
        agent.decide(&product, &mut used);

        assert_ne!(used.next_u64(), fresh.next_u64());
    }
}
