//! Bootstrap - Market and population setup
//!
//! Handles initial setup of the simulation:
//! - Registering the traded product on the market
//! - Building every agent group
//! - Shuffling the whole population once and assigning order ranks `1..=N`

use agora_agents::{Agent, AgentKind, StrategyConfig, build_agent};
use agora_core::{Balance, Market, Product, ProductId};
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::str::FromStr;

use crate::config::{PopulationConfig, SimulationConfig};
use crate::error::Result;

/// Create `count` agents of one kind
pub fn create_agents(
    kind: AgentKind,
    count: usize,
    initial_balance: Balance,
    strategy: &StrategyConfig,
) -> Result<Vec<Box<dyn Agent>>> {
    let mut agents = Vec::with_capacity(count);
    for _ in 0..count {
        agents.push(build_agent(kind, initial_balance, strategy)?);
    }
    Ok(agents)
}

/// Assign order ranks `1..=N` following the current vector order
pub fn assign_orders(agents: &mut [Box<dyn Agent>]) -> Result<()> {
    for (index, agent) in agents.iter_mut().enumerate() {
        let order = u32::try_from(index + 1).map_err(|_| {
            crate::SimulationError::Setup(format!("population too large: {}", index + 1))
        })?;
        agent.assign_order(order)?;
    }
    Ok(())
}

/// Build, shuffle and rank the full population
pub fn build_population(
    config: &PopulationConfig,
    strategy: &StrategyConfig,
    rng: &mut dyn RngCore,
) -> Result<Vec<Box<dyn Agent>>> {
    let mut agents: Vec<Box<dyn Agent>> = Vec::with_capacity(config.total());

    for group in &config.agents {
        let kind = AgentKind::from_str(&group.kind)?;
        agents.extend(create_agents(
            kind,
            group.count,
            config.initial_balance,
            strategy,
        )?);
        log::info!(
            "Created {} {} agents with balance {}",
            group.count,
            kind,
            config.initial_balance
        );
    }

    agents.shuffle(rng);
    assign_orders(&mut agents)?;

    Ok(agents)
}

/// Simulation bootstrap - sets up the market, the random stream and the agents
pub struct SimulationBootstrap {
    /// Market holding the traded product
    pub market: Market,
    /// Product every agent trades
    pub product_id: ProductId,
    /// Shuffled population with orders assigned
    pub agents: Vec<Box<dyn Agent>>,
    /// Random stream, already advanced past the shuffle
    pub rng: StdRng,
}

impl SimulationBootstrap {
    /// Create bootstrap with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&SimulationConfig::default())
    }

    /// Create bootstrap with custom configuration
    pub fn with_config(config: &SimulationConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let product = Product::new(config.product.clone())?;
        let product_id = product.id().clone();
        let mut market = Market::new();
        let registered = market.add(product)?;
        log::info!("Registered product {}", registered);

        let agents = build_population(&config.population, &config.strategy, &mut rng)?;
        log::info!("Population of {} agents shuffled and ranked", agents.len());

        Ok(Self {
            market,
            product_id,
            agents,
            rng,
        })
    }

    /// Get all agents of one kind
    pub fn agents_of(&self, kind: AgentKind) -> Vec<&dyn Agent> {
        self.agents
            .iter()
            .filter(|a| a.kind() == kind)
            .map(|a| &**a)
            .collect()
    }
}
