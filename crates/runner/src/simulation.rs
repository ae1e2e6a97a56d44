//! Simulation - the tick loop
//!
//! Each tick has exactly two phases:
//! 1. **Action**: every agent, in its fixed order, decides and trades against
//!    the shared product. A successful trade is mirrored on the product, so the
//!    new price is visible to every later agent of the same tick.
//! 2. **Commit**: `commit_price` runs once, moving the `last_price` baseline.

use agora_agents::Agent;
use agora_core::{Action, Market, Price, Product, ProductId};
use rand::rngs::StdRng;
use serde::Serialize;

use crate::bootstrap::SimulationBootstrap;
use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::report::{AgentReport, SimulationResults};

/// Result of a single tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickResult {
    /// Tick number (0-based)
    pub tick: u64,
    /// Baseline every agent compared against (`last_price` at tick start)
    pub opening_price: Price,
    /// Committed price at tick end
    pub price: Price,
    /// Executed buys
    pub buys: u64,
    /// Executed sells
    pub sells: u64,
    /// Trades decided but refused by eligibility
    pub refused: u64,
}

/// Full market simulation over one product
pub struct Simulation {
    /// Registry holding the traded product
    market: Market,
    /// Product every agent trades
    product_id: ProductId,
    /// Agents in their fixed trading order
    agents: Vec<Box<dyn Agent>>,
    /// Single random stream for every draw
    rng: StdRng,
    /// Ticks to run
    ticks: u64,
    /// Next tick number
    tick: u64,
    /// Committed price of every tick
    price_history: Vec<Price>,
    total_buys: u64,
    total_sells: u64,
    total_refused: u64,
}

impl Simulation {
    /// Create a simulation from an already prepared market and population
    ///
    /// Every agent must have its order assigned and the product must be
    /// registered on the market.
    pub fn new(
        market: Market,
        product_id: ProductId,
        agents: Vec<Box<dyn Agent>>,
        rng: StdRng,
        ticks: u64,
    ) -> Result<Self> {
        market.get(&product_id)?;

        if let Some(agent) = agents.iter().find(|a| !a.account().has_order()) {
            return Err(SimulationError::Setup(format!(
                "{} agent has no order assigned",
                agent.kind()
            )));
        }

        Ok(Self {
            market,
            product_id,
            agents,
            rng,
            ticks,
            tick: 0,
            price_history: Vec::with_capacity(ticks as usize),
            total_buys: 0,
            total_sells: 0,
            total_refused: 0,
        })
    }

    /// Create a simulation from configuration
    pub fn with_config(config: &SimulationConfig) -> Result<Self> {
        let bootstrap = SimulationBootstrap::with_config(config)?;
        Self::from_bootstrap(bootstrap, config.ticks)
    }

    /// Create a simulation from a finished bootstrap
    pub fn from_bootstrap(bootstrap: SimulationBootstrap, ticks: u64) -> Result<Self> {
        Self::new(
            bootstrap.market,
            bootstrap.product_id,
            bootstrap.agents,
            bootstrap.rng,
            ticks,
        )
    }

    /// Agents in trading order
    pub fn agents(&self) -> &[Box<dyn Agent>] {
        &self.agents
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    /// The traded product
    pub fn product(&self) -> Result<&Product> {
        Ok(self.market.get(&self.product_id)?)
    }

    /// Number of ticks already run
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Committed price of every tick run so far
    pub fn price_history(&self) -> &[Price] {
        &self.price_history
    }

    /// Whether the configured tick count has been reached
    pub fn is_finished(&self) -> bool {
        self.tick >= self.ticks
    }

    /// Run a single tick
    ///
    /// Errors from the product (out of stock, price leaving its allowed range)
    /// are fatal and leave the tick uncommitted. The failing agent's account has
    /// already been settled at that point while the product has not moved, so
    /// agent and product state disagree by one unit after such an error.
    pub fn tick(&mut self) -> Result<TickResult> {
        let product = self.market.get_mut(&self.product_id)?;

        let mut result = TickResult {
            tick: self.tick,
            opening_price: product.last_price(),
            price: product.price(),
            buys: 0,
            sells: 0,
            refused: 0,
        };

        // Action phase
        for agent in self.agents.iter_mut() {
            let action = agent.decide(product, &mut self.rng);
            log::debug!(
                "Tick {}: agent #{} ({}) decided {} at {}",
                self.tick,
                agent.order(),
                agent.kind(),
                action,
                product.price()
            );

            if !agent.trade(action, product) {
                if action.is_trade() {
                    result.refused += 1;
                }
                continue;
            }

            // Stock is large relative to any run length, so with the balance
            // gate already passed an out-of-stock here means a broken setup.
            match action {
                Action::Buy => {
                    product.buy()?;
                    result.buys += 1;
                }
                Action::Sell => {
                    product.sell()?;
                    result.sells += 1;
                }
                Action::Nothing => {}
            }
        }

        // Commit phase
        product.commit_price();
        result.price = product.price();

        self.price_history.push(result.price);
        self.total_buys += result.buys;
        self.total_sells += result.sells;
        self.total_refused += result.refused;
        self.tick += 1;

        if self.tick % 100 == 0 {
            log::info!(
                "Tick {}: price={}, buys={}, sells={}",
                self.tick,
                result.price,
                result.buys,
                result.sells
            );
        }

        Ok(result)
    }

    /// Run the remaining ticks and collect results
    pub fn run(&mut self) -> Result<SimulationResults> {
        log::info!(
            "Starting simulation: {} agents, {} ticks",
            self.agents.len(),
            self.ticks
        );

        while !self.is_finished() {
            self.tick()?;
        }

        let results = self.results()?;
        log::info!(
            "Simulation finished: {} buys, {} sells, final price {}",
            results.total_buys,
            results.total_sells,
            results.product.price()
        );
        Ok(results)
    }

    /// Snapshot of the current state
    pub fn results(&self) -> Result<SimulationResults> {
        let product = self.product()?;
        let agents = self
            .agents
            .iter()
            .map(|agent| AgentReport::from_agent(&**agent, product))
            .collect();

        Ok(SimulationResults {
            ticks: self.tick,
            product: product.clone(),
            price_history: self.price_history.clone(),
            total_buys: self.total_buys,
            total_sells: self.total_sells,
            total_refused: self.total_refused,
            agents,
        })
    }
}
