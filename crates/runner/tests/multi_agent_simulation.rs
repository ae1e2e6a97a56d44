//! Multi-Agent Simulation Integration Test
//!
//! Tests the full market simulation with:
//! - Population bootstrap (shuffle + order assignment)
//! - Random, trend, anti-trend and tiered agents
//! - The two-phase tick loop and price feedback

use agora_agents::{
    Account, Agent, AgentKind, RandomAgent, StrategyConfig, TieredAgent, TieredConfig,
};
use agora_core::{Action, Market, Price, Product, ProductId, ProductSpec};
use agora_runner::{
    SimulationBootstrap, SimulationConfig, SimulationError, Simulation,
    bootstrap::assign_orders,
};
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn seeded(seed: u64, ticks: u64) -> SimulationConfig {
    SimulationConfig {
        seed: Some(seed),
        ticks,
        ..Default::default()
    }
}

fn single_product_market(spec: ProductSpec) -> (Market, ProductId) {
    let product = Product::new(spec).unwrap();
    let id = product.id().clone();
    (Market::with_products(vec![product]).unwrap(), id)
}

/// Always buys and records the prices it observed
struct ObservingBuyer {
    account: Account,
    seen: Arc<Mutex<Vec<(u32, Price, Price)>>>,
}

impl Agent for ObservingBuyer {
    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }

    fn account(&self) -> &Account {
        &self.account
    }

    fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn decide(&mut self, product: &Product, _rng: &mut dyn RngCore) -> Action {
        self.seen.lock().unwrap().push((
            self.account.order(),
            product.price(),
            product.last_price(),
        ));
        Action::Buy
    }
}

/// Test that simulation can be created and run
#[test]
fn test_simulation_runs() {
    init_logging();

    let mut sim = Simulation::with_config(&seeded(42, 200)).unwrap();
    let results = sim.run().unwrap();

    assert_eq!(results.ticks, 200);
    assert_eq!(results.agents.len(), 100);
    assert!(results.total_buys > 0);
    assert!(results.product.price() > dec!(0));
    assert_eq!(results.product.last_price(), results.product.price());
}

/// Test bootstrap creates agents correctly
#[test]
fn test_bootstrap_creates_agents() {
    let bootstrap = SimulationBootstrap::with_config(&seeded(1, 10)).unwrap();

    assert_eq!(bootstrap.agents.len(), 100);
    assert_eq!(bootstrap.agents_of(AgentKind::Custom).len(), 1);

    let mut orders: Vec<u32> = bootstrap.agents.iter().map(|a| a.order()).collect();
    orders.sort_unstable();
    assert_eq!(orders, (1..=100).collect::<Vec<u32>>());
}

/// Same seed, same run
#[test]
fn test_deterministic_with_seed() {
    let first = Simulation::with_config(&seeded(999, 300))
        .unwrap()
        .run()
        .unwrap();
    let second = Simulation::with_config(&seeded(999, 300))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(first.price_history, second.price_history);
    assert_eq!(first.agents, second.agents);
    assert_eq!(first.total_buys, second.total_buys);
    assert_eq!(first.total_sells, second.total_sells);
}

/// Later agents see earlier agents' price impact; everyone shares the baseline
#[test]
fn test_intra_tick_price_visibility() {
    let (market, product_id) = single_product_market(ProductSpec::default());
    let seen = Arc::new(Mutex::new(Vec::new()));

    let mut agents: Vec<Box<dyn Agent>> = (0..2)
        .map(|_| {
            Box::new(ObservingBuyer {
                account: Account::default(),
                seen: Arc::clone(&seen),
            }) as Box<dyn Agent>
        })
        .collect();
    assign_orders(&mut agents).unwrap();

    let mut sim =
        Simulation::new(market, product_id, agents, StdRng::seed_from_u64(1), 2).unwrap();

    let first = sim.tick().unwrap();
    assert_eq!(first.buys, 2);
    assert_eq!(first.opening_price, dec!(200));
    // 200 * 1.005 * 1.005
    assert_eq!(first.price, dec!(202.005));

    let second = sim.tick().unwrap();
    assert_eq!(second.opening_price, dec!(202.005));

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            (1, dec!(200), dec!(200)),
            (2, dec!(201), dec!(200)),
            (1, dec!(202.005), dec!(202.005)),
            (2, dec!(203.015025), dec!(202.005)),
        ]
    );
}

/// One BUY: balance down by the pre-trade price, stock moves one unit
#[test]
fn test_buy_effects() {
    let (market, product_id) = single_product_market(ProductSpec::default());
    let mut agents: Vec<Box<dyn Agent>> = vec![Box::new(RandomAgent::default())];
    assign_orders(&mut agents).unwrap();

    let mut sim =
        Simulation::new(market, product_id.clone(), agents, StdRng::seed_from_u64(1), 1).unwrap();
    let results = sim.run().unwrap();

    assert_eq!(results.total_buys, 1);
    assert_eq!(results.product.price(), dec!(201.0));
    assert_eq!(results.product.stock(), 99_999);
    assert_eq!(results.agents[0].balance, dec!(800));
    assert_eq!(results.agents[0].stock_of(&product_id), 1);
}

/// Balance equal to the price is not enough to buy
#[test]
fn test_buy_refused_at_equal_balance() {
    let (market, product_id) = single_product_market(ProductSpec {
        price: dec!(1000),
        ..Default::default()
    });
    let mut agents: Vec<Box<dyn Agent>> = vec![Box::new(RandomAgent::default())];
    assign_orders(&mut agents).unwrap();

    let mut sim =
        Simulation::new(market, product_id.clone(), agents, StdRng::seed_from_u64(1), 1).unwrap();
    let result = sim.tick().unwrap();

    assert_eq!(result.buys, 0);
    assert_eq!(result.refused, 1);
    assert_eq!(result.price, dec!(1000));

    let results = sim.results().unwrap();
    assert_eq!(results.agents[0].balance, dec!(1000));
    assert!(results.agents[0].inventory.is_empty());
    assert_eq!(results.product.stock(), 100_000);
}

/// One SELL from a liquidating tiered agent
#[test]
fn test_sell_effects() {
    let mut product = Product::new(ProductSpec::default()).unwrap();
    let product_id = product.id().clone();

    // Order 150 lands in the end tier
    let mut liquidator = TieredAgent::new(Account::default(), &TieredConfig::default()).unwrap();
    liquidator.assign_order(150).unwrap();
    assert!(liquidator.trade(Action::Buy, &product));
    product.buy().unwrap();
    product.commit_price();

    let agents: Vec<Box<dyn Agent>> = vec![Box::new(liquidator)];
    let market = Market::with_products(vec![product]).unwrap();
    let mut sim =
        Simulation::new(market, product_id.clone(), agents, StdRng::seed_from_u64(1), 2).unwrap();

    let first = sim.tick().unwrap();
    assert_eq!(first.sells, 1);
    // 201 * 0.995
    assert_eq!(first.price, dec!(199.995));

    let results = sim.results().unwrap();
    // 1000 - 200 + 201
    assert_eq!(results.agents[0].balance, dec!(1001));
    assert_eq!(results.agents[0].stock_of(&product_id), 0);
    assert_eq!(results.product.stock(), 100_000);

    // Nothing left to liquidate
    let second = sim.tick().unwrap();
    assert_eq!(second.sells, 0);
    assert_eq!(second.refused, 0);
    assert_eq!(second.price, dec!(199.995));
}

/// Unknown agent kinds fail at construction
#[test]
fn test_unknown_kind_fails_setup() {
    let mut config = seeded(1, 10);
    config.population.agents[0].kind = "market_maker".to_string();

    let result = Simulation::with_config(&config);
    assert!(matches!(result, Err(SimulationError::Agent(_))));
}

/// The single custom agent shows up in the report with a valid rank
#[test]
fn test_custom_agent_is_reported() {
    let mut sim = Simulation::with_config(&seeded(5, 100)).unwrap();
    let results = sim.run().unwrap();

    let custom: Vec<_> = results.by_kind(AgentKind::Custom).collect();
    assert_eq!(custom.len(), 1);
    assert!(custom[0].order >= 1 && custom[0].order <= 100);
}

#[test]
fn test_strategy_config_round_trips_through_json() {
    let config = SimulationConfig {
        strategy: StrategyConfig::default(),
        ..seeded(3, 5)
    };
    let json = serde_json::to_string(&config).unwrap();
    let parsed = agora_runner::config::load_config_from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
