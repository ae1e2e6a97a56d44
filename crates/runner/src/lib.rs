//! Agora Runner - Multi-Agent Market Simulation
//!
//! Orchestrates a population of agents trading one product:
//!
//! - **Config**: JSON configuration with embedded defaults
//! - **Bootstrap**: Market creation, population construction, shuffle and order assignment
//! - **Simulation**: The tick loop (action phase, then one price commit)
//! - **Report**: Per-agent results, JSON output and the profit ledger
//!
//! ## Architecture
//!
//! ```text
//!  ┌─────────────────────────── tick ───────────────────────────┐
//!  │                                                            │
//!  │   for agent in fixed order:                                │
//!  │       action = agent.decide(product)                       │
//!  │       if agent.trade(action, product):                     │
//!  │           product.buy() / product.sell()   ── price moves  │
//!  │                                                            │
//!  │   product.commit_price()                   ── last_price   │
//!  └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Later agents in a tick see the price impact of earlier ones, while every
//! agent compares against the same `last_price` until the commit.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod report;
pub mod simulation;

pub use bootstrap::SimulationBootstrap;
pub use config::{AgentGroup, ConfigError, PopulationConfig, ReportConfig, SimulationConfig};
pub use error::{Result, SimulationError};
pub use report::{AgentReport, ProfitLedger, SimulationResults};
pub use simulation::{Simulation, TickResult};
