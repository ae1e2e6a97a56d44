//! Agora Agents
//!
//! Trading agents for the Agora market simulation.
//!
//! Every agent owns an [`Account`] (order rank, balance, inventory) and implements
//! [`Agent::decide`]. Trade execution is shared: [`Agent::trade`] checks eligibility
//! against the account and mutates it, and the caller applies the matching
//! product-side buy or sell when it returns `true`.
//!
//! # Agent Types
//!
//! - **RandomAgent**: draws a uniform action but always buys
//! - **TrendAgent**: buys rising prices, sells otherwise, never with certainty
//! - **AntiTrendAgent**: buys falling prices, sells otherwise
//! - **TieredAgent**: locks into a start/middle/end behaviour from its order rank
//!
//! ```text
//!  Product (price, last_price)
//!        │
//!        ▼
//!  Agent::decide ──► Action ──► Agent::trade ──► Account (balance, inventory)
//!                                    │ true
//!                                    ▼
//!                           Product::buy / Product::sell
//! ```

mod account;
mod agent;
mod error;
mod kind;
mod rule;

pub mod anti_trend;
pub mod factory;
pub mod random;
pub mod tiered;
pub mod trend;

pub use account::{Account, Eligibility, DEFAULT_BALANCE};
pub use agent::Agent;
pub use error::{AgentError, Result};
pub use kind::AgentKind;
pub use rule::{Signal, TrendRule, WeightedDraw};

pub use anti_trend::AntiTrendAgent;
pub use factory::{StrategyConfig, TieredConfig, TrendConfig, build_agent};
pub use random::RandomAgent;
pub use tiered::{Tier, TieredAgent};
pub use trend::TrendAgent;
