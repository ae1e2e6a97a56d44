use agora_agents::{AgentKind, DEFAULT_BALANCE, StrategyConfig};
use agora_core::{Balance, ProductSpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A number of agents sharing one policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentGroup {
    /// Policy name, parsed with [`AgentKind::from_str`](std::str::FromStr)
    pub kind: String,
    pub count: usize,
}

impl AgentGroup {
    pub fn new(kind: AgentKind, count: usize) -> Self {
        Self {
            kind: kind.to_string(),
            count,
        }
    }
}

/// Population setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Balance every agent starts with
    pub initial_balance: Balance,
    /// Groups of agents, shuffled together before the run
    pub agents: Vec<AgentGroup>,
}

impl PopulationConfig {
    pub fn total(&self) -> usize {
        self.agents.iter().map(|g| g.count).sum()
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            initial_balance: DEFAULT_BALANCE,
            agents: vec![
                AgentGroup::new(AgentKind::Random, 51),
                AgentGroup::new(AgentKind::Trend, 24),
                AgentGroup::new(AgentKind::AntiTrend, 24),
                AgentGroup::new(AgentKind::Custom, 1),
            ],
        }
    }
}

/// Result persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// CSV file profit rows are appended to (disabled when absent)
    pub profit_csv: Option<PathBuf>,
    /// Agents of this kind get a profit row
    pub profit_kind: AgentKind,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            profit_csv: None,
            profit_kind: AgentKind::Custom,
        }
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of ticks to run
    pub ticks: u64,
    /// Seed for the random stream (entropy when absent)
    pub seed: Option<u64>,
    /// The traded product
    pub product: ProductSpec,
    pub population: PopulationConfig,
    pub strategy: StrategyConfig,
    pub report: ReportConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks: 1000,
            seed: None,
            product: ProductSpec::default(),
            population: PopulationConfig::default(),
            strategy: StrategyConfig::default(),
            report: ReportConfig::default(),
        }
    }
}
