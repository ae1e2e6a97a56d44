//! Report - results of a finished run
//!
//! Per-agent snapshots (order, kind, balance, inventory), JSON output and the
//! profit ledger, a CSV file that gets one row per reported agent per run.

use agora_agents::{Agent, AgentKind};
use agora_core::{Balance, Holding, Price, Product, ProductId};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SimulationConfig;
use crate::error::Result;

/// Final state of one agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReport {
    pub order: u32,
    pub kind: AgentKind,
    pub balance: Balance,
    pub inventory: Vec<Holding>,
    /// Balance plus held units at the final price
    pub equity: Balance,
}

impl AgentReport {
    pub fn from_agent(agent: &dyn Agent, product: &Product) -> Self {
        let account = agent.account();
        Self {
            order: account.order(),
            kind: agent.kind(),
            balance: account.balance(),
            inventory: account.inventory(),
            equity: account.equity(product.id(), product.price()),
        }
    }

    /// Units held of a product
    pub fn stock_of(&self, product_id: &ProductId) -> u64 {
        self.inventory
            .iter()
            .find(|h| &h.product_id == product_id)
            .map_or(0, |h| h.stock)
    }
}

/// Simulation results
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResults {
    /// Ticks run
    pub ticks: u64,
    /// Product state after the last commit
    pub product: Product,
    /// Committed price of every tick
    pub price_history: Vec<Price>,
    /// Executed buys over the run
    pub total_buys: u64,
    /// Executed sells over the run
    pub total_sells: u64,
    /// Trades refused by eligibility over the run
    pub total_refused: u64,
    /// Agents in trading order
    pub agents: Vec<AgentReport>,
}

impl SimulationResults {
    /// Reports of every agent of one kind
    pub fn by_kind(&self, kind: AgentKind) -> impl Iterator<Item = &AgentReport> {
        self.agents.iter().filter(move |a| a.kind == kind)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Log one line per agent
    pub fn log_summary(&self) {
        for agent in &self.agents {
            log::info!(
                "[RESULT] #{} {} balance={} stock={} equity={}",
                agent.order,
                agent.kind,
                agent.balance,
                agent.stock_of(self.product.id()),
                agent.equity
            );
        }
    }
}

/// Appends `kind,balance,stock` rows to a CSV file
#[derive(Debug, Clone)]
pub struct ProfitLedger {
    path: PathBuf,
    kind: AgentKind,
}

impl ProfitLedger {
    pub fn new(path: impl Into<PathBuf>, kind: AgentKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Ledger described by the report section, if one is configured
    pub fn from_config(config: &SimulationConfig) -> Option<Self> {
        config
            .report
            .profit_csv
            .as_ref()
            .map(|path| Self::new(path.clone(), config.report.profit_kind))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row per agent of the ledger's kind; returns rows written
    pub fn append(&self, results: &SimulationResults) -> Result<usize> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut rows = 0;
        for agent in results.by_kind(self.kind) {
            writeln!(
                file,
                "{},{},{}",
                agent.kind,
                agent.balance,
                agent.stock_of(results.product.id())
            )?;
            rows += 1;
        }

        log::info!(
            "Appended {} {} rows to {}",
            rows,
            self.kind,
            self.path.display()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::ProductSpec;
    use rust_decimal_macros::dec;

    fn create_results() -> SimulationResults {
        let product = Product::new(ProductSpec::default()).unwrap();
        let holding = Holding {
            product_id: product.id().clone(),
            stock: 2,
        };

        SimulationResults {
            ticks: 1,
            price_history: vec![product.price()],
            product,
            total_buys: 2,
            total_sells: 0,
            total_refused: 0,
            agents: vec![
                AgentReport {
                    order: 1,
                    kind: AgentKind::Custom,
                    balance: dec!(600),
                    inventory: vec![holding],
                    equity: dec!(1000),
                },
                AgentReport {
                    order: 2,
                    kind: AgentKind::Random,
                    balance: dec!(1000),
                    inventory: Vec::new(),
                    equity: dec!(1000),
                },
            ],
        }
    }

    #[test]
    fn test_by_kind() {
        let results = create_results();
        assert_eq!(results.by_kind(AgentKind::Custom).count(), 1);
        assert_eq!(results.by_kind(AgentKind::Trend).count(), 0);
    }

    #[test]
    fn test_json_contains_agents() {
        let json = create_results().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["agents"].as_array().unwrap().len(), 2);
        assert_eq!(value["agents"][0]["kind"], "custom");
        assert_eq!(value["product"]["id"], "GC1");
    }

    #[test]
    fn test_profit_ledger_appends() {
        let path = std::env::temp_dir().join(format!(
            "agora_profit_ledger_{}.csv",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let ledger = ProfitLedger::new(&path, AgentKind::Custom);
        let results = create_results();

        assert_eq!(ledger.append(&results).unwrap(), 1);
        assert_eq!(ledger.append(&results).unwrap(), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "custom,600,2\ncustom,600,2\n");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_ledger_from_config() {
        let mut config = SimulationConfig::default();
        assert!(ProfitLedger::from_config(&config).is_none());

        config.report.profit_csv = Some(PathBuf::from("profit.csv"));
        let ledger = ProfitLedger::from_config(&config).unwrap();
        assert_eq!(ledger.path(), Path::new("profit.csv"));
    }
}
