use agora_agents::{AgentError, AgentKind};
use agora_core::{MarketError, Product};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::types::SimulationConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Population is empty")]
    EmptyPopulation,
    #[error("Invalid agent configuration: {0}")]
    Agent(#[from] AgentError),
    #[error("Invalid product configuration: {0}")]
    Product(#[from] MarketError),
}

/// Load simulation configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: SimulationConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<SimulationConfig, ConfigError> {
    let config: SimulationConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<SimulationConfig, ConfigError> {
    let default_config = include_str!("simulation_config.json");
    load_config_from_str(default_config)
}

impl SimulationConfig {
    /// Validate the configuration
    ///
    /// Checks everything that would otherwise only fail once the run is being
    /// set up: agent kinds, draw weights, tier thresholds and product parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population.total() == 0 {
            return Err(ConfigError::EmptyPopulation);
        }

        for group in &self.population.agents {
            AgentKind::from_str(&group.kind)?;
        }

        for kind in AgentKind::ALL {
            agora_agents::build_agent(kind, self.population.initial_balance, &self.strategy)?;
        }

        Product::new(self.product.clone())?;
        Ok(())
    }
}
