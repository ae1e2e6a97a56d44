use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AgentError;

/// Closed set of agent policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Uniform draw, always buys
    Random,
    /// Momentum follower
    Trend,
    /// Contrarian
    AntiTrend,
    /// Position-tiered agent
    Custom,
}

impl AgentKind {
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Random,
        AgentKind::Trend,
        AgentKind::AntiTrend,
        AgentKind::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Trend => "trend",
            AgentKind::AntiTrend => "anti_trend",
            AgentKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "trend" => Ok(AgentKind::Trend),
            "anti_trend" | "antitrend" | "anti-trend" => Ok(AgentKind::AntiTrend),
            "custom" | "tiered" => Ok(AgentKind::Custom),
            other => Err(AgentError::UnknownKind(other.to_string())),
        }
    }
}
