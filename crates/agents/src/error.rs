use thiserror::Error;

/// Errors raised while building or configuring agents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Unknown agent kind: {0}")]
    UnknownKind(String),

    #[error("Invalid draw weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid tier thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Agent order must be positive")]
    InvalidOrder,

    #[error("Agent order already assigned ({0})")]
    OrderAlreadyAssigned(u32),
}

pub type Result<T> = std::result::Result<T, AgentError>;
