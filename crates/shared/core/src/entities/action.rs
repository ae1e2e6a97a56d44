use serde::{Deserialize, Serialize};

/// What an agent decided to do on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Buy,
    Sell,
    Nothing,
}

impl Action {
    /// All actions, in declaration order
    pub const ALL: [Action; 3] = [Action::Buy, Action::Sell, Action::Nothing];

    /// Returns true for actions that touch balance and inventory
    pub fn is_trade(&self) -> bool {
        !matches!(self, Action::Nothing)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Buy => write!(f, "BUY"),
            Action::Sell => write!(f, "SELL"),
            Action::Nothing => write!(f, "NOTHING"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_trade() {
        assert!(Action::Buy.is_trade());
        assert!(Action::Sell.is_trade());
        assert!(!Action::Nothing.is_trade());
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Buy.to_string(), "BUY");
        assert_eq!(Action::Sell.to_string(), "SELL");
        assert_eq!(Action::Nothing.to_string(), "NOTHING");
    }
}
