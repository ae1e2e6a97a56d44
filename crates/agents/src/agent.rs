//! Agent Trait
//!
//! Core trait that every trading agent implements.

use agora_core::{Action, Product};
use rand::RngCore;

use crate::account::Account;
use crate::error::Result;
use crate::kind::AgentKind;

/// Core trait for all agents
///
/// Agents observe one product's current and last committed price and decide an
/// action. Random draws come from the simulation's single random stream so a
/// seeded run is reproducible.
pub trait Agent: Send {
    /// Policy this agent follows
    fn kind(&self) -> AgentKind;

    fn account(&self) -> &Account;

    fn account_mut(&mut self) -> &mut Account;

    /// Decide what to do on this tick
    fn decide(&mut self, product: &Product, rng: &mut dyn RngCore) -> Action;

    /// Order rank (0 until assigned)
    fn order(&self) -> u32 {
        self.account().order()
    }

    /// Assign the order rank; fails if already assigned
    fn assign_order(&mut self, order: u32) -> Result<()> {
        self.account_mut().assign_order(order)
    }

    /// Execute a decided action against the agent's own account
    ///
    /// See [`Account::trade`].
    fn trade(&mut self, action: Action, product: &Product) -> bool {
        self.account_mut().trade(action, product)
    }
}
