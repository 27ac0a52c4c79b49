//! # Tabular Q-Learning Agents
//!
//! This module provides the tabular Q-learning agent. The agent owns a
//! [`QTable`](crate::q_table::QTable) and a fixed action set, and delegates
//! every action choice to an [`ActionSelection`](crate::strategy::ActionSelection)
//! strategy supplied at construction.
//!
//! ## Core Concepts
//!
//! - **Q-Learning**: learning the value of state-action pairs from observed transitions
//! - **Bootstrap write**: the first visit to a pair stores the raw reward
//! - **Learning-rate decay**: an optional step schedule driven by the episode counter
//!
//! ## Example Usage
//!
//! ```rust
//! use qlearning::agent::QLearning;
//! use qlearning::config::QLearningConfig;
//! use qlearning::strategy::EpsilonGreedy;
//!
//! let strategy = EpsilonGreedy::with_seed(0.1, 0.999, 42);
//! let mut agent = QLearning::new(vec!["left", "right"], strategy, QLearningConfig::default()).unwrap();
//!
//! // The caller owns the episode loop and the environment
//! let action = agent.choose_action(&0).unwrap();
//! agent.learn(0, action, &1, 1.0, 0).unwrap();
//! ```
//!
//! The caller decides when exploration decays, usually once per episode
//! through [`QLearning::update_strategy`].

mod q_learning;
pub use q_learning::{QLearning, QLearningBuilder};
