//! # qlearning - Tabular Q-Learning
//!
//! A small library for reinforcement learning over discrete, enumerable
//! state and action spaces. An agent learns a table mapping
//! `(state, action)` pairs to expected discounted reward with the
//! Q-learning update rule, and picks actions through a pluggable
//! exploration/exploitation strategy.
//!
//! ## Quick Start
//!
//! ```rust
//! use qlearning::agent::QLearningBuilder;
//! use qlearning::strategy::EpsilonGreedy;
//!
//! let mut agent = QLearningBuilder::new()
//!     .actions(vec![-1i32, 1])
//!     .strategy(EpsilonGreedy::with_seed(0.1, 0.999, 42))
//!     .gamma(0.9)
//!     .build()
//!     .unwrap();
//!
//! for episode in 0..10u64 {
//!     let mut position = 0i32;
//!     for _ in 0..20 {
//!         let step = agent.choose_action(&position).unwrap();
//!         let next = (position + step).clamp(0, 5);
//!         let reward = if next == 5 { 1.0 } else { 0.0 };
//!         agent.learn(position, step, &next, reward, episode).unwrap();
//!         position = next;
//!     }
//!     agent.update_strategy();
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`agent`] - The Q-learning agent and its builder
//! - [`config`] - Configuration records with defaults and JSON loading
//! - [`error`] - Error types and result handling
//! - [`q_table`] - The lazily-populated value table
//! - [`schedule`] - Learning-rate schedules
//! - [`strategy`] - Action-selection strategies (epsilon-greedy)
//! - [`types`] - State and action identifier traits

pub mod agent;
pub mod config;
pub mod error;
pub mod q_table;
pub mod schedule;
pub mod strategy;
pub mod types;

pub use agent::{QLearning, QLearningBuilder};
pub use error::{QLearningError, Result};
pub use strategy::{ActionSelection, EpsilonGreedy};

#[cfg(test)]
mod tests;
