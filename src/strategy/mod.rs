//! # Action-Selection Strategies
//!
//! A strategy picks one action out of a candidate set given the learner's
//! current reward estimates, and owns whatever exploration state it needs.
//! The learner only talks to strategies through [`ActionSelection`], so a
//! softmax or UCB variant can be dropped in without touching it.
//!
//! ## Available Strategies
//!
//! - **EpsilonGreedy**: explore uniformly with probability epsilon, otherwise
//!   exploit the best estimate with random tie-breaking

use crate::error::Result;

mod epsilon_greedy;
pub use epsilon_greedy::{EpsilonGreedy, EpsilonGreedyBuilder};

/// Trait for action-selection strategies
pub trait ActionSelection<S, A> {
    /// Choose one of `actions`; `rewards[i]` is the estimate for `actions[i]`
    fn choose_action(&mut self, state: &S, actions: &[A], rewards: &[f32]) -> Result<A>;

    /// Decay the exploration state, typically once per episode
    fn update(&mut self);

    /// Get the current exploration rate (if applicable)
    fn exploration_rate(&self) -> Option<f32> {
        None
    }
}
