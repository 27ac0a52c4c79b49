//! Configuration records for strategies and learners.
//!
//! Every field has a default, so a partial JSON document such as
//! `{"gamma": 0.95}` is a complete configuration.

use serde::{Serialize, Deserialize};
use crate::error::{Result, QLearningError};
use crate::schedule::LearningRate;

/// Episodes covered by one step of the learning-rate decay
pub const ALPHA_DECAY_STEP: u64 = 100;

/// Configuration for [`EpsilonGreedy`](crate::strategy::EpsilonGreedy)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpsilonGreedyConfig {
    /// Initial exploration probability
    pub epsilon: f32,

    /// Multiplier applied by each decay step
    pub decrease_factor: f32,
}

impl Default for EpsilonGreedyConfig {
    fn default() -> Self {
        EpsilonGreedyConfig {
            epsilon: 0.1,
            decrease_factor: 0.999,
        }
    }
}

impl EpsilonGreedyConfig {
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("epsilon", self.epsilon)?;
        check_unit_interval("decrease_factor", self.decrease_factor)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration for [`QLearning`](crate::agent::QLearning)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QLearningConfig {
    /// Base learning rate, used when decay is disabled
    pub alpha: f32,

    /// Discount factor for future rewards
    pub gamma: f32,

    /// Use the per-episode step decay instead of `alpha`
    pub decrease_alpha: bool,

    /// Floor of the decayed learning rate
    pub decrease_alpha_min: f32,

    /// Multiplier applied every hundred episodes
    pub decrease_alpha_factor: f32,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        QLearningConfig {
            alpha: 0.1,
            gamma: 0.9,
            decrease_alpha: true,
            decrease_alpha_min: 0.005,
            decrease_alpha_factor: 0.85,
        }
    }
}

impl QLearningConfig {
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("alpha", self.alpha)?;
        check_unit_interval("gamma", self.gamma)?;
        check_unit_interval("decrease_alpha_min", self.decrease_alpha_min)?;
        check_unit_interval("decrease_alpha_factor", self.decrease_alpha_factor)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The learning-rate schedule described by this configuration
    pub fn learning_rate(&self) -> LearningRate {
        if self.decrease_alpha {
            LearningRate::step_decay(self.decrease_alpha_factor, self.decrease_alpha_min, ALPHA_DECAY_STEP)
        } else {
            LearningRate::constant(self.alpha)
        }
    }
}

fn check_unit_interval(name: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(QLearningError::InvalidParameter {
            name: name.to_string(),
            reason: format!("must be in [0, 1], got {}", value),
        })
    }
}
