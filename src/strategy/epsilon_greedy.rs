use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::EpsilonGreedyConfig;
use crate::error::{Result, QLearningError};
use crate::strategy::ActionSelection;

/// Epsilon-greedy action selection
///
/// With probability `epsilon` an action is drawn uniformly from the
/// candidates; otherwise the action with the highest estimate is returned,
/// and ties between several maxima are broken uniformly at random.
///
/// The random source is a type parameter so tests can inject a seeded
/// generator.
///
/// # Example
///
/// ```rust
/// use qlearning::strategy::{ActionSelection, EpsilonGreedy};
///
/// let mut strategy = EpsilonGreedy::with_seed(0.0, 0.999, 7);
/// let action = strategy.choose_action(&"s0", &["left", "right"], &[0.2, 1.0]).unwrap();
/// assert_eq!(action, "right");
/// ```
#[derive(Clone, Debug)]
pub struct EpsilonGreedy<R: Rng = StdRng> {
    epsilon: f32,
    decrease_factor: f32,
    rng: R,
}

impl EpsilonGreedy<StdRng> {
    /// Create a strategy seeded from system entropy
    pub fn new(epsilon: f32, decrease_factor: f32) -> Self {
        Self::with_rng(epsilon, decrease_factor, StdRng::from_entropy())
    }

    /// Create a deterministic strategy
    pub fn with_seed(epsilon: f32, decrease_factor: f32, seed: u64) -> Self {
        Self::with_rng(epsilon, decrease_factor, StdRng::seed_from_u64(seed))
    }
}

impl Default for EpsilonGreedy<StdRng> {
    fn default() -> Self {
        let config = EpsilonGreedyConfig::default();
        Self::new(config.epsilon, config.decrease_factor)
    }
}

impl<R: Rng> EpsilonGreedy<R> {
    pub fn with_rng(epsilon: f32, decrease_factor: f32, rng: R) -> Self {
        EpsilonGreedy {
            epsilon,
            decrease_factor,
            rng,
        }
    }

    /// Create a strategy from a validated configuration
    pub fn from_config(config: &EpsilonGreedyConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config.epsilon, config.decrease_factor, rng))
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    pub fn decrease_factor(&self) -> f32 {
        self.decrease_factor
    }

    fn exploit<A: Clone>(&mut self, actions: &[A], rewards: &[f32]) -> Result<A> {
        let best_reward = rewards.iter().copied().fold(f32::NAN, f32::max);
        if best_reward.is_nan() {
            return Err(QLearningError::NumericalError("No comparable rewards".to_string()));
        }

        let best: Vec<usize> = rewards
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == best_reward)
            .map(|(i, _)| i)
            .collect();

        let index = match best.as_slice() {
            [only] => *only,
            tied => *tied
                .choose(&mut self.rng)
                .ok_or_else(|| QLearningError::NumericalError("No maximal reward".to_string()))?,
        };
        Ok(actions[index].clone())
    }
}

impl<S, A: Clone, R: Rng> ActionSelection<S, A> for EpsilonGreedy<R> {
    fn choose_action(&mut self, _state: &S, actions: &[A], rewards: &[f32]) -> Result<A> {
        if actions.is_empty() {
            return Err(QLearningError::EmptyActions);
        }
        if actions.len() != rewards.len() {
            return Err(QLearningError::dimension_mismatch(actions.len(), rewards.len()));
        }

        if self.rng.gen::<f32>() < self.epsilon {
            trace!(epsilon = self.epsilon, "exploring");
            actions
                .choose(&mut self.rng)
                .cloned()
                .ok_or(QLearningError::EmptyActions)
        } else {
            self.exploit(actions, rewards)
        }
    }

    /// Squares epsilon before scaling it, so exploration fades much faster
    /// than a plain geometric decay.
    fn update(&mut self) {
        let previous = self.epsilon;
        self.epsilon *= self.epsilon * self.decrease_factor;
        debug!(previous, epsilon = self.epsilon, "decayed exploration rate");
    }

    fn exploration_rate(&self) -> Option<f32> {
        Some(self.epsilon)
    }
}

/// Builder pattern for EpsilonGreedy
pub struct EpsilonGreedyBuilder {
    config: EpsilonGreedyConfig,
    seed: Option<u64>,
}

impl EpsilonGreedyBuilder {
    pub fn new() -> Self {
        EpsilonGreedyBuilder {
            config: EpsilonGreedyConfig::default(),
            seed: None,
        }
    }

    pub fn epsilon(mut self, epsilon: f32) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    pub fn decrease_factor(mut self, decrease_factor: f32) -> Self {
        self.config.decrease_factor = decrease_factor;
        self
    }

    pub fn config(mut self, config: EpsilonGreedyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<EpsilonGreedy> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        EpsilonGreedy::from_config(&self.config, rng)
    }
}

impl Default for EpsilonGreedyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
