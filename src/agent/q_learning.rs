use std::collections::HashSet;

use tracing::{debug, trace};

use crate::config::QLearningConfig;
use crate::error::{Result, QLearningError};
use crate::q_table::QTable;
use crate::schedule::LearningRate;
use crate::strategy::ActionSelection;
use crate::types::{Action, State};

/// Tabular Q-learning agent
///
/// Updates follow
/// `Q(s, a) := Q(s, a) + eta * (reward + gamma * max_a' Q(s', a') - Q(s, a))`,
/// except on the first visit to `(s, a)`, where the raw reward is stored
/// and no discounted future term is blended in.
pub struct QLearning<S: State, A: Action, P: ActionSelection<S, A>> {
    actions: Vec<A>,
    action_set: HashSet<A>,
    strategy: P,
    gamma: f32,
    learning_rate: LearningRate,
    q_table: QTable<S, A>,
}

impl<S: State, A: Action, P: ActionSelection<S, A>> QLearning<S, A, P> {
    /// Create a learner over a fixed action set
    pub fn new(actions: Vec<A>, strategy: P, config: QLearningConfig) -> Result<Self> {
        config.validate()?;
        if actions.is_empty() {
            return Err(QLearningError::EmptyActions);
        }

        let action_set: HashSet<A> = actions.iter().cloned().collect();
        if action_set.len() != actions.len() {
            return Err(QLearningError::invalid_parameter(
                "actions",
                "action set contains duplicates",
            ));
        }

        debug!(
            actions = actions.len(),
            gamma = config.gamma,
            decrease_alpha = config.decrease_alpha,
            "created Q-learning agent"
        );

        Ok(QLearning {
            actions,
            action_set,
            strategy,
            gamma: config.gamma,
            learning_rate: config.learning_rate(),
            q_table: QTable::new(),
        })
    }

    /// Create a learner with the default configuration
    pub fn with_defaults(actions: Vec<A>, strategy: P) -> Result<Self> {
        Self::new(actions, strategy, QLearningConfig::default())
    }

    /// Select an action for `state` through the strategy
    ///
    /// Unvisited pairs are read as 0.0 and the table is left untouched.
    pub fn choose_action(&mut self, state: &S) -> Result<A> {
        let rewards = self.q_table.values(state, &self.actions);
        let action = self.strategy.choose_action(state, &self.actions, &rewards)?;
        trace!(?state, ?action, "chose action");
        Ok(action)
    }

    /// Update `Q(current_state, action)` from one observed transition
    pub fn learn(
        &mut self,
        current_state: S,
        action: A,
        new_state: &S,
        reward: f32,
        episode: u64,
    ) -> Result<()> {
        if !self.action_set.contains(&action) {
            return Err(QLearningError::UnknownAction(format!("{:?}", action)));
        }
        if !reward.is_finite() {
            return Err(QLearningError::NumericalError(format!("Non-finite reward {}", reward)));
        }

        match self.q_table.get(&current_state, &action) {
            None => {
                debug!(state = ?current_state, ?action, reward, "first visit");
                self.q_table.insert(current_state, action, reward);
            }
            Some(previous) => {
                let next_best = self.q_table.max_value(new_state, &self.actions);
                let eta = self.learning_rate.rate(episode);
                let updated = previous + eta * (reward + self.gamma * next_best - previous);
                trace!(state = ?current_state, ?action, previous, updated, eta, "temporal difference update");
                self.q_table.insert(current_state, action, updated);
            }
        }
        Ok(())
    }

    /// Decay the strategy's exploration state
    pub fn update_strategy(&mut self) {
        self.strategy.update();
    }

    /// Current estimate for a pair, 0.0 if unvisited
    pub fn q_value(&self, state: &S, action: &A) -> f32 {
        self.q_table.value(state, action)
    }

    pub fn q_table(&self) -> &QTable<S, A> {
        &self.q_table
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    pub fn strategy(&self) -> &P {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut P {
        &mut self.strategy
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Learning rate applied to updates during `episode`
    pub fn learning_rate(&self, episode: u64) -> f32 {
        self.learning_rate.rate(episode)
    }
}

/// Builder pattern for QLearning
pub struct QLearningBuilder<A, P> {
    actions: Vec<A>,
    strategy: Option<P>,
    config: QLearningConfig,
}

impl<A, P> QLearningBuilder<A, P> {
    pub fn new() -> Self {
        QLearningBuilder {
            actions: vec![],
            strategy: None,
            config: QLearningConfig::default(),
        }
    }

    pub fn actions(mut self, actions: Vec<A>) -> Self {
        self.actions = actions;
        self
    }

    pub fn strategy(mut self, strategy: P) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn config(mut self, config: QLearningConfig) -> Self {
        self.config = config;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.config.alpha = alpha;
        self
    }

    pub fn gamma(mut self, gamma: f32) -> Self {
        self.config.gamma = gamma;
        self
    }

    pub fn decrease_alpha(mut self, decrease_alpha: bool) -> Self {
        self.config.decrease_alpha = decrease_alpha;
        self
    }

    pub fn decrease_alpha_min(mut self, min: f32) -> Self {
        self.config.decrease_alpha_min = min;
        self
    }

    pub fn decrease_alpha_factor(mut self, factor: f32) -> Self {
        self.config.decrease_alpha_factor = factor;
        self
    }

    pub fn build<S>(self) -> Result<QLearning<S, A, P>>
    where
        S: State,
        A: Action,
        P: ActionSelection<S, A>,
    {
        let strategy = self.strategy.ok_or_else(|| QLearningError::InvalidParameter {
            name: "strategy".to_string(),
            reason: "Strategy must be specified".to_string(),
        })?;
        QLearning::new(self.actions, strategy, self.config)
    }
}

impl<A, P> Default for QLearningBuilder<A, P> {
    fn default() -> Self {
        Self::new()
    }
}
