use serde::{Serialize, Deserialize};

/// Learning-rate schedules for the tabular learner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LearningRate {
    /// Constant learning rate
    Constant { alpha: f32 },

    /// Step decay: lr = max(min, factor^(episode / step_size))
    ///
    /// The schedule starts from 1.0, not from the configured `alpha`.
    StepDecay {
        factor: f32,
        min: f32,
        step_size: u64,
    },
}

impl LearningRate {
    /// Get the learning rate for a given episode
    pub fn rate(&self, episode: u64) -> f32 {
        match self {
            LearningRate::Constant { alpha } => *alpha,

            LearningRate::StepDecay { factor, min, step_size } => {
                let num_decays = episode / (*step_size).max(1);
                let decayed = factor.powi(num_decays.min(i32::MAX as u64) as i32);
                decayed.max(*min)
            }
        }
    }

    /// Create a constant learning rate
    pub fn constant(alpha: f32) -> Self {
        LearningRate::Constant { alpha }
    }

    /// Create a step decay schedule
    pub fn step_decay(factor: f32, min: f32, step_size: u64) -> Self {
        LearningRate::StepDecay { factor, min, step_size }
    }
}
