use std::fmt;

/// Result type for Q-learning operations
pub type Result<T> = std::result::Result<T, QLearningError>;

/// Main error type for the qlearning crate
#[derive(Debug, Clone, PartialEq)]
pub enum QLearningError {
    /// No candidate actions were supplied
    EmptyActions,

    /// Actions and rewards are not index-aligned
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Action outside the learner's action set
    UnknownAction(String),

    /// Numerical computation errors
    NumericalError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for QLearningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QLearningError::EmptyActions => write!(f, "Empty actions: at least one action is required"),
            QLearningError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {} rewards, got {}", expected, actual)
            }
            QLearningError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            QLearningError::UnknownAction(action) => {
                write!(f, "Unknown action {}: not part of the action set", action)
            }
            QLearningError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
            QLearningError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for QLearningError {}

// Conversion from serde_json::Error
impl From<serde_json::Error> for QLearningError {
    fn from(err: serde_json::Error) -> Self {
        QLearningError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl QLearningError {
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        QLearningError::DimensionMismatch { expected, actual }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        QLearningError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
