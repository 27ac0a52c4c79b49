use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers in tabular reinforcement learning
///
/// States are opaque keys: the learner never inspects their structure, it
/// only hashes and compares them. Anything `Clone + Eq + Hash + Debug`
/// qualifies through the blanket implementation, so integers, strings,
/// tuples and plain enums can be used directly.
pub trait State: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> State for T {}

/// Trait for action identifiers drawn from a fixed, finite set
pub trait Action: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Action for T {}
