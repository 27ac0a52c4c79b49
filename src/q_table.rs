//! Lazily-populated Q-value table

use std::collections::HashMap;

use crate::types::{Action, State};

/// Q-table mapping (state, action) pairs to reward estimates
///
/// A missing entry means the pair was never visited. Reads treat it as 0.0
/// without inserting anything; only [`QTable::insert`] adds keys, and keys
/// are never removed.
#[derive(Clone, Debug)]
pub struct QTable<S: State, A: Action> {
    q_values: HashMap<(S, A), f32>,
}

impl<S: State, A: Action> QTable<S, A> {
    pub fn new() -> Self {
        QTable {
            q_values: HashMap::new(),
        }
    }

    /// Stored value, or `None` if the pair was never written
    pub fn get(&self, state: &S, action: &A) -> Option<f32> {
        // The composite key owns its parts, so lookups clone them
        self.q_values.get(&(state.clone(), action.clone())).copied()
    }

    /// Stored value, defaulting to 0.0 for unvisited pairs
    pub fn value(&self, state: &S, action: &A) -> f32 {
        self.get(state, action).unwrap_or(0.0)
    }

    /// Values of every action at `state`, index-aligned with `actions`
    pub fn values(&self, state: &S, actions: &[A]) -> Vec<f32> {
        actions.iter().map(|action| self.value(state, action)).collect()
    }

    /// Maximum value over `actions` at `state`
    pub fn max_value(&self, state: &S, actions: &[A]) -> f32 {
        actions
            .iter()
            .map(|action| self.value(state, action))
            .fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn insert(&mut self, state: S, action: A, value: f32) {
        self.q_values.insert((state, action), value);
    }

    pub fn contains(&self, state: &S, action: &A) -> bool {
        self.get(state, action).is_some()
    }

    /// Number of visited pairs
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &A, f32)> {
        self.q_values.iter().map(|((s, a), v)| (s, a, *v))
    }
}

impl<S: State, A: Action> Default for QTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unvisited_reads_do_not_insert() {
        let table: QTable<&str, u8> = QTable::new();
        assert_eq!(table.get(&"s0", &0), None);
        assert_eq!(table.value(&"s0", &0), 0.0);
        assert_eq!(table.values(&"s0", &[0, 1, 2]), vec![0.0, 0.0, 0.0]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_insert_and_overwrite() {
        let mut table = QTable::new();
        table.insert("s0", 1u8, 1.5);
        table.insert("s0", 1u8, -2.0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&"s0", &1), Some(-2.0));
        assert!(table.contains(&"s0", &1));
        assert!(!table.contains(&"s1", &1));
    }

    #[test]
    fn test_max_value_mixes_visited_and_unvisited() {
        let mut table = QTable::new();
        table.insert("s1", 0u8, -3.0);
        table.insert("s1", 1u8, -1.0);
        // Action 2 is unvisited and reads as 0.0
        assert_eq!(table.max_value(&"s1", &[0, 1, 2]), 0.0);
        assert_eq!(table.max_value(&"s1", &[0, 1]), -1.0);
    }

    #[test]
    fn test_iter() {
        let mut table = QTable::new();
        table.insert(0u32, 'a', 1.0);
        table.insert(1u32, 'b', 2.0);
        let total: f32 = table.iter().map(|(_, _, v)| v).sum();
        assert_eq!(total, 3.0);
    }
}
