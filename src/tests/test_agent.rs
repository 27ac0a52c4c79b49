use crate::agent::{QLearning, QLearningBuilder};
use crate::config::QLearningConfig;
use crate::strategy::EpsilonGreedy;

fn agent_with(config: QLearningConfig, epsilon: f32) -> QLearning<&'static str, &'static str, EpsilonGreedy> {
    let strategy = EpsilonGreedy::with_seed(epsilon, 0.999, 17);
    QLearning::new(vec!["a0", "a1", "a2"], strategy, config).unwrap()
}

#[test]
fn test_fresh_table_bootstrap() {
    let mut agent = agent_with(QLearningConfig::default(), 0.1);
    agent.learn("s0", "a0", &"s1", 5.0, 0).unwrap();
    assert_eq!(agent.q_value(&"s0", &"a0"), 5.0);
}

#[test]
fn test_blended_update_toward_bellman_target() {
    let config = QLearningConfig {
        alpha: 0.5,
        gamma: 0.9,
        decrease_alpha: false,
        ..Default::default()
    };
    let mut agent = agent_with(config, 0.1);
    agent.learn("s0", "a0", &"s1", 5.0, 0).unwrap();
    agent.learn("s0", "a0", &"s1", 10.0, 0).unwrap();
    // 5.0 + 0.5 * (10.0 + 0.9 * 0.0 - 5.0)
    assert!((agent.q_value(&"s0", &"a0") - 7.5).abs() < 1e-6);
}

#[test]
fn test_update_uses_best_next_value() {
    let config = QLearningConfig {
        alpha: 0.5,
        gamma: 0.9,
        decrease_alpha: false,
        ..Default::default()
    };
    let mut agent = agent_with(config, 0.1);
    agent.learn("s1", "a1", &"s2", 4.0, 0).unwrap();
    agent.learn("s1", "a2", &"s2", -2.0, 0).unwrap();
    agent.learn("s0", "a0", &"s1", 1.0, 0).unwrap();
    agent.learn("s0", "a0", &"s1", 1.0, 0).unwrap();
    // 1.0 + 0.5 * (1.0 + 0.9 * 4.0 - 1.0) = 2.8
    assert!((agent.q_value(&"s0", &"a0") - 2.8).abs() < 1e-6);
}

#[test]
fn test_negative_next_values_against_unvisited_zero() {
    let config = QLearningConfig {
        alpha: 1.0,
        gamma: 0.5,
        decrease_alpha: false,
        ..Default::default()
    };
    let mut agent = agent_with(config, 0.1);
    agent.learn("s1", "a0", &"s2", -4.0, 0).unwrap();
    agent.learn("s0", "a0", &"s1", 0.0, 0).unwrap();
    agent.learn("s0", "a0", &"s1", 2.0, 0).unwrap();
    // a1 and a2 are unvisited at s1, so the best next value is 0.0
    assert!((agent.q_value(&"s0", &"a0") - 2.0).abs() < 1e-6);
}

#[test]
fn test_step_decay_learning_rate() {
    let mut agent = agent_with(QLearningConfig::default(), 0.1);
    assert_eq!(agent.learning_rate(0), 1.0);
    assert_eq!(agent.learning_rate(99), 1.0);
    assert!((agent.learning_rate(100) - 0.85).abs() < 1e-6);
    assert!((agent.learning_rate(199) - 0.85).abs() < 1e-6);
    assert_eq!(agent.learning_rate(1_000_000), 0.005);

    // Decay ignores alpha: the first episode block replaces the value outright
    agent.learn("s0", "a0", &"s1", 3.0, 0).unwrap();
    agent.learn("s0", "a0", &"s1", 8.0, 50).unwrap();
    assert!((agent.q_value(&"s0", &"a0") - 8.0).abs() < 1e-6);

    agent.learn("s0", "a0", &"s1", 0.0, 150).unwrap();
    // 8.0 + 0.85 * (0.0 - 8.0)
    assert!((agent.q_value(&"s0", &"a0") - 1.2).abs() < 1e-5);
}

#[test]
fn test_choose_action_is_read_only() {
    let mut agent = agent_with(QLearningConfig::default(), 0.5);
    agent.learn("s0", "a1", &"s1", 1.0, 0).unwrap();
    let before: Vec<_> = agent.q_table().iter().map(|(s, a, v)| (*s, *a, v)).collect();

    for _ in 0..100 {
        agent.choose_action(&"s0").unwrap();
        agent.choose_action(&"unseen").unwrap();
    }

    let after: Vec<_> = agent.q_table().iter().map(|(s, a, v)| (*s, *a, v)).collect();
    assert_eq!(before, after);
    assert_eq!(agent.q_table().len(), 1);
}

#[test]
fn test_greedy_choice_follows_learned_values() {
    let mut agent = agent_with(QLearningConfig::default(), 0.0);
    agent.learn("s0", "a2", &"s1", 2.0, 0).unwrap();
    agent.learn("s0", "a0", &"s1", -1.0, 0).unwrap();
    for _ in 0..20 {
        assert_eq!(agent.choose_action(&"s0").unwrap(), "a2");
    }
}

#[test]
fn test_update_strategy_decays_epsilon() {
    let mut agent = agent_with(QLearningConfig::default(), 0.5);
    agent.update_strategy();
    assert!((agent.strategy().epsilon() - 0.5 * 0.5 * 0.999).abs() < 1e-6);
}

#[test]
fn test_builder_from_config() {
    let config = QLearningConfig::from_json(r#"{"alpha": 0.25, "decrease_alpha": false}"#).unwrap();
    let agent: QLearning<u8, u8, EpsilonGreedy> = QLearningBuilder::new()
        .actions(vec![0, 1])
        .strategy(EpsilonGreedy::with_seed(0.1, 0.999, 1))
        .config(config)
        .build()
        .unwrap();
    assert_eq!(agent.learning_rate(10_000), 0.25);
    assert_eq!(agent.gamma(), 0.9);
}
