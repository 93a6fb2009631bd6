//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "reproducible"
        random_seed = 42
        move_ordering = "move_set_order"

        [termination]
        seconds_spent_limit = 30
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.move_ordering, MoveOrderingType::MoveSetOrder);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: reproducible
        random_seed: 42
        move_ordering: warnsdorff_stable
        termination:
          seconds_spent_limit: 0.5
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.move_ordering, MoveOrderingType::WarnsdorffStable);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(500)));
}

#[test]
fn test_empty_toml_is_default() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.move_ordering, MoveOrderingType::Warnsdorff);
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_rejects_non_positive_limit() {
    let err = SolverConfig::from_toml_str(
        r#"
        [termination]
        seconds_spent_limit = 0
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    assert!(SolverConfig::from_yaml_str("termination:\n  seconds_spent_limit: -1.0\n").is_err());
}

#[test]
fn test_rejects_unknown_ordering() {
    let err = SolverConfig::from_toml_str(r#"move_ordering = "random""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SolverConfig::load("/nonexistent/knightforge/solver.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_time_limit_secs(60.0)
        .with_move_ordering(MoveOrderingType::WarnsdorffStable);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert_eq!(config.move_ordering, MoveOrderingType::WarnsdorffStable);
}

#[test]
fn test_resolve_time_limit_precedence() {
    let configured = SolverConfig::new().with_time_limit_secs(3.0);
    let unconfigured = SolverConfig::new();

    assert_eq!(
        configured.resolve_time_limit(Some(Duration::from_secs(1))),
        Duration::from_secs(1)
    );
    assert_eq!(configured.resolve_time_limit(None), Duration::from_secs(3));
    assert_eq!(unconfigured.resolve_time_limit(None), Duration::from_secs(10));
}

#[test]
fn test_resolve_keeps_oversized_request_limit() {
    let requested = knightforge_core::positive_time_limit(1e20);
    let resolved = SolverConfig::new()
        .with_time_limit_secs(3.0)
        .resolve_time_limit(requested);
    assert_eq!(resolved, Duration::MAX);
}

#[test]
fn test_builder_limit_ignored_when_not_positive() {
    let config = SolverConfig::new().with_time_limit_secs(-2.0);
    assert_eq!(config.time_limit(), None);
    assert_eq!(config.termination, None);
    assert_eq!(config.resolve_time_limit(None), Duration::from_secs(10));

    let cleared = SolverConfig::new()
        .with_time_limit_secs(5.0)
        .with_time_limit_secs(0.0);
    assert_eq!(cleared.time_limit(), None);
}

#[test]
fn test_built_config_reloads_from_toml() {
    for seconds in [2.5, 0.0, -1.0] {
        let config = SolverConfig::new()
            .with_random_seed(4)
            .with_move_ordering(MoveOrderingType::MoveSetOrder)
            .with_time_limit_secs(seconds);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SolverConfig::from_toml_str(&text).unwrap(), config);
    }
}

#[test]
fn test_effective_seed() {
    assert_eq!(SolverConfig::new().effective_seed(), None);
    assert_eq!(
        SolverConfig::new()
            .with_environment_mode(EnvironmentMode::Reproducible)
            .effective_seed(),
        Some(0)
    );
    assert_eq!(SolverConfig::new().with_random_seed(9).effective_seed(), Some(9));
}
