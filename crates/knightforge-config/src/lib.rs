//! Configuration system for KnightForge.
//!
//! Load solver configuration from TOML or YAML to control the time budget,
//! seeding and move ordering without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use knightforge_config::{MoveOrderingType, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     environment_mode = "reproducible"
//!     random_seed = 7
//!     move_ordering = "warnsdorff_stable"
//!
//!     [termination]
//!     seconds_spent_limit = 2.5
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
//! assert_eq!(config.move_ordering, MoveOrderingType::WarnsdorffStable);
//! assert_eq!(config.effective_seed(), Some(7));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use knightforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! ```

use std::path::Path;
use std::time::Duration;

use knightforge_core::{positive_time_limit, DEFAULT_TIME_LIMIT_SECS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting reproducibility.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible tie-breaking.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// How candidate moves are ranked at each node.
    #[serde(default)]
    pub move_ordering: MoveOrderingType,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// sets a non-positive time limit.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if let Some(secs) = self
            .termination
            .as_ref()
            .and_then(|t| t.seconds_spent_limit)
        {
            if positive_time_limit(secs).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "seconds_spent_limit must be positive and finite, got {secs}"
                )));
            }
        }
        Ok(self)
    }

    /// Sets the termination time limit in seconds.
    ///
    /// A non-positive or non-finite value clears the limit instead, the
    /// same values [`SolverConfig::from_toml_str`] rejects.
    pub fn with_time_limit_secs(mut self, seconds: f64) -> Self {
        self.termination = positive_time_limit(seconds).map(|_| TerminationConfig {
            seconds_spent_limit: Some(seconds),
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the move ordering.
    pub fn with_move_ordering(mut self, ordering: MoveOrderingType) -> Self {
        self.move_ordering = ordering;
        self
    }

    /// Returns the termination time limit, if configured and positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use knightforge_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// let config = SolverConfig::new().with_time_limit_secs(30.0);
    /// assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
    ///
    /// assert_eq!(SolverConfig::new().time_limit(), None);
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Resolves the budget for one solve: the request's own limit if
    /// positive, then this config's, then the 10 second default.
    pub fn resolve_time_limit(&self, requested: Option<Duration>) -> Duration {
        requested
            .or_else(|| self.time_limit())
            .unwrap_or(Duration::from_secs_f64(DEFAULT_TIME_LIMIT_SECS))
    }

    /// The seed to use for tie-breaking, or `None` to seed from the OS.
    ///
    /// An explicit seed always wins. Reproducible mode without a seed
    /// falls back to seed 0.
    pub fn effective_seed(&self) -> Option<u64> {
        match (self.random_seed, self.environment_mode) {
            (Some(seed), _) => Some(seed),
            (None, EnvironmentMode::Reproducible) => Some(0),
            (None, EnvironmentMode::NonReproducible) => None,
        }
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Tie-breaking seeded from the OS unless a seed is given.
    #[default]
    NonReproducible,

    /// Deterministic tie-breaking.
    Reproducible,
}

/// Candidate ordering strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrderingType {
    /// Fewest onward moves first, ties shuffled.
    #[default]
    Warnsdorff,

    /// Fewest onward moves first, ties in knight move order.
    WarnsdorffStable,

    /// Knight move order, no heuristic.
    MoveSetOrder,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum wall-clock seconds for one solve.
    pub seconds_spent_limit: Option<f64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if configured and positive.
    pub fn time_limit(&self) -> Option<Duration> {
        self.seconds_spent_limit.and_then(positive_time_limit)
    }
}
