//! Training hyperparameters.
//!
//! A `TrainConfig` can be built in code or read from JSON; missing fields take
//! their defaults:
//!
//! ```json
//! {
//!   "learning_rate": 0.0075,
//!   "iterations": 2500,
//!   "print_cost": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_ITERATIONS: usize = 3000;
/// Seed of the generator that draws the initial weights.
pub const DEFAULT_SEED: u64 = 3;
/// Cost is sampled every this many iterations (and on the last one).
pub const DEFAULT_COST_INTERVAL: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainConfig {
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Fixed number of forward/backward/update cycles.
    pub iterations: usize,
    /// Log sampled costs while training.
    pub print_cost: bool,
    pub seed: u64,
    pub cost_interval: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            print_cost: false,
            seed: DEFAULT_SEED,
            cost_interval: DEFAULT_COST_INTERVAL,
        }
    }
}

impl TrainConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_print_cost(mut self, print_cost: bool) -> Self {
        self.print_cost = print_cost;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file at `path` and parses it with `TrainConfig::from_json_str`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        TrainConfig::from_json_str(&contents)
    }

    /// Checks the values a training run cannot start with.
    ///
    /// A learning rate of zero is accepted: it leaves parameters unchanged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "learning_rate must be finite and non-negative, but got {}",
                self.learning_rate
            )));
        }
        if self.iterations == 0 {
            return Err(ConfigError::Invalid(
                "iterations must be positive".to_owned(),
            ));
        }
        if self.cost_interval == 0 {
            return Err(ConfigError::Invalid(
                "cost_interval must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}
