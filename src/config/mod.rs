//! Panel configuration.
//!
//! Configuration is plain data deserialized from JSON. Every rule is
//! checked with Stillwater's `Validation`, so a bad file reports all of its
//! problems at once instead of the first one.
//!
//! # Example
//!
//! ```rust
//! use microwave::config::PanelConfig;
//! use microwave::core::CancelPolicy;
//! use std::time::Duration;
//!
//! let config = PanelConfig::from_json(r#"{ "tick_millis": 250, "cancel_policy": "clear_entry" }"#)
//!     .unwrap();
//! assert_eq!(config.tick(), Duration::from_millis(250));
//! assert_eq!(config.cancel_policy, CancelPolicy::ClearEntry);
//! assert_eq!(config.history_limit, 64);
//! ```

use crate::core::{CancelPolicy, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod violations;

pub use violations::{ConfigError, ConfigViolation, MAX_TICK_MILLIS, MIN_TICK_MILLIS};

/// Length of one countdown tick unless configured otherwise.
pub const DEFAULT_TICK_MILLIS: u64 = 1_000;

/// Settings for one oven panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Length of one countdown tick in milliseconds
    pub tick_millis: u64,

    /// Whether `Stop` during cooking keeps or clears the remaining time
    pub cancel_policy: CancelPolicy,

    /// Number of transition records kept in history
    pub history_limit: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            tick_millis: DEFAULT_TICK_MILLIS,
            cancel_policy: CancelPolicy::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl PanelConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let tick = if (MIN_TICK_MILLIS..=MAX_TICK_MILLIS).contains(&self.tick_millis) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::TickOutOfRange(self.tick_millis))
        };

        let history = if self.history_limit >= 1 {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::EmptyHistory)
        };

        Validation::all_vec(vec![tick, history]).map(|_| ())
    }

    /// [`PanelConfig::validate`] as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ConfigError::Invalid(errors.iter().cloned().collect())),
        }
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }
}
