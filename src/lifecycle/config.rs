//! Runtime configuration for [`RestaurantSystem`](crate::lifecycle::RestaurantSystem).

use thiserror::Error;

/// Environment variable holding the actor channel capacity.
pub const CHANNEL_CAPACITY_VAR: &str = "TABLE_ORDERS_CHANNEL_CAPACITY";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidChannelCapacity { var: &'static str, value: String },
}

/// Settings for spawning the order manager actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the request channel. Callers wait when it is full.
    pub channel_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the environment, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = parse_capacity(&raw)?;
        }
        Ok(config)
    }
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(ConfigError::InvalidChannelCapacity {
            var: CHANNEL_CAPACITY_VAR,
            value: raw.to_string(),
        }),
    }
}
