//! Core runtime configuration.
//!
//! # Responsibility
//! - Resolve controller options from defaults and environment overrides.
//!
//! # Invariants
//! - Values are trimmed and matched case-insensitively.
//! - Unknown values are rejected with the variable name, never ignored.

use crate::logging::{default_log_level, normalize_level};
use crate::model::cart::CartRemovalPolicy;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ENV_CART_REMOVAL: &str = "POCKETLIST_CART_REMOVAL";
pub const ENV_SEED_DEMO: &str = "POCKETLIST_SEED_DEMO";
pub const ENV_LOG_LEVEL: &str = "POCKETLIST_LOG_LEVEL";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.variable, self.message)
    }
}

impl Error for ConfigError {}

/// Options shared by the roster and grocery controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Policy applied by `remove_from_cart`.
    pub cart_removal_policy: CartRemovalPolicy,
    /// Start sessions with the built-in roster.
    pub seed_demo_data: bool,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: &'static str,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            cart_removal_policy: CartRemovalPolicy::default(),
            seed_demo_data: true,
            log_level: default_log_level(),
        }
    }
}

impl CoreConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves overrides through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let read = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(raw) = read(ENV_CART_REMOVAL) {
            config.cart_removal_policy = raw.parse().map_err(|message| ConfigError {
                variable: ENV_CART_REMOVAL,
                message,
            })?;
        }
        if let Some(raw) = read(ENV_SEED_DEMO) {
            config.seed_demo_data = parse_bool(&raw).ok_or_else(|| ConfigError {
                variable: ENV_SEED_DEMO,
                message: format!("unsupported flag `{raw}`; expected true|false|1|0"),
            })?;
        }
        if let Some(raw) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&raw).map_err(|message| ConfigError {
                variable: ENV_LOG_LEVEL,
                message,
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
