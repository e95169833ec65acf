//! Конфигурация рантайма зала.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_INBOX_CAPACITY: usize = 64;

/// Ошибки конфигурации.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },

    #[error("malformed config JSON: {0}")]
    Malformed(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Настройки рантайма зала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FloorConfig {
    /// Период тика часов (мс). Одна "секунда" турнирных часов.
    pub tick_interval_ms: u64,
    /// Файл снимка. None – снимок только в памяти.
    pub state_path: Option<PathBuf>,
    /// Сид для стеков в сид-данных. None – детерминированный разброс.
    pub seed: Option<u64>,
    /// Размер входящей очереди актора.
    pub inbox_capacity: usize,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            state_path: None,
            seed: None,
            inbox_capacity: DEFAULT_INBOX_CAPACITY,
        }
    }
}

impl FloorConfig {
    /// Загрузка из переменных окружения:
    /// `FLOOR_TICK_MS`, `FLOOR_STATE_PATH`, `FLOOR_SEED`, `FLOOR_INBOX_CAPACITY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// То же, что `from_env`, но с произвольным источником значений.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            tick_interval_ms: parse_var(&lookup, "FLOOR_TICK_MS")?
                .unwrap_or(defaults.tick_interval_ms),
            state_path: lookup("FLOOR_STATE_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            seed: parse_var(&lookup, "FLOOR_SEED")?,
            inbox_capacity: parse_var(&lookup, "FLOOR_INBOX_CAPACITY")?
                .unwrap_or(defaults.inbox_capacity),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be > 0".into()));
        }
        if self.inbox_capacity == 0 {
            return Err(ConfigError::Invalid("inbox_capacity must be > 0".into()));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                var: var.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
