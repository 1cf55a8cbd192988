//! Loop configuration.
//!
//! Defaults match the keyboard-driven falling loop. Every field can be
//! overridden from the environment:
//!
//! - `TETRIS_MODE`: `falling` (default) or `random`
//! - `TETRIS_TICK_MS`: pause between ticks (default depends on the mode)
//! - `TETRIS_FLOOR_Y`: row at which a falling piece is replaced (default 0)
//! - `TETRIS_SEED`: seed for the random repaint (default 1)
//! - `TETRIS_MAX_PENDING_INPUT`: queued directions before input is dropped (default 16)
//! - `TETRIS_NOTIFY_CAPACITY`: batches a slow subscriber may fall behind (default 64)

use std::time::Duration;

use crate::error::ConfigError;
use crate::types::{FALL_TICK_MS, FLOOR_Y, RANDOM_FILL_TICK_MS, SPAWN_POSITION};

/// What the loop does every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Spawn a piece and let it fall one row per tick, forever
    Falling,
    /// Repaint the whole board with random colours every tick
    RandomFill,
}

impl LoopMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "falling" | "fall" => Some(LoopMode::Falling),
            "random" | "random-fill" | "randomfill" => Some(LoopMode::RandomFill),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoopMode::Falling => "falling",
            LoopMode::RandomFill => "random",
        }
    }

    pub fn default_tick_ms(&self) -> u32 {
        match self {
            LoopMode::Falling => FALL_TICK_MS,
            LoopMode::RandomFill => RANDOM_FILL_TICK_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: LoopMode,
    pub tick_ms: u32,
    pub spawn: (i8, i8),
    pub floor_y: i8,
    pub seed: u32,
    pub max_pending_input: usize,
    pub notify_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_mode(LoopMode::Falling)
    }
}

impl GameConfig {
    pub fn for_mode(mode: LoopMode) -> Self {
        Self {
            mode,
            tick_ms: mode.default_tick_ms(),
            spawn: SPAWN_POSITION,
            floor_y: FLOOR_Y,
            seed: 1,
            max_pending_input: 16,
            notify_capacity: 64,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mode = match get("TETRIS_MODE") {
            Some(v) => LoopMode::from_str(&v).ok_or(ConfigError::UnknownMode(v))?,
            None => LoopMode::Falling,
        };
        let mut config = Self::for_mode(mode);

        if let Some(v) = get("TETRIS_TICK_MS") {
            config.tick_ms = parse_var("TETRIS_TICK_MS", &v)?;
        }
        if let Some(v) = get("TETRIS_FLOOR_Y") {
            config.floor_y = parse_var("TETRIS_FLOOR_Y", &v)?;
        }
        if let Some(v) = get("TETRIS_SEED") {
            config.seed = parse_var("TETRIS_SEED", &v)?;
        }
        if let Some(v) = get("TETRIS_MAX_PENDING_INPUT") {
            config.max_pending_input = parse_var("TETRIS_MAX_PENDING_INPUT", &v)?;
        }
        if let Some(v) = get("TETRIS_NOTIFY_CAPACITY") {
            config.notify_capacity = parse_var("TETRIS_NOTIFY_CAPACITY", &v)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.max_pending_input == 0 {
            return Err(ConfigError::ZeroCapacity("TETRIS_MAX_PENDING_INPUT"));
        }
        if self.notify_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("TETRIS_NOTIFY_CAPACITY"));
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_follow_falling_loop() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.tick(), Duration::from_millis(500));
        assert_eq!(config.spawn, (5, 18));
        assert_eq!(config.floor_y, 0);
    }

    #[test]
    fn random_mode_uses_fast_tick() {
        let config = GameConfig::from_lookup(lookup(&[("TETRIS_MODE", "Random")])).unwrap();
        assert_eq!(config.mode, LoopMode::RandomFill);
        assert_eq!(config.tick_ms, 10);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = GameConfig::from_lookup(lookup(&[
            ("TETRIS_TICK_MS", " 25 "),
            ("TETRIS_FLOOR_Y", "4"),
            ("TETRIS_SEED", "99"),
            ("TETRIS_MAX_PENDING_INPUT", ""),
        ]))
        .unwrap();
        assert_eq!(config.tick_ms, 25);
        assert_eq!(config.floor_y, 4);
        assert_eq!(config.seed, 99);
        assert_eq!(config.max_pending_input, 16);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[("TETRIS_MODE", "tetris")])),
            Err(ConfigError::UnknownMode(m)) if m == "tetris"
        ));
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[("TETRIS_TICK_MS", "soon")])),
            Err(ConfigError::InvalidValue { var: "TETRIS_TICK_MS", .. })
        ));
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[("TETRIS_TICK_MS", "0")])),
            Err(ConfigError::ZeroTick)
        ));
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[("TETRIS_FLOOR_Y", "300")])),
            Err(ConfigError::InvalidValue { var: "TETRIS_FLOOR_Y", .. })
        ));
    }
}
