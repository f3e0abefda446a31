use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::Pose;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Magnitudes of every shaped reward term the agent hands out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardShaping {
    /// Penalty per unit of distance to the next checkpoint, every tick.
    pub distance_penalty: f32,
    /// Scale of the forward/direction dot product, every tick.
    pub alignment_bonus: f32,
    /// Per-tick displacement below which the agent counts as stuck.
    pub stuck_distance: f32,
    pub stuck_penalty: f32,
    pub collision_penalty: f32,
    pub checkpoint_reward: f32,
    pub goal_reward: f32,
}

impl Default for RewardShaping {
    fn default() -> Self {
        Self {
            distance_penalty: 0.001,
            alignment_bonus: 0.1,
            stuck_distance: 0.1,
            stuck_penalty: 0.5,
            collision_penalty: 1.0,
            checkpoint_reward: 1.0,
            goal_reward: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Scales the forward velocity change per tick.
    pub move_speed: f32,
    /// Yaw rate in degrees per second at full steer.
    pub turn_speed: f32,
    /// Seconds of near-zero movement before the episode is forced to end.
    pub stuck_threshold: f32,
    /// Duration of one simulation tick in seconds.
    pub fixed_delta_time: f32,
    /// Ticks per episode before the channel ends it; 0 means unlimited.
    pub max_steps: u64,
    pub rewards: RewardShaping,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            turn_speed: 100.0,
            stuck_threshold: 3.0,
            fixed_delta_time: 0.02,
            max_steps: 0,
            rewards: RewardShaping::default(),
        }
    }
}

impl AgentConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("move_speed", self.move_speed)?;
        non_negative("turn_speed", self.turn_speed)?;
        positive("stuck_threshold", self.stuck_threshold)?;
        positive("fixed_delta_time", self.fixed_delta_time)?;
        non_negative("rewards.stuck_distance", self.rewards.stuck_distance)?;
        Ok(())
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be a finite non-negative number, got {value}"
        )))
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be a finite positive number, got {value}"
        )))
    }
}

/// Everything needed to build a [`TrackEnv`](crate::env::TrackEnv) from a
/// single JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    pub checkpoints: Vec<[f32; 3]>,
    #[serde(default = "default_trigger_radius")]
    pub trigger_radius: f32,
    #[serde(default)]
    pub start: Pose,
    /// Linear drag of the stand-in rigid body.
    #[serde(default)]
    pub drag: f32,
    /// Optional arena walls as `(min, max)` corners.
    #[serde(default)]
    pub bounds: Option<([f32; 3], [f32; 3])>,
}

fn default_trigger_radius() -> f32 {
    2.0
}

impl TrackConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.agent.validate()?;
        non_negative("drag", config.drag)?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = AgentConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AgentConfig::default());
        assert_eq!(config.rewards.goal_reward, 5.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            AgentConfig::from_json_str(r#"{"move_speed": 12.5, "rewards": {"goal_reward": 10}}"#)
                .unwrap();
        assert_eq!(config.move_speed, 12.5);
        assert_eq!(config.turn_speed, 100.0);
        assert_eq!(config.rewards.goal_reward, 10.0);
        assert_eq!(config.rewards.checkpoint_reward, 1.0);
    }

    #[test]
    fn rejects_non_positive_tick() {
        let err = AgentConfig::from_json_str(r#"{"fixed_delta_time": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = AgentConfig::from_json_str("{ move_speed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn track_config_parses_checkpoints() {
        let config = TrackConfig::from_json_str(
            r#"{"checkpoints": [[0, 0, 10], [0, 0, 20]], "bounds": [[-50, -1, -50], [50, 10, 50]]}"#,
        )
        .unwrap();
        assert_eq!(config.checkpoints.len(), 2);
        assert_eq!(config.trigger_radius, 2.0);
        assert!(config.bounds.is_some());
    }

    #[test]
    fn loads_configs_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let agent_path = dir.path().join("agent.json");
        std::fs::write(&agent_path, r#"{"turn_speed": 45}"#).unwrap();
        let track_path = dir.path().join("track.json");
        std::fs::write(&track_path, r#"{"checkpoints": [[0, 0, 10]], "drag": 0.5}"#).unwrap();

        assert_eq!(AgentConfig::from_path(&agent_path).unwrap().turn_speed, 45.0);
        let track = TrackConfig::from_path(&track_path).unwrap();
        assert_eq!(track.checkpoints, vec![[0.0, 0.0, 10.0]]);
        assert_eq!(track.drag, 0.5);

        let missing = AgentConfig::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}
