use racer::agent::{ACTION_SIZE, Action, OBSERVATION_SIZE};
use racer::env::{Env, EnvError, TrackEnv};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum BindingError {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("action needs throttle and steer, got {0} values")]
    ActionShape(usize),

    #[error("failed to encode step info: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One environment step as plain values: observation, reward, done flag and
/// the step info encoded as JSON.
pub type FlatStep = (Vec<f32>, f32, bool, String);

pub struct FlatTrackEnv {
    env: TrackEnv,
}

impl FlatTrackEnv {
    pub fn new(config_json: &str) -> Result<Self, BindingError> {
        let env = TrackEnv::from_json_str(config_json)?;
        debug!(
            checkpoints = env.agent().checkpoints().len(),
            "track environment created"
        );
        Ok(Self { env })
    }

    pub fn reset(&mut self) -> Result<Vec<f32>, BindingError> {
        Ok(self.env.reset()?.to_vec())
    }

    pub fn step(&mut self, action: &[f32]) -> Result<FlatStep, BindingError> {
        let action = Action::from_slice(action).ok_or(BindingError::ActionShape(action.len()))?;
        let (obs, reward, done, info) = self.env.step(action)?;
        Ok((obs.to_vec(), reward, done, serde_json::to_string(&info)?))
    }

    pub fn observation_size(&self) -> usize {
        OBSERVATION_SIZE
    }

    pub fn action_size(&self) -> usize {
        ACTION_SIZE
    }

    pub fn cumulative_reward(&self) -> f32 {
        self.env.agent().episode().cumulative_reward()
    }

    pub fn move_distance(&self) -> f32 {
        self.env.agent().move_distance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: &str = r#"{"checkpoints": [[0, 0, 5], [0, 0, 10]], "trigger_radius": 1.0}"#;

    #[test]
    fn flat_round_trip_through_an_episode_step() {
        let mut env = FlatTrackEnv::new(TRACK).unwrap();
        let obs = env.reset().unwrap();
        assert_eq!(obs.len(), env.observation_size());

        let (obs, reward, done, info) = env.step(&[1.0, 0.0]).unwrap();
        assert_eq!(obs.len(), 9);
        assert!((obs[5] - 0.1).abs() < 1e-5);
        assert!(!done);
        assert!((env.cumulative_reward() - reward).abs() < 1e-6);

        let info: serde_json::Value = serde_json::from_str(&info).unwrap();
        assert_eq!(info["tick"], 1);
        assert_eq!(info["checkpoint_index"], 0);
    }

    #[test]
    fn wrong_action_width_is_rejected() {
        let mut env = FlatTrackEnv::new(TRACK).unwrap();
        env.reset().unwrap();
        assert!(matches!(
            env.step(&[1.0]),
            Err(BindingError::ActionShape(1))
        ));
    }

    #[test]
    fn bad_config_is_reported() {
        assert!(matches!(
            FlatTrackEnv::new("not json"),
            Err(BindingError::Env(EnvError::Config(_)))
        ));
    }
}
