use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Env, EnvError};
use crate::agent::{ACTION_SIZE, Action, CarAgent, OBSERVATION_SIZE, Observation, Termination};
use crate::checkpoint::{CheckpointCourse, CheckpointEvent};
use crate::config::TrackConfig;
use crate::physics::{PhysicsBody, RigidBody};
use crate::sensor::ArenaBounds;

/// Per-step details reported alongside the reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub termination: Option<Termination>,
    /// Index of the checkpoint the agent is heading for after this step.
    pub checkpoint_index: usize,
    pub move_distance: f32,
    pub tick: u64,
}

/// A single car on a checkpoint course, driven one fixed tick per step.
///
/// Each step runs the agent's tick, advances the stand-in physics, then
/// fires the checkpoint hooks if the car ended up inside the next trigger.
pub struct TrackEnv {
    agent: CarAgent<RigidBody, CheckpointCourse>,
}

impl TrackEnv {
    pub fn new(agent: CarAgent<RigidBody, CheckpointCourse>) -> Self {
        Self { agent }
    }

    pub fn from_config(config: &TrackConfig) -> Result<Self, EnvError> {
        let body = RigidBody::new(config.start).with_drag(config.drag);
        let checkpoints = config.checkpoints.iter().copied().map(Vec3::from_array).collect();
        let course = CheckpointCourse::new(checkpoints, config.trigger_radius)?;

        let mut builder = CarAgent::builder()
            .physics(body)
            .checkpoints(course)
            .config(config.agent.clone());
        if let Some((min, max)) = config.bounds {
            builder = builder.collision(ArenaBounds::new(Vec3::from_array(min), Vec3::from_array(max)));
        }
        Ok(Self::new(builder.build()?))
    }

    pub fn from_json_str(json: &str) -> Result<Self, EnvError> {
        Self::from_config(&TrackConfig::from_json_str(json)?)
    }

    pub fn agent(&self) -> &CarAgent<RigidBody, CheckpointCourse> {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut CarAgent<RigidBody, CheckpointCourse> {
        &mut self.agent
    }

    fn info(&self) -> StepInfo {
        StepInfo {
            termination: self.agent.episode().termination(),
            checkpoint_index: self.agent.checkpoints().current_index(),
            move_distance: self.agent.move_distance(),
            tick: self.agent.episode().ticks(),
        }
    }
}

impl Env for TrackEnv {
    type Obs = Observation;
    type Act = Action;
    type Info = StepInfo;

    fn reset(&mut self) -> Result<Self::Obs, EnvError> {
        self.agent.on_episode_begin();
        self.agent.take_reward();
        Ok(self.agent.collect_observations())
    }

    fn step(&mut self, act: Self::Act) -> Result<(Self::Obs, f32, bool, Self::Info), EnvError> {
        if !self.agent.episode().is_running() {
            warn!(status = ?self.agent.status(), "step on an episode that is not running");
            return Err(EnvError::EpisodeNotRunning);
        }

        self.agent.on_action_received(act);

        if self.agent.episode().is_running() {
            let dt = self.agent.config().fixed_delta_time;
            self.agent.body_mut().integrate(dt);

            let position = self.agent.body().position();
            match self.agent.checkpoints().detect(position) {
                Some(CheckpointEvent::Reached(_)) => self.agent.checkpoint_reached(),
                Some(CheckpointEvent::Goal) => self.agent.goal_reached(),
                None => {}
            }

            let max_steps = self.agent.config().max_steps;
            if max_steps > 0 && self.agent.episode().ticks() >= max_steps {
                self.agent.end_episode();
            }
        }

        let reward = self.agent.take_reward();
        let done = !self.agent.episode().is_running();
        Ok((self.agent.collect_observations(), reward, done, self.info()))
    }

    fn observation_size(&self) -> usize {
        OBSERVATION_SIZE
    }

    fn action_size(&self) -> usize {
        ACTION_SIZE
    }
}
