use glam::{Quat, Vec3};
use tracing::{debug, trace};

use super::{
    Action, AgentError, Bookkeeping, Episode, EpisodeStatus, Observation, Termination,
};
use crate::checkpoint::CheckpointTracker;
use crate::config::AgentConfig;
use crate::input::{self, InputAxes};
use crate::physics::{PhysicsBody, Pose};
use crate::sensor::{CollisionSignal, NoCollision};

/// Reward terms handed out by one call to
/// [`CarAgent::on_action_received`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutcome {
    pub distance: f32,
    pub alignment: f32,
    pub stuck: f32,
    pub collision: f32,
    pub termination: Option<Termination>,
}

impl TickOutcome {
    pub fn reward(&self) -> f32 {
        self.distance + self.alignment + self.stuck + self.collision
    }
}

/// Vehicle controller for the checkpoint race.
///
/// Owns its physics body and checkpoint tracker. Everything that happens in
/// one tick happens inside a single `&mut self` call, so no state is ever
/// shared between agents.
pub struct CarAgent<B, C> {
    body: B,
    checkpoints: C,
    collision: Box<dyn CollisionSignal>,
    config: AgentConfig,
    books: Bookkeeping,
    episode: Episode,
}

pub struct CarAgentBuilder<B, C> {
    body: Option<B>,
    checkpoints: Option<C>,
    collision: Option<Box<dyn CollisionSignal>>,
    config: AgentConfig,
}

impl<B, C> Default for CarAgentBuilder<B, C> {
    fn default() -> Self {
        Self {
            body: None,
            checkpoints: None,
            collision: None,
            config: AgentConfig::default(),
        }
    }
}

impl<B: PhysicsBody, C: CheckpointTracker> CarAgentBuilder<B, C> {
    pub fn physics(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn checkpoints(mut self, checkpoints: C) -> Self {
        self.checkpoints = Some(checkpoints);
        self
    }

    pub fn collision(mut self, signal: impl CollisionSignal + 'static) -> Self {
        self.collision = Some(Box::new(signal));
        self
    }

    pub fn config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    /// Captures the body's current pose as the start pose for every episode.
    pub fn build(self) -> Result<CarAgent<B, C>, AgentError> {
        let body = self.body.ok_or(AgentError::MissingPhysics)?;
        let checkpoints = self.checkpoints.ok_or(AgentError::MissingCheckpoints)?;
        self.config.validate()?;

        let start = Pose::new(body.position(), body.rotation());
        debug!(position = ?start.position, "agent initialised");
        Ok(CarAgent {
            body,
            checkpoints,
            collision: self.collision.unwrap_or_else(|| Box::new(NoCollision)),
            config: self.config,
            books: Bookkeeping::new(start),
            episode: Episode::default(),
        })
    }
}

impl<B: PhysicsBody, C: CheckpointTracker> CarAgent<B, C> {
    pub fn builder() -> CarAgentBuilder<B, C> {
        CarAgentBuilder::default()
    }

    /// Put the agent back on the start pose and begin a fresh episode.
    pub fn on_episode_begin(&mut self) {
        let start = self.books.start();
        self.body.set_linear_velocity(Vec3::ZERO);
        self.body.set_angular_velocity(Vec3::ZERO);
        self.body.set_position(start.position);
        self.body.set_rotation(start.rotation);
        self.checkpoints.reset();
        self.books.reset(self.body.position());
        self.episode.begin();
        debug!(position = ?start.position, "episode begin");
    }

    pub fn collect_observations(&self) -> Observation {
        Observation::new(
            self.body.position(),
            self.body.linear_velocity(),
            self.checkpoints.next_position(),
        )
    }

    /// Apply one tick of driving input and hand out the shaped reward.
    ///
    /// A stuck termination returns immediately; the collision check does not
    /// run on that tick.
    pub fn on_action_received(&mut self, action: Action) -> TickOutcome {
        let dt = self.config.fixed_delta_time;
        let shaping = self.config.rewards;
        let mut outcome = TickOutcome::default();
        self.episode.tick();

        let forward = self.body.forward();
        self.body
            .apply_velocity_change(forward * action.throttle * self.config.move_speed * dt);
        let yaw = (action.steer * self.config.turn_speed * dt).to_radians();
        self.body
            .set_rotation((self.body.rotation() * Quat::from_rotation_y(yaw)).normalize());

        let position = self.body.position();
        let target = self.checkpoints.next_position();

        outcome.distance = -position.distance(target) * shaping.distance_penalty;
        self.episode.add_reward(outcome.distance);

        let direction = (target - position).normalize_or_zero();
        outcome.alignment = self.body.forward().dot(direction) * shaping.alignment_bonus;
        self.episode.add_reward(outcome.alignment);

        let moved = position.distance(self.books.last_position);
        self.books.move_distance += moved;
        if moved < shaping.stuck_distance {
            self.books.stuck_timer += dt;
            if self.books.stuck_timer > self.config.stuck_threshold {
                outcome.stuck = -shaping.stuck_penalty;
                self.episode.add_reward(outcome.stuck);
                self.terminate(Termination::Stuck, &mut outcome);
                return outcome;
            }
        } else {
            self.books.stuck_timer = 0.0;
        }
        self.books.last_position = position;

        if self.collision.is_colliding(&self.body) {
            outcome.collision = -shaping.collision_penalty;
            self.episode.add_reward(outcome.collision);
            self.terminate(Termination::Collision, &mut outcome);
        }

        trace!(
            reward = outcome.reward(),
            moved,
            stuck_timer = self.books.stuck_timer,
            "tick"
        );
        outcome
    }

    /// Hook for the agent entering the next checkpoint's trigger.
    pub fn checkpoint_reached(&mut self) {
        self.episode.add_reward(self.config.rewards.checkpoint_reward);
        self.checkpoints.advance();
        self.books.stuck_timer = 0.0;
    }

    /// Hook for the agent passing the final checkpoint.
    pub fn goal_reached(&mut self) {
        self.episode.add_reward(self.config.rewards.goal_reward);
        self.episode.terminate(Termination::Goal);
    }

    /// End the episode on behalf of the training channel.
    pub fn end_episode(&mut self) {
        self.episode.terminate(Termination::External);
    }

    /// Drain the reward added since the last drain.
    pub fn take_reward(&mut self) -> f32 {
        self.episode.take_pending()
    }

    /// Manual-control fallback; touches neither reward nor observations.
    pub fn heuristic(&self, input: &dyn InputAxes) -> Action {
        input::heuristic(input)
    }

    fn terminate(&mut self, reason: Termination, outcome: &mut TickOutcome) {
        if self.episode.terminate(reason) {
            outcome.termination = Some(reason);
        }
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn checkpoints(&self) -> &C {
        &self.checkpoints
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn bookkeeping(&self) -> &Bookkeeping {
        &self.books
    }

    pub fn episode(&self) -> &Episode {
        &self.episode
    }

    pub fn status(&self) -> EpisodeStatus {
        self.episode.status()
    }

    pub fn stuck_timer(&self) -> f32 {
        self.books.stuck_timer
    }

    pub fn move_distance(&self) -> f32 {
        self.books.move_distance
    }
}
