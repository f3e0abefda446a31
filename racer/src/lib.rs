//! Checkpoint-racing vehicle agent and the environment plumbing around it.
//!
//! [`agent::CarAgent`] holds the per-episode logic: reset, observations,
//! action application and shaped reward. Its collaborators (physics body,
//! checkpoint tracker, collision signal, manual input) are traits with small
//! stand-in implementations. [`env::TrackEnv`] drives one agent through the
//! [`env::Env`] interface, and [`rollout`] collects trajectories from many of
//! them for an external learner.

pub mod agent;
pub mod checkpoint;
pub mod config;
pub mod env;
pub mod input;
pub mod physics;
pub mod policy;
pub mod rollout;
pub mod sensor;

pub use agent::{Action, CarAgent, Observation, Termination};
pub use config::{AgentConfig, RewardShaping, TrackConfig};
pub use env::{Env, TrackEnv, VecEnv};
