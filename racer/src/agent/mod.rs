mod bookkeeping;
mod controller;
mod episode;
mod errors;
mod types;

pub use bookkeeping::Bookkeeping;
pub use controller::{CarAgent, CarAgentBuilder, TickOutcome};
pub use episode::{Episode, EpisodeStatus, Termination};
pub use errors::AgentError;
pub use types::{ACTION_SIZE, Action, OBSERVATION_SIZE, Observation};
