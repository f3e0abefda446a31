mod config;
mod error;
mod handle;
mod runner;
mod scheduler;
mod sink;
mod task;

pub use config::{RolloutConfig, RolloutStats};
pub use error::RolloutError;
pub use handle::TaskHandle;
pub use runner::{EpisodeReport, EpisodeTask, WorkerOutput, collect_rollouts, run_episode};
pub use scheduler::{LocalScheduler, Scheduler};
pub use sink::{ShardBuffer, TrajectorySink};
pub use task::Task;
