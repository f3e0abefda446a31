use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloutConfig {
    pub episodes: u64,
    /// Truncate an episode after this many steps if it has not ended.
    pub max_steps_per_episode: Option<u64>,
    /// Independent environments collected in parallel.
    pub num_workers: usize,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            episodes: 1000,
            max_steps_per_episode: Some(5_000),
            num_workers: 1,
        }
    }
}

impl RolloutConfig {
    /// Episodes assigned to each worker; earlier workers take the remainder.
    pub fn episodes_per_worker(&self) -> Vec<u64> {
        let workers = self.num_workers.max(1) as u64;
        let base = self.episodes / workers;
        let extra = self.episodes % workers;
        (0..workers)
            .map(|worker| base + u64::from(worker < extra))
            .filter(|&n| n > 0)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct RolloutStats {
    pub total_steps: u64,
    pub total_episodes: u64,
    pub mean_return: f32,
    pub elapsed: Duration,
}
