use serde::{Deserialize, Serialize};
use tracing::info;

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    Stuck,
    Collision,
    Goal,
    /// Ended by the training channel, e.g. a step limit.
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeStatus {
    /// Built but never reset.
    Idle,
    Running,
    Terminated(Termination),
}

/// Reward ledger and lifecycle of the current episode.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    status: EpisodeStatus,
    cumulative_reward: f32,
    pending_reward: f32,
    ticks: u64,
}

impl Default for Episode {
    fn default() -> Self {
        Self {
            status: EpisodeStatus::Idle,
            cumulative_reward: 0.0,
            pending_reward: 0.0,
            ticks: 0,
        }
    }
}

impl Episode {
    pub fn begin(&mut self) {
        self.status = EpisodeStatus::Running;
        self.cumulative_reward = 0.0;
        self.pending_reward = 0.0;
        self.ticks = 0;
    }

    pub fn add_reward(&mut self, reward: f32) {
        self.cumulative_reward += reward;
        self.pending_reward += reward;
    }

    /// Reward accumulated since the previous call.
    pub fn take_pending(&mut self) -> f32 {
        std::mem::take(&mut self.pending_reward)
    }

    /// Returns false if the episode was not running; the first termination
    /// reason always wins.
    pub fn terminate(&mut self, reason: Termination) -> bool {
        if self.status != EpisodeStatus::Running {
            return false;
        }
        self.status = EpisodeStatus::Terminated(reason);
        info!(
            ?reason,
            ticks = self.ticks,
            cumulative_reward = self.cumulative_reward,
            "episode terminated"
        );
        true
    }

    pub(crate) fn tick(&mut self) {
        self.ticks += 1;
    }

    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == EpisodeStatus::Running
    }

    pub fn termination(&self) -> Option<Termination> {
        match self.status {
            EpisodeStatus::Terminated(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn cumulative_reward(&self) -> f32 {
        self.cumulative_reward
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_termination_wins() {
        let mut episode = Episode::default();
        assert!(!episode.terminate(Termination::Goal));
        assert_eq!(episode.status(), EpisodeStatus::Idle);

        episode.begin();
        assert!(episode.terminate(Termination::Stuck));
        assert!(!episode.terminate(Termination::Collision));
        assert_eq!(episode.termination(), Some(Termination::Stuck));
    }

    #[test]
    fn pending_reward_drains_but_cumulative_keeps() {
        let mut episode = Episode::default();
        episode.begin();
        episode.add_reward(1.0);
        episode.add_reward(-0.25);
        assert_eq!(episode.take_pending(), 0.75);
        assert_eq!(episode.take_pending(), 0.0);
        assert_eq!(episode.cumulative_reward(), 0.75);

        episode.begin();
        assert_eq!(episode.cumulative_reward(), 0.0);
    }
}
