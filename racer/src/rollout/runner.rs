use std::time::Instant;

use futures::future::{BoxFuture, join_all};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::{LocalScheduler, RolloutConfig, RolloutError, RolloutStats, Scheduler, Task, TrajectorySink};
use crate::env::{Env, EnvError, Step, TrajectoryShard};
use crate::policy::Policy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeReport {
    pub shard_id: Uuid,
    pub steps: u64,
    pub total_reward: f32,
    /// False when the episode was cut off by the step limit.
    pub done: bool,
}

// The basic RL loop
pub fn run_episode<E, P>(
    env: &mut E,
    policy: &mut P,
    max_steps: Option<u64>,
) -> Result<(EpisodeReport, TrajectoryShard<E::Obs, E::Act>), EnvError>
where
    E: Env + ?Sized,
    E::Info: Serialize,
    P: Policy<E::Obs, E::Act> + ?Sized,
{
    let mut shard = TrajectoryShard::new();
    let mut obs = env.reset()?;
    let mut total_reward = 0.0;
    let mut done = false;

    while !done && max_steps.is_none_or(|max| (shard.len() as u64) < max) {
        let act = policy.act(&obs);
        let (next_obs, rew, is_done, info) = env.step(act.clone())?;
        total_reward += rew;
        done = is_done;
        shard.steps.push(Step {
            obs,
            act,
            rew,
            done,
            info: serde_json::to_value(&info)?,
        });
        obs = next_obs;
    }

    let report = EpisodeReport {
        shard_id: shard.id,
        steps: shard.len() as u64,
        total_reward,
        done,
    };
    Ok((report, shard))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerOutput<O, A> {
    pub worker: usize,
    pub reports: Vec<EpisodeReport>,
    pub shards: Vec<TrajectoryShard<O, A>>,
}

/// One worker: an environment and a policy running a fixed number of
/// episodes back to back.
pub struct EpisodeTask<E, P> {
    worker: usize,
    env: E,
    policy: P,
    episodes: u64,
    max_steps: Option<u64>,
}

impl<E, P> EpisodeTask<E, P>
where
    E: Env + 'static,
    E::Info: Serialize,
    P: Policy<E::Obs, E::Act> + 'static,
{
    pub fn new(worker: usize, env: E, policy: P, episodes: u64, max_steps: Option<u64>) -> Self {
        Self {
            worker,
            env,
            policy,
            episodes,
            max_steps,
        }
    }

    async fn run(mut self) -> Result<WorkerOutput<E::Obs, E::Act>, EnvError> {
        let mut output = WorkerOutput {
            worker: self.worker,
            reports: Vec::new(),
            shards: Vec::new(),
        };

        for episode in 0..self.episodes {
            let (report, shard) = run_episode(&mut self.env, &mut self.policy, self.max_steps)?;
            info!(
                worker = self.worker,
                episode,
                steps = report.steps,
                total_reward = report.total_reward,
                "Episode completed"
            );
            output.reports.push(report);
            output.shards.push(shard);
            tokio::task::yield_now().await;
        }

        self.env.close()?;
        Ok(output)
    }
}

impl<E, P> Task for EpisodeTask<E, P>
where
    E: Env + 'static,
    E::Info: Serialize,
    P: Policy<E::Obs, E::Act> + 'static,
{
    type Output = Result<WorkerOutput<E::Obs, E::Act>, EnvError>;
    type Future = BoxFuture<'static, Self::Output>;

    fn call(self) -> Self::Future {
        Box::pin(self.run())
    }
}

/// Run `config.episodes` episodes spread over `config.num_workers`
/// environments in parallel and hand every trajectory to `sink`.
pub async fn collect_rollouts<E, P, S, FE, FP>(
    make_env: FE,
    mut make_policy: FP,
    config: &RolloutConfig,
    sink: &mut S,
) -> Result<RolloutStats, RolloutError>
where
    E: Env + 'static,
    E::Info: Serialize,
    P: Policy<E::Obs, E::Act> + 'static,
    S: TrajectorySink<E::Obs, E::Act> + ?Sized,
    FE: Fn(usize) -> Result<E, EnvError>,
    FP: FnMut(usize) -> P,
{
    let started = Instant::now();
    let scheduler = LocalScheduler::new();

    // Build every worker before spawning any, so a failed env leaves nothing running.
    let mut tasks = Vec::new();
    for (worker, episodes) in config.episodes_per_worker().into_iter().enumerate() {
        tasks.push(EpisodeTask::new(
            worker,
            make_env(worker)?,
            make_policy(worker),
            episodes,
            config.max_steps_per_episode,
        ));
    }
    let handles: Vec<_> = tasks.into_iter().map(|task| scheduler.submit(task)).collect();

    let mut total_steps = 0;
    let mut total_episodes = 0;
    let mut return_sum = 0.0;
    for output in join_all(handles).await {
        let output = output??;
        for report in &output.reports {
            total_steps += report.steps;
            total_episodes += 1;
            return_sum += report.total_reward;
        }
        sink.submit(output.shards).await?;
    }

    let mean_return = if total_episodes == 0 {
        0.0
    } else {
        return_sum / total_episodes as f32
    };
    let stats = RolloutStats {
        total_steps,
        total_episodes,
        mean_return,
        elapsed: started.elapsed(),
    };
    info!(?stats, "rollout collection finished");
    Ok(stats)
}
