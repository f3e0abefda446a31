use racer::agent::{Action, Observation};
use racer::env::TrackEnv;
use racer::policy::RandomPolicy;
use racer::rollout::{RolloutConfig, ShardBuffer, collect_rollouts};

const TRACK: &str = r#"{
    "agent": {"move_speed": 5.0, "turn_speed": 100.0, "stuck_threshold": 3.0},
    "checkpoints": [[0, 0, 10], [10, 0, 20], [20, 0, 20], [30, 0, 10]],
    "trigger_radius": 2.0,
    "drag": 0.1,
    "bounds": [[-20, -5, -10], [50, 5, 40]]
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("🚀 Collecting random-policy rollouts");

    let config = RolloutConfig {
        episodes: 20,
        max_steps_per_episode: Some(2_000),
        num_workers: 4,
    };
    let mut sink: ShardBuffer<Observation, Action> = ShardBuffer::new();

    let stats = collect_rollouts(
        |_| TrackEnv::from_json_str(TRACK),
        |worker| RandomPolicy::with_seed(worker as u64),
        &config,
        &mut sink,
    )
    .await?;

    println!(
        "✅ {} episodes, {} steps, mean return {:.3} in {:?}",
        stats.total_episodes, stats.total_steps, stats.mean_return, stats.elapsed
    );
    Ok(())
}
