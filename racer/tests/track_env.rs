use glam::{Quat, Vec3};
use racer::agent::{Action, CarAgent, Termination};
use racer::checkpoint::{CheckpointCourse, CheckpointTracker};
use racer::env::{Env, EnvError, TrackEnv, VecEnv};
use racer::physics::{PhysicsBody, Pose, RigidBody};

const TRACK: &str = r#"{
    "checkpoints": [[0, 0, 5], [0, 0, 10]],
    "trigger_radius": 1.0
}"#;

fn drive(env: &mut TrackEnv, action: Action, limit: usize) -> Vec<(f32, bool, Option<Termination>)> {
    let mut trace = Vec::new();
    for _ in 0..limit {
        let (_, reward, done, info) = env.step(action).unwrap();
        trace.push((reward, done, info.termination));
        if done {
            break;
        }
    }
    trace
}

#[test]
fn reset_observation_points_at_first_checkpoint() {
    let mut env = TrackEnv::from_json_str(TRACK).unwrap();
    let obs = env.reset().unwrap();
    assert_eq!(obs.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.0]);
    assert_eq!(env.observation_size(), 9);
    assert_eq!(env.action_size(), 2);
}

#[test]
fn stepping_requires_a_running_episode() {
    let mut env = TrackEnv::from_json_str(TRACK).unwrap();
    assert!(matches!(
        env.step(Action::default()),
        Err(EnvError::EpisodeNotRunning)
    ));

    env.reset().unwrap();
    env.agent_mut().end_episode();
    assert!(matches!(
        env.step(Action::default()),
        Err(EnvError::EpisodeNotRunning)
    ));
}

#[test]
fn driving_straight_collects_checkpoint_then_goal() {
    let mut env = TrackEnv::from_json_str(TRACK).unwrap();
    env.reset().unwrap();

    let trace = drive(&mut env, Action::new(1.0, 0.0), 500);
    let (last_reward, done, termination) = *trace.last().unwrap();

    assert!(done);
    assert_eq!(termination, Some(Termination::Goal));
    assert!(last_reward > 4.9, "goal tick reward {last_reward}");

    let checkpoint_ticks = trace
        .iter()
        .filter(|(reward, _, _)| *reward > 0.9 && *reward < 2.0)
        .count();
    assert_eq!(checkpoint_ticks, 1);
    assert_eq!(env.agent().checkpoints().current_index(), 1);
    assert!(env.agent().move_distance() > 8.0);
}

#[test]
fn idling_ends_the_episode_as_stuck() {
    let mut env = TrackEnv::from_json_str(TRACK).unwrap();
    env.reset().unwrap();

    let trace = drive(&mut env, Action::default(), 1000);
    let (last_reward, done, termination) = *trace.last().unwrap();

    assert!(done);
    assert_eq!(termination, Some(Termination::Stuck));
    // 3s threshold at 0.02s per tick
    assert!((150..=152).contains(&trace.len()), "ticks {}", trace.len());
    // stuck penalty on top of the distance and alignment terms
    assert!((last_reward - (-0.005 + 0.1 - 0.5)).abs() < 1e-4);
}

#[test]
fn step_limit_ends_the_episode_externally() {
    let mut env = TrackEnv::from_json_str(
        r#"{"agent": {"max_steps": 10}, "checkpoints": [[0, 0, 5]]}"#,
    )
    .unwrap();
    env.reset().unwrap();

    let trace = drive(&mut env, Action::default(), 100);
    assert_eq!(trace.len(), 10);
    assert_eq!(trace.last().unwrap().2, Some(Termination::External));
}

#[test]
fn leaving_the_arena_is_a_collision() {
    let mut env = TrackEnv::from_json_str(
        r#"{"checkpoints": [[0, 0, 50]], "bounds": [[-1, -1, -1], [1, 1, 1]]}"#,
    )
    .unwrap();
    env.reset().unwrap();

    let trace = drive(&mut env, Action::new(1.0, 0.0), 200);
    let (last_reward, done, termination) = *trace.last().unwrap();
    assert!(done);
    assert_eq!(termination, Some(Termination::Collision));
    assert!(last_reward < -0.8);
}

#[test]
fn reset_restores_configured_start_pose() {
    let mut env = TrackEnv::from_json_str(
        r#"{
            "checkpoints": [[0, 0, 5], [0, 0, 10]],
            "start": {"position": [3, 0, 4], "rotation": [0, 0.38268343, 0, 0.9238795]}
        }"#,
    )
    .unwrap();
    env.reset().unwrap();
    let start = env.agent().bookkeeping().start();

    drive(&mut env, Action::new(1.0, 1.0), 40);
    assert_ne!(env.agent().body().position(), start.position);

    let obs = env.reset().unwrap();
    assert_eq!(obs.position(), Vec3::new(3.0, 0.0, 4.0));
    assert_eq!(obs.velocity(), Vec3::ZERO);
    assert_eq!(env.agent().body().rotation(), start.rotation);
    assert_eq!(env.agent().stuck_timer(), 0.0);
    assert_eq!(env.agent().move_distance(), 0.0);
}

#[test]
fn throttle_changes_velocity_along_rotated_forward() {
    let start = Pose::new(Vec3::ZERO, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
    let mut agent = CarAgent::builder()
        .physics(RigidBody::new(start))
        .checkpoints(CheckpointCourse::new(vec![Vec3::new(10.0, 0.0, 0.0)], 1.0).unwrap())
        .build()
        .unwrap();
    agent.on_episode_begin();
    agent.on_action_received(Action::new(1.0, 0.0));

    let velocity = agent.body().linear_velocity();
    assert!((velocity - Vec3::new(0.1, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn alignment_stays_within_bounds() {
    let mut course = CheckpointCourse::new(
        vec![
            Vec3::new(7.0, 0.0, -3.0),
            Vec3::new(-4.0, 2.0, 9.0),
            Vec3::new(0.0, -5.0, 0.5),
        ],
        0.5,
    )
    .unwrap();
    for _ in 0..3 {
        for step in 0..72 {
            let yaw = (step as f32 * 5.0).to_radians();
            let pitch = (step as f32 * 11.0).to_radians();
            let body = RigidBody::new(Pose::new(
                Vec3::new(1.0, 0.0, 1.0),
                Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch),
            ));
            let mut agent = CarAgent::builder()
                .physics(body)
                .checkpoints(course.clone())
                .build()
                .unwrap();
            let outcome = agent.on_action_received(Action::default());
            assert!(outcome.alignment.abs() <= 0.1 + 1e-6);
        }
        course.advance();
    }
}

#[test]
fn vec_env_steps_in_lockstep() {
    let mut envs = VecEnv::try_new(|| TrackEnv::from_json_str(TRACK), 3).unwrap();
    assert_eq!(envs.len(), 3);
    assert_eq!(envs.reset().unwrap().len(), 3);

    let err = envs.step(vec![Action::default(); 2]).unwrap_err();
    assert!(matches!(err, EnvError::ActionCount { expected: 3, got: 2 }));

    let results = envs.step(vec![Action::new(1.0, 0.0); 3]).unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|(_, _, done, _)| !done));
    envs.close().unwrap();
}

#[test]
fn empty_course_is_rejected() {
    let err = TrackEnv::from_json_str(r#"{"checkpoints": []}"#).err().unwrap();
    assert!(matches!(err, EnvError::Checkpoint(_)));
}
