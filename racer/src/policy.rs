use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::agent::{Action, Observation};
use crate::input::{self, InputAxes};

/// Anything that maps an observation to an action.
pub trait Policy<O, A>: Send {
    fn act(&mut self, obs: &O) -> A;
}

impl<O, A, F> Policy<O, A> for F
where
    F: FnMut(&O) -> A + Send,
{
    fn act(&mut self, obs: &O) -> A {
        (*self)(obs)
    }
}

/// Samples each action component from a standard normal distribution,
/// ignoring the observation.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn standard_normal(&mut self) -> f32 {
        self.rng.sample(StandardNormal)
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy<Observation, Action> for RandomPolicy {
    fn act(&mut self, _obs: &Observation) -> Action {
        Action::new(self.standard_normal(), self.standard_normal())
    }
}

/// Drives from manual input axes.
pub struct HeuristicPolicy<I> {
    input: I,
}

impl<I: InputAxes> HeuristicPolicy<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

impl<I: InputAxes + Send> Policy<Observation, Action> for HeuristicPolicy<I> {
    fn act(&mut self, _obs: &Observation) -> Action {
        input::heuristic(&self.input)
    }
}
