use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step<O, A> {
    pub obs: O,
    pub act: A,
    pub rew: f32,
    pub done: bool,
    pub info: serde_json::Value, // Keep it simple for now
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryShard<O, A> {
    pub id: Uuid,
    pub steps: Vec<Step<O, A>>,
}

impl<O, A> TrajectoryShard<O, A> {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn total_reward(&self) -> f32 {
        self.steps.iter().map(|step| step.rew).sum()
    }
}

impl<O, A> Default for TrajectoryShard<O, A> {
    fn default() -> Self {
        Self::new()
    }
}
