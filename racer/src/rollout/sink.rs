use async_trait::async_trait;

use super::RolloutError;
use crate::env::TrajectoryShard;

/// Where finished trajectories go, typically a learner's replay intake.
#[async_trait]
pub trait TrajectorySink<O, A>: Send
where
    O: Send + 'static,
    A: Send + 'static,
{
    async fn submit(&mut self, shards: Vec<TrajectoryShard<O, A>>) -> Result<(), RolloutError>;
}

/// Keeps every submitted shard in memory.
#[derive(Debug)]
pub struct ShardBuffer<O, A> {
    shards: Vec<TrajectoryShard<O, A>>,
}

impl<O, A> ShardBuffer<O, A> {
    pub fn new() -> Self {
        Self { shards: Vec::new() }
    }

    pub fn shards(&self) -> &[TrajectoryShard<O, A>] {
        &self.shards
    }

    pub fn into_shards(self) -> Vec<TrajectoryShard<O, A>> {
        self.shards
    }

    pub fn total_steps(&self) -> usize {
        self.shards.iter().map(TrajectoryShard::len).sum()
    }
}

impl<O, A> Default for ShardBuffer<O, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<O, A> TrajectorySink<O, A> for ShardBuffer<O, A>
where
    O: Send + 'static,
    A: Send + 'static,
{
    async fn submit(&mut self, shards: Vec<TrajectoryShard<O, A>>) -> Result<(), RolloutError> {
        self.shards.extend(shards);
        Ok(())
    }
}
