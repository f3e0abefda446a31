use std::future::Future;

/// A unit of rollout work that can be handed to a [`Scheduler`](super::Scheduler).
pub trait Task: Send {
    type Output: Send + 'static;
    type Future: Future<Output = Self::Output> + Send + 'static;

    fn call(self) -> Self::Future;
}
