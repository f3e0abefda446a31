use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use uuid::Uuid;

use super::RolloutError;

/// Resolves to the output of a submitted task, or [`RolloutError::Canceled`]
/// if the task was dropped before finishing (e.g. it panicked).
pub struct TaskHandle<T> {
    id: Uuid,
    receiver: oneshot::Receiver<T>,
}

// Manual Debug implementation - works regardless of whether T implements Debug
impl<T> fmt::Debug for TaskHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("id", &self.id)
            .field("result_type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> TaskHandle<T> {
    pub(crate) fn new(id: Uuid, receiver: oneshot::Receiver<T>) -> Self {
        Self { id, receiver }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl<T> Future for TaskHandle<T> {
    type Output = Result<T, RolloutError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.map_err(RolloutError::from))
    }
}
