use tokio::sync::oneshot;
use tracing::debug;
use uuid::Uuid;

use super::{Task, TaskHandle};

pub trait Scheduler: Send + Sync {
    fn submit<T>(&self, task: T) -> TaskHandle<T::Output>
    where
        T: Task + 'static;
}

/// Runs tasks on the current tokio runtime. `submit` must be called from
/// within a runtime.
#[derive(Debug, Default)]
pub struct LocalScheduler {}

impl LocalScheduler {
    pub fn new() -> Self {
        Self {}
    }
}

impl Scheduler for LocalScheduler {
    fn submit<T>(&self, task: T) -> TaskHandle<T::Output>
    where
        T: Task + 'static,
    {
        let task_id = Uuid::new_v4();
        let (sender, receiver) = oneshot::channel();
        debug!(%task_id, "task submitted");

        tokio::spawn(async move {
            let result = task.call().await;
            let _ = sender.send(result);
        });

        TaskHandle::new(task_id, receiver)
    }
}
