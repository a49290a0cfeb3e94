use std::future::Future;
use std::sync::Mutex;

use tokio::task::JoinSet;

/// Tasks launched on behalf of one screen. Dropping the scope aborts them;
/// their results are discarded.
#[derive(Default)]
pub struct ScreenScope {
    tasks: Mutex<JoinSet<()>>,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        while tasks.try_join_next().is_some() {}
        tasks.spawn(task);
    }
}
