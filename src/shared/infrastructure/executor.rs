use std::future::Future;

use tokio::runtime::Handle;

/// Executor for background work.
///
/// Wraps a handle to a multi-thread tokio runtime whose workers are
/// distinct from the interactive thread. Spawned work is detached:
/// submission order implies no execution order between unrelated
/// submissions, and a panic inside a task is contained by the runtime
/// rather than surfaced to the submitter, so the work must handle its
/// own failures.
#[derive(Debug, Clone)]
pub struct TaskExecutor {
    handle: Handle,
}

impl TaskExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Executor bound to the runtime of the calling context.
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self {
            handle: Handle::current(),
        }
    }

    /// Schedule `work` on the background pool and return immediately.
    pub fn spawn<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(work);
    }
}
