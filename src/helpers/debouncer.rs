use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs only the last of a burst of calls, `delay` after it was made.
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        }
    }

    /// Schedules `task`. Calls still waiting out their delay are superseded
    /// and never run.
    ///
    /// A task that already started running is not interrupted.
    pub fn call<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let generation = Arc::clone(&self.generation);
        let scheduled = generation.fetch_add(1, Ordering::SeqCst) + 1;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == scheduled {
                task().await;
            }
        });

        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        // waiting calls give up; a running task finishes
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
