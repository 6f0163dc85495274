use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

// ============================================================================
// Debounce scheduler
//
// A caller-owned value, not a global timer: each `schedule()` supersedes
// any not-yet-fired prior request on the same scheduler, and the returned
// handle carries an explicit per-call cancel. Cancellation is simply
// "never run".
// ============================================================================

pub struct Debouncer {
    delay: Duration,
    generation: Arc<Mutex<u64>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            generation: Arc::new(Mutex::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `job` to run after the debounce delay. Any prior request
    /// on this scheduler that has not fired yet will never run; only the
    /// most recent request in a burst executes.
    pub fn schedule<F>(&self, job: F) -> TaskHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let my_generation = {
            let mut current = match self.generation.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *current += 1;
            *current
        };

        let cancelled = Arc::new(AtomicBool::new(false));
        let cancelled_flag = Arc::clone(&cancelled);
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;

        let worker = thread::spawn(move || {
            thread::sleep(delay);

            if cancelled_flag.load(Ordering::SeqCst) {
                return false;
            }
            let current = match generation.lock() {
                Ok(guard) => *guard,
                Err(poisoned) => *poisoned.into_inner(),
            };
            if current != my_generation {
                return false; // superseded by a newer request
            }

            job();
            true
        });

        TaskHandle { cancelled, worker }
    }
}

/// Handle to one scheduled call.
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
    worker: JoinHandle<bool>,
}

impl TaskHandle {
    /// Prevent the job from running if it has not fired yet.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Wait for the scheduled slot to pass; reports whether the job ran.
    pub fn join(self) -> bool {
        self.worker.join().unwrap_or(false)
    }
}
