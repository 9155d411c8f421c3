//! Cancellable scheduled tasks tied to a view's lifetime.
//!
//! DESIGN
//! ======
//! A `TaskGuard` is a shared liveness flag. Components create one, hand
//! clones to the tasks they schedule, and cancel it from `on_cleanup`. Tasks
//! check the flag after every wait and before touching state, so nothing
//! runs against a disposed view. The flag is `Send + Sync` to satisfy
//! `on_cleanup`; the tasks themselves run on the local executor.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct TaskGuard {
    alive: Arc<AtomicBool>,
}

impl Default for TaskGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGuard {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop every task holding a clone of this guard.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Run `f` once after `delay_ms`, unless the guard is cancelled first.
#[cfg(feature = "hydrate")]
pub fn schedule_once(guard: &TaskGuard, delay_ms: u32, f: impl FnOnce() + 'static) {
    let guard = guard.clone();
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
        if guard.is_alive() {
            f();
        }
    });
}

/// Run `step` repeatedly. Each call returns the delay before the next one,
/// or `None` to stop. Cancelling the guard stops the loop before the next
/// call.
#[cfg(feature = "hydrate")]
pub fn schedule_repeating(guard: &TaskGuard, first_delay_ms: u32, mut step: impl FnMut() -> Option<u32> + 'static) {
    let guard = guard.clone();
    leptos::task::spawn_local(async move {
        let mut delay_ms = first_delay_ms;
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
            if !guard.is_alive() {
                break;
            }
            match step() {
                Some(next) => delay_ms = next,
                None => break,
            }
        }
    });
}
