//! Scheduler backed by the browser event loop.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use relayboard_app::ports::{LocalTask, Scheduler, timer_millis};

/// Spawns tasks with `spawn_local`, delaying them with `setTimeout`. Delays
/// past the browser timer range are clamped rather than firing at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn spawn(&self, task: LocalTask) {
        spawn_local(task);
    }

    fn spawn_after(&self, delay: Duration, task: LocalTask) {
        let millis = timer_millis(delay);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            task.await;
        });
    }
}
