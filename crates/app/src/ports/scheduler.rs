//! Scheduler port — detached tasks on the event loop.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

/// Longest delay a browser timer honours (`i32::MAX` ms); anything longer
/// fires immediately.
pub const MAX_TIMER_MS: u32 = 2_147_483_647;

/// A detached unit of work. Nobody awaits its completion.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Runs [`LocalTask`]s without blocking the caller.
///
/// There is no cancellation: once handed over, a task always runs.
pub trait Scheduler {
    /// Start `task` on the next turn of the event loop.
    fn spawn(&self, task: LocalTask);

    /// Start `task` once `delay` has elapsed.
    fn spawn_after(&self, delay: Duration, task: LocalTask);
}

impl<T: Scheduler> Scheduler for Rc<T> {
    fn spawn(&self, task: LocalTask) {
        (**self).spawn(task);
    }

    fn spawn_after(&self, delay: Duration, task: LocalTask) {
        (**self).spawn_after(delay, task);
    }
}

/// Milliseconds to hand to a timer for `delay`, clamped to [`MAX_TIMER_MS`].
#[must_use]
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_TIMER_MS, |ms| ms.min(MAX_TIMER_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_short_delays_exact() {
        assert_eq!(timer_millis(Duration::from_millis(1000)), 1000);
        assert_eq!(timer_millis(Duration::ZERO), 0);
    }

    #[test]
    fn should_clamp_delay_when_beyond_browser_timer_range() {
        let just_over = Duration::from_millis(u64::from(MAX_TIMER_MS) + 1);
        assert_eq!(timer_millis(just_over), MAX_TIMER_MS);
        assert_eq!(timer_millis(Duration::from_secs(u64::MAX)), MAX_TIMER_MS);
    }
}
