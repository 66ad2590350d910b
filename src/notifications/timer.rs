// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers.
//!
//! The queue asks a [`Timer`] to schedule one expiry per visible toast and
//! cancels it when the toast leaves the screen early. Timers never touch the
//! queue themselves: a firing is reported back to the host, which forwards it
//! to [`ToastQueue::expire`](super::ToastQueue::expire).

use super::notification::NotificationId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Handle of a scheduled expiry, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Schedules and cancels auto-dismiss expiries.
pub trait Timer {
    /// Arranges for `id` to be reported as expired after `delay`.
    fn schedule(&mut self, id: NotificationId, delay: Duration) -> TimerHandle;

    /// Cancels a scheduled expiry. Cancelling a handle that already fired
    /// or was already cancelled does nothing.
    fn cancel(&mut self, handle: TimerHandle);
}

// =============================================================================
// ManualTimer
// =============================================================================

/// Virtual-clock timer, advanced explicitly.
///
/// Used by tests and by hosts that drive time from their own tick.
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_handle: u64,
    pending: Vec<Scheduled>,
}

#[derive(Debug)]
struct Scheduled {
    handle: TimerHandle,
    id: NotificationId,
    deadline: Duration,
}

impl ManualTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of expiries scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward and returns the ids whose deadline passed,
    /// earliest deadline first.
    pub fn advance(&mut self, delta: Duration) -> Vec<NotificationId> {
        self.now += delta;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.deadline <= now);
        self.pending = pending;

        due.sort_by_key(|s| s.deadline);
        due.into_iter().map(|s| s.id).collect()
    }

    /// Fires the earliest expiry due no later than `target`, moving the clock
    /// to its deadline. When none is due, moves the clock to `target` and
    /// returns `None`.
    pub fn advance_until(&mut self, target: Duration) -> Option<NotificationId> {
        let earliest = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.deadline <= target)
            .min_by_key(|(_, s)| s.deadline)
            .map(|(pos, _)| pos);

        match earliest {
            Some(pos) => {
                let fired = self.pending.remove(pos);
                self.now = self.now.max(fired.deadline);
                Some(fired.id)
            }
            None => {
                self.now = self.now.max(target);
                None
            }
        }
    }
}

impl Timer for ManualTimer {
    fn schedule(&mut self, id: NotificationId, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Scheduled {
            handle,
            id,
            deadline: self.now + delay,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|s| s.handle != handle);
    }
}

// =============================================================================
// TokioTimer
// =============================================================================

/// Timer backed by tokio tasks.
///
/// Each schedule spawns a sleeping task that sends the id on the channel
/// returned by [`TokioTimer::new`]. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioTimer {
    expired_tx: mpsc::UnboundedSender<NotificationId>,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
    next_handle: u64,
}

impl TokioTimer {
    /// Creates the timer and the receiver on which expiries arrive.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NotificationId>) {
        let (expired_tx, expired_rx) = mpsc::unbounded_channel();
        let timer = Self {
            expired_tx,
            tasks: HashMap::new(),
            next_handle: 0,
        };
        (timer, expired_rx)
    }
}

impl Timer for TokioTimer {
    fn schedule(&mut self, id: NotificationId, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        // Finished tasks are only removed on cancel; drop them here too.
        self.tasks.retain(|_, task| !task.is_finished());

        let tx = self.expired_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the host is shutting down.
            let _ = tx.send(id);
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> NotificationId {
        NotificationId::from_raw(raw)
    }

    #[test]
    fn manual_timer_fires_after_deadline() {
        let mut timer = ManualTimer::new();
        timer.schedule(id(1), Duration::from_millis(100));

        assert!(timer.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(timer.advance(Duration::from_millis(1)), vec![id(1)]);
        assert_eq!(timer.pending_count(), 0);
    }

    #[test]
    fn manual_timer_cancelled_handle_never_fires() {
        let mut timer = ManualTimer::new();
        let handle = timer.schedule(id(1), Duration::from_millis(10));
        timer.cancel(handle);
        timer.cancel(handle);

        assert!(timer.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn manual_timer_reports_in_deadline_order() {
        let mut timer = ManualTimer::new();
        timer.schedule(id(1), Duration::from_millis(30));
        timer.schedule(id(2), Duration::from_millis(10));

        assert_eq!(timer.advance(Duration::from_millis(50)), vec![id(2), id(1)]);
        assert_eq!(timer.now(), Duration::from_millis(50));
    }

    #[test]
    fn advance_until_steps_through_deadlines() {
        let mut timer = ManualTimer::new();
        timer.schedule(id(1), Duration::from_millis(30));
        timer.schedule(id(2), Duration::from_millis(10));
        let target = Duration::from_millis(20);

        assert_eq!(timer.advance_until(target), Some(id(2)));
        assert_eq!(timer.now(), Duration::from_millis(10));
        assert_eq!(timer.advance_until(target), None);
        assert_eq!(timer.now(), target);
        assert_eq!(timer.pending_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_sends_expired_id() {
        let (mut timer, mut expired) = TokioTimer::new();
        timer.schedule(id(3), Duration::from_secs(5));

        assert_eq!(expired.recv().await, Some(id(3)));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_cancel_suppresses_expiry() {
        let (mut timer, mut expired) = TokioTimer::new();
        let cancelled = timer.schedule(id(1), Duration::from_secs(1));
        timer.schedule(id(2), Duration::from_secs(2));
        timer.cancel(cancelled);

        assert_eq!(expired.recv().await, Some(id(2)));
    }
}
