// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastQueue` shows at most one toast at a time. Later toasts wait in a
//! FIFO backlog and are promoted when the visible one is dismissed or its
//! auto-dismiss timer fires. A newly enqueued toast never preempts the
//! visible one.

use super::notification::{Notification, NotificationId, NotificationInput};
use super::subscription::{Subscriber, Subscribers, SubscriptionId};
use super::timer::{ManualTimer, Timer, TimerHandle};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, DismissReason};
use crate::domain::toast::ToastDuration;
use std::collections::VecDeque;
use std::time::Duration;

/// Messages for toast state changes, for hosts that route UI events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user closed the toast or navigated away through its action.
    Dismiss(NotificationId),
    /// An auto-dismiss timer fired.
    Expired(NotificationId),
}

/// Anything toasts can be handed to.
///
/// Implemented by [`ToastQueue`]; the status watcher is written against this
/// trait so it can be exercised without a timer.
pub trait NotificationSink {
    fn enqueue(&mut self, input: NotificationInput) -> NotificationId;
}

/// Single-slot toast queue with auto-dismiss.
///
/// Dropping the queue cancels the outstanding timer.
#[derive(Debug)]
pub struct ToastQueue<T: Timer> {
    /// The visible toast.
    current: Option<Notification>,
    /// Toasts waiting for the slot, oldest first.
    backlog: VecDeque<Notification>,
    timer: T,
    /// Expiry of `current`; `Some` exactly when `current` is.
    pending_timer: Option<TimerHandle>,
    duration: ToastDuration,
    next_id: u64,
    subscribers: Subscribers,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<T: Timer> ToastQueue<T> {
    /// Creates an empty queue using `timer` for auto-dismiss.
    pub fn new(timer: T, duration: ToastDuration) -> Self {
        Self {
            current: None,
            backlog: VecDeque::new(),
            timer,
            pending_timer: None,
            duration,
            next_id: 0,
            subscribers: Subscribers::default(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Adds a toast and returns its id.
    ///
    /// Shown at once when nothing is visible, otherwise appended to the
    /// backlog.
    pub fn enqueue(&mut self, input: NotificationInput) -> NotificationId {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;
        let notification = Notification::new(id, input);

        debug_assert!(self.current.is_some() || self.backlog.is_empty());
        let backlogged = self.current.is_some();
        self.record(DiagnosticEventKind::ToastEnqueued {
            id,
            kind: notification.kind(),
            backlogged,
        });

        if backlogged {
            log::debug!("toast {id} backlogged behind {}", self.backlog.len() + 1);
            self.backlog.push_back(notification);
        } else {
            self.show(notification);
        }
        id
    }

    /// Dismisses a toast.
    ///
    /// The visible toast is replaced by the next backlogged one; a
    /// backlogged toast is withdrawn without touching the visible one. Unknown
    /// or already dismissed ids are ignored. Returns whether `id` was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.is_current(id) {
            self.close_current(DismissReason::Manual);
            return true;
        }

        if let Some(pos) = self.backlog.iter().position(|n| n.id() == id) {
            self.backlog.remove(pos);
            self.record(DiagnosticEventKind::ToastDismissed {
                id,
                reason: DismissReason::Withdrawn,
            });
            return true;
        }

        log::debug!("dismiss of unknown toast {id} ignored");
        false
    }

    /// Handles a fired auto-dismiss timer.
    ///
    /// Only the visible toast can expire. A late firing for a toast that was
    /// already dismissed is ignored.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if self.is_current(id) {
            self.close_current(DismissReason::Expired);
            true
        } else {
            log::debug!("stale expiry of toast {id} ignored");
            false
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Expired(id) => {
                self.expire(id);
            }
        }
    }

    /// Returns the visible toast.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Toasts waiting behind the visible one, in display order.
    pub fn backlog(&self) -> impl Iterator<Item = &Notification> {
        self.backlog.iter()
    }

    #[must_use]
    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    /// Changes the auto-dismiss window for toasts shown from now on.
    pub fn set_duration(&mut self, duration: ToastDuration) {
        self.duration = duration;
    }

    /// Drops the visible toast and the whole backlog.
    pub fn clear(&mut self) {
        self.cancel_timer();
        for notification in self.backlog.drain(..) {
            if let Some(handle) = &self.diagnostics {
                handle.log(DiagnosticEventKind::ToastDismissed {
                    id: notification.id(),
                    reason: DismissReason::Withdrawn,
                });
            }
        }
        if let Some(notification) = self.current.take() {
            self.record(DiagnosticEventKind::ToastDismissed {
                id: notification.id(),
                reason: DismissReason::Cleared,
            });
            self.subscribers.notify(None);
        }
    }

    /// Registers a callback run whenever the visible toast changes.
    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        self.subscribers.add(subscriber)
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Gives access to the timer, e.g. to advance a [`ManualTimer`].
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn is_current(&self, id: NotificationId) -> bool {
        self.current.as_ref().is_some_and(|n| n.id() == id)
    }

    fn show(&mut self, notification: Notification) {
        self.cancel_timer();
        let id = notification.id();
        self.pending_timer = Some(self.timer.schedule(id, self.duration.as_duration()));
        self.current = Some(notification);
        self.record(DiagnosticEventKind::ToastShown { id });
        self.subscribers.notify(self.current.as_ref());
    }

    fn close_current(&mut self, reason: DismissReason) {
        self.cancel_timer();
        let Some(closed) = self.current.take() else {
            return;
        };
        self.record(DiagnosticEventKind::ToastDismissed {
            id: closed.id(),
            reason,
        });

        match self.backlog.pop_front() {
            Some(next) => self.show(next),
            None => self.subscribers.notify(None),
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.pending_timer.take() {
            self.timer.cancel(handle);
        }
    }

    fn record(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

impl<T: Timer> NotificationSink for ToastQueue<T> {
    fn enqueue(&mut self, input: NotificationInput) -> NotificationId {
        ToastQueue::enqueue(self, input)
    }
}

impl<T: Timer> Drop for ToastQueue<T> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

impl ToastQueue<ManualTimer> {
    /// Queue on a virtual clock, starting at zero.
    #[must_use]
    pub fn manual(duration: ToastDuration) -> Self {
        Self::new(ManualTimer::new(), duration)
    }

    /// Advances the virtual clock and expires every toast whose window
    /// elapsed, including toasts promoted during the advance.
    pub fn advance(&mut self, delta: Duration) {
        let target = self.timer.now() + delta;
        while let Some(id) = self.timer.advance_until(target) {
            self.expire(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
    use std::cell::RefCell;
    use std::rc::Rc;

    const WINDOW: Duration = Duration::from_millis(5_000);

    fn queue() -> ToastQueue<ManualTimer> {
        ToastQueue::manual(ToastDuration::default())
    }

    fn current_id(queue: &ToastQueue<ManualTimer>) -> Option<NotificationId> {
        queue.current().map(Notification::id)
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = queue();
        assert!(queue.current().is_none());
        assert_eq!(queue.backlog_len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn first_enqueue_is_shown_immediately() {
        let mut queue = queue();
        let id = queue.enqueue(NotificationInput::success("Saved"));

        assert_eq!(current_id(&queue), Some(id));
        assert_eq!(queue.backlog_len(), 0);
        assert_eq!(queue.timer_mut().pending_count(), 1);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut queue = queue();
        let a = queue.enqueue(NotificationInput::info("a"));
        let b = queue.enqueue(NotificationInput::info("b"));
        queue.dismiss(a);
        queue.dismiss(b);
        let c = queue.enqueue(NotificationInput::info("c"));

        assert!(a < b && b < c);
    }

    #[test]
    fn newer_toast_does_not_preempt_visible_one() {
        let mut queue = queue();
        let a = queue.enqueue(NotificationInput::success("A"));
        let b = queue.enqueue(NotificationInput::warning("B"));

        assert_eq!(current_id(&queue), Some(a));
        assert_eq!(queue.backlog().map(Notification::id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn backlog_is_shown_in_fifo_order() {
        let mut queue = queue();
        let first = queue.enqueue(NotificationInput::info("first"));
        let a = queue.enqueue(NotificationInput::info("A"));
        let b = queue.enqueue(NotificationInput::info("B"));
        let c = queue.enqueue(NotificationInput::info("C"));

        let mut shown = Vec::new();
        let mut visible = Some(first);
        while let Some(id) = visible {
            queue.dismiss(id);
            visible = current_id(&queue);
            shown.extend(visible);
        }

        assert_eq!(shown, vec![a, b, c]);
    }

    #[test]
    fn dismissing_backlogged_toast_keeps_visible_one() {
        let mut queue = queue();
        let a = queue.enqueue(NotificationInput::info("A"));
        let b = queue.enqueue(NotificationInput::info("B"));
        let c = queue.enqueue(NotificationInput::info("C"));

        assert!(queue.dismiss(b));
        assert_eq!(current_id(&queue), Some(a));

        queue.dismiss(a);
        assert_eq!(current_id(&queue), Some(c));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut queue = queue();
        let a = queue.enqueue(NotificationInput::info("A"));
        let b = queue.enqueue(NotificationInput::info("B"));
        let c = queue.enqueue(NotificationInput::info("C"));

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(current_id(&queue), Some(b));
        assert_eq!(queue.backlog_len(), 1);

        assert!(!queue.dismiss(NotificationId::from_raw(999)));
        assert_eq!(current_id(&queue), Some(b));
        assert_eq!(queue.backlog().next().map(Notification::id), Some(c));
    }

    #[test]
    fn toast_expires_after_window() {
        let mut queue = queue();
        queue.enqueue(NotificationInput::success("A"));

        queue.advance(WINDOW - Duration::from_millis(1));
        assert!(queue.current().is_some());

        queue.advance(Duration::from_millis(1));
        assert!(queue.current().is_none());
        assert_eq!(queue.timer_mut().pending_count(), 0);
    }

    #[test]
    fn promoted_toast_gets_a_full_window() {
        let mut queue = queue();
        queue.enqueue(NotificationInput::info("A"));
        queue.advance(Duration::from_millis(4_000));
        let b = queue.enqueue(NotificationInput::info("B"));

        queue.advance(Duration::from_millis(1_000));
        assert_eq!(current_id(&queue), Some(b));

        queue.advance(WINDOW - Duration::from_millis(1));
        assert_eq!(current_id(&queue), Some(b));
        queue.advance(Duration::from_millis(1));
        assert!(queue.current().is_none());
    }

    #[test]
    fn long_advance_drains_backlog() {
        let mut queue = queue();
        for title in ["A", "B", "C"] {
            queue.enqueue(NotificationInput::info(title));
        }

        queue.advance(WINDOW * 2);
        assert_eq!(queue.current().map(Notification::title), Some("C"));
        queue.advance(WINDOW);
        assert!(queue.is_empty());
    }

    #[test]
    fn manual_dismiss_cancels_timer() {
        let mut queue = queue();
        let a = queue.enqueue(NotificationInput::info("A"));
        queue.dismiss(a);

        assert_eq!(queue.timer_mut().pending_count(), 0);
        assert!(queue.timer_mut().advance(WINDOW).is_empty());
    }

    #[test]
    fn stale_expiry_after_manual_dismiss_is_ignored() {
        let mut queue = queue();
        let a = queue.enqueue(NotificationInput::info("A"));
        let b = queue.enqueue(NotificationInput::info("B"));
        queue.dismiss(a);

        assert!(!queue.expire(a));
        assert_eq!(current_id(&queue), Some(b));
    }

    #[test]
    fn backlogged_toast_cannot_expire() {
        let mut queue = queue();
        let a = queue.enqueue(NotificationInput::info("A"));
        let b = queue.enqueue(NotificationInput::info("B"));

        assert!(!queue.expire(b));
        assert_eq!(current_id(&queue), Some(a));
        assert_eq!(queue.backlog_len(), 1);
    }

    #[test]
    fn handle_message_routes_dismiss_and_expiry() {
        let mut queue = queue();
        let a = queue.enqueue(NotificationInput::info("A"));
        let b = queue.enqueue(NotificationInput::info("B"));

        queue.handle_message(&Message::Dismiss(a));
        assert_eq!(current_id(&queue), Some(b));
        queue.handle_message(&Message::Expired(b));
        assert!(queue.is_empty());
    }

    #[test]
    fn subscribers_see_every_change_of_visible_toast() {
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
        let mut queue = queue();
        let log = Rc::clone(&seen);
        queue.subscribe(Box::new(move |current| {
            log.borrow_mut().push(current.map(|n| n.title().to_string()));
        }));

        let a = queue.enqueue(NotificationInput::info("A"));
        queue.enqueue(NotificationInput::info("B"));
        queue.dismiss(a);
        queue.advance(WINDOW);

        assert_eq!(
            *seen.borrow(),
            vec![Some("A".to_string()), Some("B".to_string()), None]
        );
    }

    #[test]
    fn unsubscribed_callback_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut queue = queue();
        let counter = Rc::clone(&calls);
        let id = queue.subscribe(Box::new(move |_| *counter.borrow_mut() += 1));

        queue.enqueue(NotificationInput::info("A"));
        assert!(queue.unsubscribe(id));
        queue.advance(WINDOW);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(queue.subscriber_count(), 0);
    }

    #[test]
    fn clear_drops_everything_and_notifies_once() {
        let calls = Rc::new(RefCell::new(0));
        let mut queue = queue();
        for title in ["A", "B"] {
            queue.enqueue(NotificationInput::info(title));
        }
        let counter = Rc::clone(&calls);
        queue.subscribe(Box::new(move |_| *counter.borrow_mut() += 1));

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.backlog_len(), 0);
        assert_eq!(queue.timer_mut().pending_count(), 0);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn set_duration_applies_to_next_toast() {
        let mut queue = queue();
        queue.set_duration(ToastDuration::from_millis(2_000));
        queue.enqueue(NotificationInput::info("A"));

        queue.advance(Duration::from_millis(2_000));
        assert!(queue.is_empty());
    }

    #[test]
    fn lifecycle_is_reported_to_diagnostics() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let mut queue = queue();
        queue.set_diagnostics(collector.handle());

        let a = queue.enqueue(NotificationInput::info("A"));
        let b = queue.enqueue(NotificationInput::info("B"));
        queue.dismiss(a);
        queue.advance(WINDOW);
        collector.process_pending();

        let events: Vec<_> = collector.events().cloned().collect();
        assert_eq!(
            events,
            vec![
                DiagnosticEventKind::ToastEnqueued {
                    id: a,
                    kind: crate::notifications::Kind::Info,
                    backlogged: false
                },
                DiagnosticEventKind::ToastShown { id: a },
                DiagnosticEventKind::ToastEnqueued {
                    id: b,
                    kind: crate::notifications::Kind::Info,
                    backlogged: true
                },
                DiagnosticEventKind::ToastDismissed {
                    id: a,
                    reason: DismissReason::Manual
                },
                DiagnosticEventKind::ToastShown { id: b },
                DiagnosticEventKind::ToastDismissed {
                    id: b,
                    reason: DismissReason::Expired
                },
            ]
        );
    }

    #[test]
    fn long_session_keeps_newest_diagnostics() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(1000));
        let mut queue = queue();
        queue.set_diagnostics(collector.handle());

        let mut last = None;
        for i in 0..200 {
            let id = queue.enqueue(NotificationInput::info(format!("toast {i}")));
            queue.dismiss(id);
            last = Some(id);
        }
        collector.process_pending();

        assert_eq!(collector.len(), 600);
        let last = last.expect("at least one toast");
        assert_eq!(
            collector.events().last(),
            Some(&DiagnosticEventKind::ToastDismissed {
                id: last,
                reason: DismissReason::Manual
            })
        );
    }

    /// Lets a test inspect the timer after the queue is gone.
    struct SharedTimer(Rc<RefCell<ManualTimer>>);

    impl Timer for SharedTimer {
        fn schedule(&mut self, id: NotificationId, delay: Duration) -> TimerHandle {
            self.0.borrow_mut().schedule(id, delay)
        }

        fn cancel(&mut self, handle: TimerHandle) {
            self.0.borrow_mut().cancel(handle);
        }
    }

    #[test]
    fn dropping_queue_cancels_pending_timer() {
        let timer = Rc::new(RefCell::new(ManualTimer::new()));
        let mut queue = ToastQueue::new(SharedTimer(Rc::clone(&timer)), ToastDuration::default());
        queue.enqueue(NotificationInput::info("A"));
        queue.enqueue(NotificationInput::info("B"));
        assert_eq!(timer.borrow().pending_count(), 1);

        drop(queue);
        assert_eq!(timer.borrow().pending_count(), 0);
        assert!(timer.borrow_mut().advance(WINDOW * 2).is_empty());
    }

    #[test]
    fn clear_cancels_shared_timer() {
        let timer = Rc::new(RefCell::new(ManualTimer::new()));
        let mut queue = ToastQueue::new(SharedTimer(Rc::clone(&timer)), ToastDuration::default());
        queue.enqueue(NotificationInput::info("A"));

        queue.clear();
        assert_eq!(timer.borrow().pending_count(), 0);
    }
}
