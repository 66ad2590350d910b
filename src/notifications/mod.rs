// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts surface transient events (an appointment was confirmed, settings
//! were saved) without blocking interaction. Exactly one toast is visible at
//! a time; the rest wait their turn.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its payload and `Kind`
//! - [`queue`] - `ToastQueue` for queuing and lifecycle management
//! - [`timer`] - auto-dismiss timers (`ManualTimer`, `TokioTimer`)
//! - [`subscription`] - push-on-change observers of the visible toast
//!
//! # Usage
//!
//! ```
//! use docliq_toasts::domain::toast::ToastDuration;
//! use docliq_toasts::notifications::{NotificationInput, ToastQueue};
//! use std::time::Duration;
//!
//! let mut queue = ToastQueue::manual(ToastDuration::default());
//! let saved = queue.enqueue(NotificationInput::success("Settings saved"));
//! let deleted = queue.enqueue(NotificationInput::info("Account deleted"));
//!
//! assert_eq!(queue.current().map(|n| n.id()), Some(saved));
//! queue.dismiss(saved);
//! assert_eq!(queue.current().map(|n| n.id()), Some(deleted));
//!
//! queue.advance(Duration::from_secs(5));
//! assert!(queue.current().is_none());
//! ```

pub mod notification;
pub mod queue;
pub mod subscription;
pub mod timer;

pub use notification::{Action, Kind, Notification, NotificationId, NotificationInput};
pub use queue::{Message, NotificationSink, ToastQueue};
pub use subscription::{Subscriber, SubscriptionId};
pub use timer::{ManualTimer, Timer, TimerHandle, TokioTimer};
