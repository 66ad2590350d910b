// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for toast and status-watch activity.

use std::time::Instant;

use serde::Serialize;

use crate::notifications::{Kind, NotificationId};

/// Why a toast left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// Closed by the user or by navigation.
    Manual,
    /// Its auto-dismiss window elapsed.
    Expired,
    /// Removed from the backlog before it was ever shown.
    Withdrawn,
    /// Dropped by a full queue reset.
    Cleared,
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event was captured (monotonic).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
///
/// Titles and appointment ids are deliberately absent: reports must not
/// carry patient data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A producer handed a toast to the queue.
    ToastEnqueued {
        id: NotificationId,
        kind: Kind,
        /// `true` when another toast was visible and this one had to wait.
        backlogged: bool,
    },

    /// A toast became the visible one.
    ToastShown { id: NotificationId },

    /// A toast left the queue.
    ToastDismissed {
        id: NotificationId,
        reason: DismissReason,
    },

    /// The watcher saw an appointment change status.
    StatusTransition {
        from: String,
        to: String,
        /// Whether a rule matched and a toast was enqueued.
        notified: bool,
    },

    /// Non-critical anomaly.
    Warning { message: String },
}
