// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! Producers build a [`NotificationInput`]; the queue stamps it with a
//! [`NotificationId`] and stores it as a [`Notification`].

use crate::domain::appointment::AppointmentId;
use serde::Serialize;
use std::fmt;

/// Unique identifier for a notification.
///
/// Ids are handed out by a [`ToastQueue`](super::ToastQueue) in increasing
/// order and are never reused during the queue's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wraps a raw counter value.
    ///
    /// The queue allocates ids itself; this is for custom
    /// [`NotificationSink`](super::NotificationSink) implementations such as
    /// recorders in host tests.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual treatment of a toast. Has no effect on queueing or timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Positive outcome (green).
    #[default]
    Success,
    /// Neutral information (blue).
    Info,
    /// Something the patient should look at (orange).
    Warning,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Success, Kind::Info, Kind::Warning];

    /// Returns the i18n key of the kind's label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Kind::Success => "toast-kind-success",
            Kind::Info => "toast-kind-info",
            Kind::Warning => "toast-kind-warning",
        }
    }

    /// Returns the lowercase name used in scenario files and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Info => "info",
            Kind::Warning => "warning",
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown toast kind: {s}"))
    }
}

/// Optional call-to-action shown inside a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Localized button label.
    pub label: String,
    /// Route the UI navigates to when the action is taken.
    pub target: String,
}

/// A toast as requested by a producer, before the queue assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationInput {
    pub title: String,
    pub kind: Kind,
    pub subject_id: Option<AppointmentId>,
    pub action: Option<Action>,
}

impl NotificationInput {
    /// Creates a toast with an already localized title.
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            subject_id: None,
            action: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title)
    }

    /// Links the toast to an appointment so the UI can deep-link to it.
    #[must_use]
    pub fn with_subject(mut self, subject_id: AppointmentId) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    /// Attaches a call-to-action.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.action = Some(Action {
            label: label.into(),
            target: target.into(),
        });
        self
    }
}

/// A toast owned by the queue, either visible or waiting in the backlog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    input: NotificationInput,
}

impl Notification {
    pub(crate) fn new(id: NotificationId, input: NotificationInput) -> Self {
        Self { id, input }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.input.title
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.input.kind
    }

    #[must_use]
    pub fn subject_id(&self) -> Option<&AppointmentId> {
        self.input.subject_id.as_ref()
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.input.action.as_ref()
    }
}
