// SPDX-License-Identifier: MPL-2.0
//! Turns appointment status changes into toasts.
//!
//! The host hands the watcher its complete appointment collection after
//! every change. The watcher remembers the last status it saw per
//! appointment and enqueues a toast when a change matches a rule.
//!
//! An appointment seen for the first time is only recorded, so the initial
//! load (or a reload after restart) does not flood the user with toasts for
//! pre-existing state.

use super::rules::rule_for;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::domain::appointment::{AppointmentId, AppointmentStatus, ObservedAppointment};
use crate::i18n::{Localize, RawKeys};
use crate::notifications::{NotificationId, NotificationInput, NotificationSink};
use std::collections::{HashMap, HashSet};

/// Diffs successive appointment collections against the last seen status.
#[derive(Debug)]
pub struct StatusChangeWatcher<L: Localize = RawKeys> {
    last_seen: HashMap<AppointmentId, AppointmentStatus>,
    localizer: L,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for StatusChangeWatcher<RawKeys> {
    fn default() -> Self {
        Self::new(RawKeys)
    }
}

impl<L: Localize> StatusChangeWatcher<L> {
    /// Creates a watcher that localizes toast titles with `localizer`.
    pub fn new(localizer: L) -> Self {
        Self {
            last_seen: HashMap::new(),
            localizer,
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Compares `appointments` with the previous observation and enqueues a
    /// toast for every recognised status change, in input order.
    ///
    /// Appointments missing from `appointments` are forgotten silently; if
    /// they come back they are treated as new. An id listed more than once
    /// counts only with its last entry. Returns the ids of the enqueued
    /// toasts.
    pub fn observe<S>(
        &mut self,
        appointments: &[ObservedAppointment],
        sink: &mut S,
    ) -> Vec<NotificationId>
    where
        S: NotificationSink + ?Sized,
    {
        let mut enqueued = Vec::new();
        let last_entry: HashMap<&AppointmentId, usize> = appointments
            .iter()
            .enumerate()
            .map(|(index, appointment)| (&appointment.id, index))
            .collect();

        for (index, appointment) in appointments.iter().enumerate() {
            if last_entry.get(&appointment.id) != Some(&index) {
                self.warn("duplicate appointment in one observation; keeping the last entry");
                continue;
            }
            let Some(previous) = self
                .last_seen
                .insert(appointment.id.clone(), appointment.status)
            else {
                log::debug!("watching appointment {}", appointment.id);
                continue;
            };
            if previous == appointment.status {
                continue;
            }

            let input = self.toast_for(&appointment.id, previous, appointment.status);
            self.record(DiagnosticEventKind::StatusTransition {
                from: previous.to_string(),
                to: appointment.status.to_string(),
                notified: input.is_some(),
            });
            if let Some(input) = input {
                enqueued.push(sink.enqueue(input));
            }
        }

        self.prune(appointments);
        enqueued
    }

    /// Last status observed for `id`, if it is being watched.
    #[must_use]
    pub fn last_status(&self, id: &AppointmentId) -> Option<AppointmentStatus> {
        self.last_seen.get(id).copied()
    }

    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.last_seen.len()
    }

    /// Forgets every appointment; the next observation is a cold start.
    pub fn reset(&mut self) {
        self.last_seen.clear();
    }

    fn toast_for(
        &self,
        id: &AppointmentId,
        previous: AppointmentStatus,
        current: AppointmentStatus,
    ) -> Option<NotificationInput> {
        let rule = rule_for(previous, current)?;
        let mut input = NotificationInput::new(rule.kind, self.localizer.localize(rule.title_key))
            .with_subject(id.clone());
        if let Some(action) = rule.action {
            input = input.with_action(
                self.localizer.localize(action.label_key),
                action.target_for(id),
            );
        }
        Some(input)
    }

    fn prune(&mut self, appointments: &[ObservedAppointment]) {
        let present: HashSet<&AppointmentId> = appointments.iter().map(|a| &a.id).collect();
        self.last_seen.retain(|id, _| present.contains(id));
    }

    fn record(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }

    fn warn(&self, message: &str) {
        match &self.diagnostics {
            Some(handle) => handle.log_warning(message),
            None => log::warn!("{message}"),
        }
    }
}
