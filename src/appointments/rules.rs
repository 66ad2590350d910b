// SPDX-License-Identifier: MPL-2.0
//! Which appointment status changes deserve a toast.
//!
//! Explicit `(previous, new)` pairs are matched first, then rules keyed only
//! on the new status.

use crate::domain::appointment::{AppointmentId, AppointmentStatus};
use crate::notifications::Kind;

/// Outcome of a matched transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// i18n key of the toast title.
    pub title_key: &'static str,
    pub kind: Kind,
    pub action: Option<RuleAction>,
}

/// Call-to-action attached by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleAction {
    /// i18n key of the button label.
    pub label_key: &'static str,
    /// Route prefix; the appointment id is appended.
    pub target_prefix: &'static str,
}

impl RuleAction {
    /// Route of the appointment detail screen for `id`.
    #[must_use]
    pub fn target_for(&self, id: &AppointmentId) -> String {
        format!("{}{}", self.target_prefix, id)
    }
}

const VIEW_DETAILS: RuleAction = RuleAction {
    label_key: "toast-action-view-details",
    target_prefix: "/appointments/",
};

const fn rule(title_key: &'static str, kind: Kind) -> Rule {
    Rule {
        title_key,
        kind,
        action: None,
    }
}

/// Looks up the toast for a status change.
///
/// Callers only consult the table when the status actually changed.
#[must_use]
pub fn rule_for(previous: AppointmentStatus, new: AppointmentStatus) -> Option<Rule> {
    use crate::domain::appointment::AppointmentStatus::{
        CancelledByPatient, CancelledByProvider, Completed, Confirmed, Matching,
        ModifiedByProvider,
    };

    match (previous, new) {
        (Matching, Confirmed) => Some(rule("toast-appointment-confirmed", Kind::Success)),
        (Matching, CancelledByPatient) => Some(rule("toast-no-match-found", Kind::Warning)),
        (Confirmed, CancelledByPatient) => Some(rule("toast-appointment-cancelled", Kind::Info)),
        (Confirmed, CancelledByProvider) => Some(rule(
            "toast-appointment-cancelled-by-provider",
            Kind::Warning,
        )),
        (_, ModifiedByProvider) => Some(Rule {
            action: Some(VIEW_DETAILS),
            ..rule("toast-appointment-modified", Kind::Warning)
        }),
        (_, Completed) => Some(rule("toast-appointment-completed", Kind::Success)),
        _ => None,
    }
}
