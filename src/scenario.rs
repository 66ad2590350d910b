// SPDX-License-Identifier: MPL-2.0
//! Replay scenarios for the `docliq-toasts` binary.
//!
//! A scenario is a TOML list of steps that stand in for the booking UI:
//! appointment refreshes, direct toasts, user dismissals and idle time.
//!
//! ```toml
//! [[steps]]
//! action = "observe"
//! appointments = [{ id = "apt-1", status = "matching" }]
//!
//! [[steps]]
//! action = "toast"
//! title_key = "toast-settings-saved"
//! kind = "success"
//!
//! [[steps]]
//! action = "wait"
//! ms = 6000
//! ```

use crate::domain::appointment::{AppointmentId, AppointmentStatus, ObservedAppointment};
use crate::error::{Error, Result};
use crate::notifications::Kind;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// One scripted host event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The booking state changed; the full appointment collection.
    Observe(Vec<ObservedAppointment>),
    /// A screen raised a toast directly.
    Toast {
        title_key: String,
        kind: Kind,
        subject_id: Option<AppointmentId>,
    },
    /// The user closed the visible toast.
    Dismiss,
    /// Nothing happens for a while; timers keep running.
    Wait(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scenario {
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Parses a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Scenario` for malformed TOML, unknown actions,
    /// statuses or kinds.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawScenario =
            toml::from_str(content).map_err(|e| Error::Scenario(e.to_string()))?;
        let steps = raw
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                Step::try_from(step)
                    .map_err(|msg| Error::Scenario(format!("step {}: {msg}", index + 1)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { steps })
    }

    /// Reads and parses a scenario file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, `Error::Scenario` if
    /// it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[derive(Debug, Deserialize)]
struct RawScenario {
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum RawStep {
    Observe {
        #[serde(default)]
        appointments: Vec<RawAppointment>,
    },
    Toast {
        title_key: String,
        #[serde(default = "default_kind")]
        kind: String,
        subject_id: Option<String>,
    },
    Dismiss,
    Wait {
        ms: u64,
    },
}

#[derive(Debug, Deserialize)]
struct RawAppointment {
    id: String,
    status: String,
}

fn default_kind() -> String {
    Kind::default().as_str().to_string()
}

impl TryFrom<RawStep> for Step {
    type Error = String;

    fn try_from(raw: RawStep) -> std::result::Result<Self, Self::Error> {
        Ok(match raw {
            RawStep::Observe { appointments } => Step::Observe(
                appointments
                    .into_iter()
                    .map(|a| -> std::result::Result<ObservedAppointment, String> {
                        let status = a
                            .status
                            .parse::<AppointmentStatus>()
                            .map_err(|e| e.to_string())?;
                        Ok(ObservedAppointment::new(a.id, status))
                    })
                    .collect::<std::result::Result<_, String>>()?,
            ),
            RawStep::Toast {
                title_key,
                kind,
                subject_id,
            } => Step::Toast {
                title_key,
                kind: kind.parse()?,
                subject_id: subject_id.map(AppointmentId::from),
            },
            RawStep::Dismiss => Step::Dismiss,
            RawStep::Wait { ms } => Step::Wait(Duration::from_millis(ms)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_type() {
        let scenario = Scenario::from_toml_str(
            r#"
            [[steps]]
            action = "observe"
            appointments = [
                { id = "apt-1", status = "matching" },
                { id = "apt-2", status = "cancelled_by_provider" },
            ]

            [[steps]]
            action = "toast"
            title_key = "toast-settings-saved"
            kind = "info"
            subject_id = "apt-1"

            [[steps]]
            action = "dismiss"

            [[steps]]
            action = "wait"
            ms = 250
            "#,
        )
        .expect("scenario should parse");

        assert_eq!(
            scenario.steps,
            vec![
                Step::Observe(vec![
                    ObservedAppointment::new("apt-1", AppointmentStatus::Matching),
                    ObservedAppointment::new("apt-2", AppointmentStatus::CancelledByProvider),
                ]),
                Step::Toast {
                    title_key: "toast-settings-saved".into(),
                    kind: Kind::Info,
                    subject_id: Some("apt-1".into()),
                },
                Step::Dismiss,
                Step::Wait(Duration::from_millis(250)),
            ]
        );
    }

    #[test]
    fn toast_kind_defaults_to_success() {
        let scenario = Scenario::from_toml_str(
            "[[steps]]\naction = \"toast\"\ntitle_key = \"toast-profile-updated\"\n",
        )
        .expect("scenario should parse");
        assert!(matches!(
            scenario.steps[0],
            Step::Toast {
                kind: Kind::Success,
                ..
            }
        ));
    }

    #[test]
    fn observe_without_appointments_is_empty_collection() {
        let scenario = Scenario::from_toml_str("[[steps]]\naction = \"observe\"\n")
            .expect("scenario should parse");
        assert_eq!(scenario.steps, vec![Step::Observe(Vec::new())]);
    }

    #[test]
    fn unknown_status_names_the_step() {
        let err = Scenario::from_toml_str(
            "[[steps]]\naction = \"wait\"\nms = 1\n\n[[steps]]\naction = \"observe\"\nappointments = [{ id = \"a\", status = \"lost\" }]\n",
        )
        .unwrap_err();
        match err {
            Error::Scenario(msg) => {
                assert!(msg.starts_with("step 2"));
                assert!(msg.contains("lost"));
            }
            other => panic!("expected Scenario error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result = Scenario::from_toml_str("[[steps]]\naction = \"teleport\"\n");
        assert!(matches!(result, Err(Error::Scenario(_))));
    }

    #[test]
    fn bundled_scenario_parses() {
        let scenario = Scenario::from_toml_str(include_str!("../scenarios/booking_day.toml"))
            .expect("bundled scenario should parse");
        assert!(!scenario.steps.is_empty());
    }
}
