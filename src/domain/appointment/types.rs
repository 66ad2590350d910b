// SPDX-License-Identifier: MPL-2.0
//! Appointment identity and lifecycle status.

use std::fmt;
use std::str::FromStr;

/// Identifier of an appointment owned by the host application.
///
/// The toast subsystem never dereferences it; it is only compared, hashed
/// and carried as a deep-link payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppointmentId(String);

impl AppointmentId {
    /// Wraps a host-provided identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppointmentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AppointmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Lifecycle status of an appointment as reported by the booking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    /// The request is waiting for a matching practice slot.
    Matching,
    /// A practice accepted the request.
    Confirmed,
    /// The patient withdrew the request or appointment.
    CancelledByPatient,
    /// The practice cancelled the appointment.
    CancelledByProvider,
    /// The practice changed time, place or doctor.
    ModifiedByProvider,
    /// The appointment took place.
    Completed,
}

impl AppointmentStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Matching,
        AppointmentStatus::Confirmed,
        AppointmentStatus::CancelledByPatient,
        AppointmentStatus::CancelledByProvider,
        AppointmentStatus::ModifiedByProvider,
        AppointmentStatus::Completed,
    ];

    /// Returns the wire name used by the booking state (`snake_case`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Matching => "matching",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::CancelledByPatient => "cancelled_by_patient",
            AppointmentStatus::CancelledByProvider => "cancelled_by_provider",
            AppointmentStatus::ModifiedByProvider => "modified_by_provider",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status name is not part of the closed status set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown appointment status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for AppointmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One entry of the collection handed to the status watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedAppointment {
    pub id: AppointmentId,
    pub status: AppointmentStatus,
}

impl ObservedAppointment {
    pub fn new(id: impl Into<AppointmentId>, status: AppointmentStatus) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }
}
