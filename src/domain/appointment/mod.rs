// SPDX-License-Identifier: MPL-2.0
//! Appointment domain types.
//!
//! Only the identity and status of an appointment matter to the toast
//! subsystem; everything else about a booking lives in the host application.

mod types;

pub use types::{AppointmentId, AppointmentStatus, ObservedAppointment, UnknownStatus};
