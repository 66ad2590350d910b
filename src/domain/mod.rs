// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`appointment`]: Watched entities ([`AppointmentId`](appointment::AppointmentId),
//!   [`AppointmentStatus`](appointment::AppointmentStatus),
//!   [`ObservedAppointment`](appointment::ObservedAppointment))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`toast`]: Toast value objects ([`ToastDuration`](toast::ToastDuration))

pub mod appointment;
pub mod diagnostics;
pub mod toast;
