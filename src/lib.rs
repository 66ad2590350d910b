// SPDX-License-Identifier: MPL-2.0
//! `docliq_toasts` drives the in-app toasts of the DocliQ appointment app.
//!
//! It provides a single-slot [`ToastQueue`](notifications::ToastQueue) with
//! auto-dismiss, and a [`StatusChangeWatcher`](appointments::StatusChangeWatcher)
//! that turns appointment status changes into localized toasts.

pub mod appointments;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod scenario;
