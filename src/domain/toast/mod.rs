// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! - [`ToastDuration`]: Auto-dismiss window of a visible toast

mod newtypes;

pub use newtypes::{toast_duration_bounds, ToastDuration};
