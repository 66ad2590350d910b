// SPDX-License-Identifier: MPL-2.0
//! Appointment status tracking.
//!
//! - [`rules`] - which status transitions produce a toast
//! - [`watcher`] - `StatusChangeWatcher`, which diffs appointment snapshots

pub mod rules;
pub mod watcher;

pub use rules::{rule_for, Rule, RuleAction};
pub use watcher::StatusChangeWatcher;
