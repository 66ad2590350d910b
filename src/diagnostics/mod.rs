// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting toast activity reports.
//!
//! The toast queue and the status watcher report lifecycle events through a
//! [`DiagnosticsHandle`]; the [`DiagnosticsCollector`] stores them in a
//! memory-bounded [`CircularBuffer`] and exports them as JSON.
//!
//! # Privacy
//!
//! Events never carry toast titles or appointment ids, so reports can be
//! shared without exposing patient data.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
