// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation and JSON export.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{DiagnosticEventKind, DismissReason};

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Crate version that generated the report.
    pub version: String,
    /// When diagnostic collection started.
    pub collection_started_at: DateTime<Utc>,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at,
            collection_duration_ms,
            event_count,
        }
    }
}

/// Aggregated counts over the buffered events.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub enqueued: usize,
    pub backlogged: usize,
    pub shown: usize,
    pub dismissed_manually: usize,
    pub expired: usize,
    pub withdrawn: usize,
    pub cleared: usize,
    pub status_transitions: usize,
    pub transitions_notified: usize,
    pub warnings: usize,
}

impl ReportSummary {
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a DiagnosticEventKind>) -> Self {
        let mut summary = Self::default();
        for kind in events {
            match kind {
                DiagnosticEventKind::ToastEnqueued { backlogged, .. } => {
                    summary.enqueued += 1;
                    if *backlogged {
                        summary.backlogged += 1;
                    }
                }
                DiagnosticEventKind::ToastShown { .. } => summary.shown += 1,
                DiagnosticEventKind::ToastDismissed { reason, .. } => match reason {
                    DismissReason::Manual => summary.dismissed_manually += 1,
                    DismissReason::Expired => summary.expired += 1,
                    DismissReason::Withdrawn => summary.withdrawn += 1,
                    DismissReason::Cleared => summary.cleared += 1,
                },
                DiagnosticEventKind::StatusTransition { notified, .. } => {
                    summary.status_transitions += 1;
                    if *notified {
                        summary.transitions_notified += 1;
                    }
                }
                DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
            }
        }
        summary
    }
}

/// An event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[allow(clippy::cast_possible_truncation)] // Session offsets in ms fit in u64
    #[must_use]
    pub fn new(timestamp: Instant, started_at: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            offset_ms: timestamp.saturating_duration_since(started_at).as_millis() as u64,
            kind,
        }
    }
}

/// Complete exported report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(events.iter().map(|e| &e.kind));
        Self {
            metadata,
            summary,
            events,
        }
    }
}
