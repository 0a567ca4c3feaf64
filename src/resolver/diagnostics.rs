use crate::types::{Diagnostic, DiagnosticKind};
use metrics::counter;
use tracing::warn;

/// Append-only sink for non-fatal problems found during a pass.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        warn!(kind = kind.as_str(), "{}", message);
        counter!("roster_diagnostics_total", "kind" => kind.as_str()).increment(1);
        self.entries.push(Diagnostic { kind, message });
    }

    pub fn collaborator_failure(&mut self, message: impl Into<String>) {
        self.record(DiagnosticKind::CollaboratorFailure, message);
    }

    pub fn resolution_miss(&mut self, message: impl Into<String>) {
        self.record(DiagnosticKind::ResolutionMiss, message);
    }

    pub fn malformed_row(&mut self, message: impl Into<String>) {
        self.record(DiagnosticKind::MalformedRow, message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
