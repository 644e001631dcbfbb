//! Append-only session history of saved reports.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::document::ReportDocument;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub saved_at: DateTime<Utc>,
    pub document: ReportDocument,
}

/// Reports saved during one session, in save order.
///
/// The session owns the store: it is created when the session starts
/// and cleared when it ends. Entries are never edited or removed
/// individually.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report saved at `saved_at`.
    pub fn save(&mut self, document: ReportDocument, saved_at: DateTime<Utc>) -> &HistoryEntry {
        debug!(
            panel = %document.panel,
            saved_at = %saved_at,
            position = self.entries.len(),
            "saved report to session history"
        );
        self.entries.push(HistoryEntry { saved_at, document });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// First entry saved at exactly `saved_at`.
    pub fn get(&self, saved_at: DateTime<Utc>) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.saved_at == saved_at)
    }

    /// Entries for the patient with document number `dni`.
    pub fn for_patient<'a>(&'a self, dni: &'a str) -> impl Iterator<Item = &'a HistoryEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.document.patient.dni == dni)
    }

    /// Drop every entry. Called when the session ends.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
