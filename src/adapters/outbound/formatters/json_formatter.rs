use crate::application::dto::{CompareResponse, ComparisonMetadata};
use crate::comparison::domain::{ChangeReport, DependencyComparison};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: &'a ComparisonMetadata,
    summary: Summary,
    groups: &'a DependencyComparison,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    total_changes: usize,
    added: usize,
    removed: usize,
    moved: usize,
    upgraded: usize,
    downgraded: usize,
    locked: usize,
    unlocked: usize,
}

impl Summary {
    fn of(comparison: &DependencyComparison) -> Self {
        comparison
            .iter()
            .fold(Summary::default(), |summary, report| summary.add(&report.changes))
    }

    fn add(self, changes: &ChangeReport) -> Self {
        Self {
            total_changes: self.total_changes + changes.change_count(),
            added: self.added + changes.added.len(),
            removed: self.removed + changes.removed.len(),
            moved: self.moved + changes.moved.len(),
            upgraded: self.upgraded + changes.upgraded.len(),
            downgraded: self.downgraded + changes.downgraded.len(),
            locked: self.locked + changes.locked.len(),
            unlocked: self.unlocked + changes.unlocked.len(),
        }
    }
}

/// JsonFormatter adapter for machine-readable output
///
/// Produces `{ "metadata": ..., "summary": ..., "groups": { groupId: report } }`
/// with groups in definition order.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &CompareResponse) -> Result<String> {
        let report = Report {
            metadata: &response.metadata,
            summary: Summary::of(&response.comparison),
            groups: &response.comparison,
        };

        let mut json = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize comparison to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
