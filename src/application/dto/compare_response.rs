use super::ComparisonMetadata;
use crate::comparison::domain::DependencyComparison;

/// CompareResponse - Response DTO from the manifest comparison use case
///
/// Formatters render this into the requested output format.
#[derive(Debug, Clone)]
pub struct CompareResponse {
    /// Per-group change reports after exclusion filtering
    pub comparison: DependencyComparison,
    pub metadata: ComparisonMetadata,
    /// Exclude patterns that matched no changed dependency
    pub unmatched_patterns: Vec<String>,
}

impl CompareResponse {
    pub fn new(
        comparison: DependencyComparison,
        metadata: ComparisonMetadata,
        unmatched_patterns: Vec<String>,
    ) -> Self {
        Self {
            comparison,
            metadata,
            unmatched_patterns,
        }
    }

    /// Whether any group reports at least one change
    pub fn has_changes(&self) -> bool {
        !self.comparison.is_empty()
    }
}
