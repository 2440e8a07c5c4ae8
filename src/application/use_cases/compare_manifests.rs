use crate::application::dto::{CompareRequest, CompareResponse, ComparisonMetadata};
use crate::comparison::domain::{DependencyComparison, DependencyIndex, GroupTable, Manifest};
use crate::comparison::services::{ChangeClassifier, DependencyFilter};
use crate::ports::outbound::{ManifestReader, ProgressReporter, RangeParser};
use crate::shared::Result;
use std::path::Path;

/// CompareManifestsUseCase - Core use case for comparing two manifests
///
/// Orchestrates the comparison workflow using generic dependency injection
/// for all infrastructure dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `RP` - RangeParser implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareManifestsUseCase<MR, RP, PR> {
    manifest_reader: MR,
    range_parser: RP,
    progress_reporter: PR,
}

impl<MR, RP, PR> CompareManifestsUseCase<MR, RP, PR>
where
    MR: ManifestReader,
    RP: RangeParser,
    PR: ProgressReporter,
{
    /// Creates a new CompareManifestsUseCase with injected dependencies
    pub fn new(manifest_reader: MR, range_parser: RP, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            range_parser,
            progress_reporter,
        }
    }

    /// Executes the comparison
    ///
    /// # Errors
    /// Returns an error if a manifest cannot be read, an exclude pattern is
    /// invalid, or a kept dependency declares a malformed range
    pub fn execute(&self, request: CompareRequest) -> Result<CompareResponse> {
        // Step 1: Validate exclusion patterns before touching any file
        let filter = DependencyFilter::new(request.exclude_patterns.clone())?;

        // Step 2: Load and index both manifests
        let old = self.load_and_index(&request.old_path, "old", &request.groups)?;
        let new = self.load_and_index(&request.new_path, "new", &request.groups)?;

        // Step 3: Classify
        self.progress_reporter.report("🔍 Classifying dependency changes...");
        let comparison =
            ChangeClassifier::classify(&old, &new, &request.groups, &self.range_parser)?;

        // Step 4: Apply exclusion filters
        let (comparison, unmatched_patterns) = self.apply_exclusion_filter(comparison, &filter);

        self.report_summary(&comparison);

        let metadata = ComparisonMetadata::now(
            request.old_path.display().to_string(),
            request.new_path.display().to_string(),
        );
        Ok(CompareResponse::new(comparison, metadata, unmatched_patterns))
    }

    fn load_and_index(
        &self,
        path: &Path,
        label: &str,
        groups: &GroupTable,
    ) -> Result<DependencyIndex> {
        self.progress_reporter.report(&format!(
            "📖 Loading {} manifest from: {}",
            label,
            path.display()
        ));

        let manifest: Manifest = self.manifest_reader.read_manifest(path)?;
        let index = DependencyIndex::build(&manifest, groups);

        self.progress_reporter.report(&format!(
            "✅ Detected {} dependency declaration(s) in {} manifest",
            index.entry_count(),
            label
        ));

        Ok(index)
    }

    fn apply_exclusion_filter(
        &self,
        comparison: DependencyComparison,
        filter: &DependencyFilter,
    ) -> (DependencyComparison, Vec<String>) {
        if filter.is_empty() {
            return (comparison, Vec::new());
        }

        let original_count = comparison.total_changes();
        let filtered = filter.apply(comparison);

        let excluded_count = original_count - filtered.total_changes();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} change(s) based on filters",
                excluded_count
            ));
        }

        let unmatched_patterns = filter.unmatched_patterns();
        for pattern in &unmatched_patterns {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any changed dependency.",
                pattern
            ));
        }

        (filtered, unmatched_patterns)
    }

    fn report_summary(&self, comparison: &DependencyComparison) {
        if comparison.is_empty() {
            self.progress_reporter
                .report_completion("✅ No dependency changes detected.");
            return;
        }

        let changed_groups = comparison
            .iter()
            .filter(|group| !group.changes.is_empty())
            .count();
        self.progress_reporter.report_completion(&format!(
            "✅ Found {} change(s) in {} group(s)",
            comparison.total_changes(),
            changed_groups
        ));
    }
}
