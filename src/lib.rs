//! dependency-diff - classify dependency changes between two package manifests
//!
//! Given an old and a new manifest (the JSON object of a `package.json`),
//! each dependency group (production, development, peer, optional, bundled)
//! gets a report with seven buckets: added, removed, moved, upgraded,
//! downgraded, locked and unlocked.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Comparison core** (`comparison`): dependency indexes and the change classifier
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let old = json!({ "dependencies": { "lodash": "4.17.15", "eslint": "6.1.0", "zahl": "2.0.1" } });
//! let new = json!({ "dependencies": { "lodash": "4.17.15", "eslint": "6.3.0", "jaid-core": "4.5.2" } });
//!
//! let comparison = dependency_diff::compare_dependencies(&old, &new).unwrap();
//! let production = comparison.get("production").unwrap();
//!
//! assert_eq!(production.added, vec!["jaid-core"]);
//! assert_eq!(production.removed, vec!["zahl"]);
//! assert_eq!(production.upgraded[0].name, "eslint");
//! ```

pub mod adapters;
pub mod application;
pub mod comparison;
pub mod ports;
pub mod shared;

use adapters::outbound::semver_range::SemverRangeParser;
use comparison::domain::{DependencyComparison, DependencyIndex, GroupTable};
use comparison::services::ChangeClassifier;
use ports::outbound::RangeParser;
use serde_json::Value;
use shared::error::DiffError;

/// Compares two manifests with the standard group table and semver ranges
///
/// # Errors
/// Returns `DiffError::MalformedRange` when a dependency present in the same
/// group of both manifests declares a range that is not valid semver syntax
pub fn compare_dependencies(old: &Value, new: &Value) -> Result<DependencyComparison, DiffError> {
    compare_dependencies_with(old, new, &GroupTable::standard(), &SemverRangeParser::new())
}

/// Compares two manifests with a custom group table and range scheme
///
/// # Errors
/// Returns `DiffError::MalformedRange` when `parser` rejects a range that
/// needs to be compared
pub fn compare_dependencies_with<P: RangeParser>(
    old: &Value,
    new: &Value,
    groups: &GroupTable,
    parser: &P,
) -> Result<DependencyComparison, DiffError> {
    let old_index = DependencyIndex::from_value(old, groups);
    let new_index = DependencyIndex::from_value(new, groups);
    ChangeClassifier::classify(&old_index, &new_index, groups, parser)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::semver_range::{SemverRange, SemverRangeParser};
    pub use crate::application::dto::{
        CompareRequest, CompareResponse, ComparisonMetadata, OutputFormat,
    };
    pub use crate::application::use_cases::CompareManifestsUseCase;
    pub use crate::comparison::domain::{
        ChangeReport, DependencyComparison, DependencyIndex, GroupDefinition, GroupReport,
        GroupTable, Manifest, MovedDependency, RangeChange, RangeParseError, VersionRange,
    };
    pub use crate::comparison::services::{ChangeClassifier, DependencyFilter, RangeChangeKind};
    pub use crate::ports::outbound::{
        ManifestReader, OutputPresenter, ProgressReporter, RangeParser, ReportFormatter,
    };
    pub use crate::shared::error::{DiffError, ExitCode};
    pub use crate::shared::Result;
    pub use crate::{compare_dependencies, compare_dependencies_with};
}
