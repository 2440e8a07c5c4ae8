pub mod change_report;
pub mod dependency_index;
pub mod group;
pub mod manifest;
pub mod version_range;

pub use change_report::{
    ChangeReport, DependencyComparison, GroupReport, MovedDependency, RangeChange,
};
pub use dependency_index::{DependencyIndex, GroupDependencies};
pub use group::{GroupDefinition, GroupTable};
pub use manifest::Manifest;
pub use version_range::{RangeParseError, VersionRange};
