pub mod change_classifier;
pub mod dependency_filter;

pub use change_classifier::{ChangeClassifier, RangeChangeKind};
pub use dependency_filter::DependencyFilter;
