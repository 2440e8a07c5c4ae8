use crate::comparison::domain::{RangeParseError, VersionRange};

/// RangeParser port: the range-comparison capability consumed by the classifier
///
/// Implementations decide the versioning scheme (semver, PEP 440, ...).
/// The classifier only relies on the [`VersionRange`] operations of the
/// parsed value.
pub trait RangeParser {
    type Range: VersionRange;

    /// Parses a declared range string
    ///
    /// # Errors
    /// Returns a `RangeParseError` naming the offending string when it is not
    /// a range this scheme understands
    fn parse_range(&self, raw: &str) -> Result<Self::Range, RangeParseError>;
}
