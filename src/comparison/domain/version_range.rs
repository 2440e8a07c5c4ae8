use thiserror::Error;

/// A parsed version range, as seen by the change classifier.
///
/// The classifier never looks inside a range. It only needs to know whether
/// two ranges are equivalent, whether a range pins a single version, and
/// whether one range sits strictly above another. The versioning scheme
/// behind these answers belongs to the implementation.
pub trait VersionRange {
    /// Whether both ranges admit the same versions
    fn range_eq(&self, other: &Self) -> bool;

    /// Whether the range matches exactly one version
    fn is_exact(&self) -> bool;

    /// Whether this range's effective floor is strictly above `other`'s
    fn greater_than(&self, other: &Self) -> bool;
}

/// A range string the range parser could not understand
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version range \"{range}\": {details}")]
pub struct RangeParseError {
    pub range: String,
    pub details: String,
}

impl RangeParseError {
    pub fn new(range: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            range: range.into(),
            details: details.into(),
        }
    }
}
