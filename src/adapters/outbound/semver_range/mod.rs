/// Semantic-version range adapter for the RangeParser port
mod semver_range_parser;

pub use semver_range_parser::{SemverRange, SemverRangeParser};
