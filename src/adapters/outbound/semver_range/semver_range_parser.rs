use crate::comparison::domain::{RangeParseError, VersionRange};
use crate::ports::outbound::RangeParser;
use semver::{BuildMetadata, Comparator, Op, Version, VersionReq};

/// Maximum length for a range string (security limit)
const MAX_RANGE_LENGTH: usize = 256;

/// Characters that make up a comparator operator
const OPERATOR_CHARS: &[char] = &['<', '>', '=', '^', '~'];

/// A parsed npm-style range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemverRange {
    /// A single pinned version: `1.2.3`, `=1.2.3`, `v1.2.3`
    Exact(Version),
    /// Alternatives joined by `||`; each one is a set of comparators that must all hold
    Range(Vec<VersionReq>),
}

impl SemverRange {
    /// The smallest version the range admits, used for ordering
    pub fn floor(&self) -> Version {
        match self {
            SemverRange::Exact(version) => without_build(version),
            SemverRange::Range(alternatives) => alternatives
                .iter()
                .map(requirement_floor)
                .min()
                .unwrap_or_else(|| Version::new(0, 0, 0)),
        }
    }
}

impl VersionRange for SemverRange {
    fn range_eq(&self, other: &Self) -> bool {
        match (self, other) {
            // build metadata does not take part in version identity
            (SemverRange::Exact(a), SemverRange::Exact(b)) => without_build(a) == without_build(b),
            (SemverRange::Range(a), SemverRange::Range(b)) => canonical(a) == canonical(b),
            _ => false,
        }
    }

    fn is_exact(&self) -> bool {
        matches!(self, SemverRange::Exact(_))
    }

    fn greater_than(&self, other: &Self) -> bool {
        self.floor() > other.floor()
    }
}

/// SemverRangeParser adapter implementing the RangeParser port
///
/// Understands the range syntax of npm manifests and maps it onto the
/// `semver` crate: `^`, `~`, comparison operators, `x`/`*` wildcards,
/// partial versions, hyphen ranges, whitespace-separated comparator sets and
/// `||` alternatives. Tags (`latest`), URLs, paths and git specs are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverRangeParser;

impl SemverRangeParser {
    pub fn new() -> Self {
        Self
    }
}

impl RangeParser for SemverRangeParser {
    type Range = SemverRange;

    fn parse_range(&self, raw: &str) -> Result<SemverRange, RangeParseError> {
        if raw.len() > MAX_RANGE_LENGTH {
            return Err(RangeParseError::new(
                raw,
                format!(
                    "range is too long ({} bytes). Maximum allowed: {} bytes",
                    raw.len(),
                    MAX_RANGE_LENGTH
                ),
            ));
        }

        let trimmed = raw.trim();
        if let Some(version) = parse_exact(trimmed) {
            return Ok(SemverRange::Exact(version));
        }

        let alternatives = trimmed
            .split("||")
            .map(|alternative| {
                let normalized = normalize_conjunction(alternative.trim())
                    .map_err(|details| RangeParseError::new(raw, details))?;
                VersionReq::parse(&normalized)
                    .map_err(|err| RangeParseError::new(raw, err.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SemverRange::Range(alternatives))
    }
}

fn parse_exact(range: &str) -> Option<Version> {
    let version = range.strip_prefix('=').unwrap_or(range).trim_start();
    Version::parse(strip_v(version)).ok()
}

/// Rewrites one `||` alternative into the comma-separated syntax of `VersionReq`
fn normalize_conjunction(alternative: &str) -> Result<String, String> {
    if let Some((low, high)) = alternative.split_once(" - ") {
        return Ok(match (hyphen_bound(low), hyphen_bound(high)) {
            (Some(low), Some(high)) => format!(">={}, <={}", low, high),
            (Some(low), None) => format!(">={}", low),
            (None, Some(high)) => format!("<={}", high),
            (None, None) => "*".to_string(),
        });
    }

    let mut comparators = Vec::new();
    let mut pending_operator: Option<&str> = None;

    let tokens = alternative
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty());

    for token in tokens {
        if token.chars().all(|c| OPERATOR_CHARS.contains(&c)) {
            if let Some(operator) = pending_operator {
                return Err(format!("operator '{}' is missing a version", operator));
            }
            // ">= 1.2.3": operator and version separated by whitespace
            pending_operator = Some(token);
            continue;
        }

        let comparator = match pending_operator.take() {
            Some(operator) => format!("{}{}", operator, wildcards(strip_v(token))),
            None => normalize_comparator(token),
        };
        comparators.push(comparator);
    }

    if let Some(operator) = pending_operator {
        return Err(format!("operator '{}' is missing a version", operator));
    }

    if comparators.is_empty() {
        return Ok("*".to_string());
    }
    Ok(comparators.join(", "))
}

fn normalize_comparator(token: &str) -> String {
    let split = token
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(token.len());
    let (operator, version) = token.split_at(split);
    let version = wildcards(strip_v(version));

    if !operator.is_empty() {
        return format!("{}{}", operator, version);
    }

    // bare versions: full ones pin, partial ones cover everything below them
    if Version::parse(&version).is_ok() {
        format!("={}", version)
    } else if version.contains('*') {
        version
    } else {
        format!("{}.*", version)
    }
}

/// One end of a hyphen range; trailing wildcards become a partial version,
/// a bare wildcard leaves that end open
fn hyphen_bound(bound: &str) -> Option<String> {
    let bound = wildcards(strip_v(bound.trim()));
    let parts: Vec<&str> = bound.split('.').take_while(|part| *part != "*").collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("."))
    }
}

fn strip_v(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

/// `1.x`, `1.X.*` -> `1.*`, `1.*.*`; pre-release and build parts are left alone
fn wildcards(version: &str) -> String {
    let core_end = version.find(&['-', '+'][..]).unwrap_or(version.len());
    let (core, suffix) = version.split_at(core_end);
    let core = core
        .split('.')
        .map(|part| match part {
            "x" | "X" => "*",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(".");
    format!("{}{}", core, suffix)
}

fn requirement_floor(requirement: &VersionReq) -> Version {
    requirement
        .comparators
        .iter()
        .filter_map(comparator_floor)
        .max()
        .unwrap_or_else(|| Version::new(0, 0, 0))
}

/// Lower bound of a single comparator; upper bounds have none
fn comparator_floor(comparator: &Comparator) -> Option<Version> {
    let major = comparator.major;
    let minor = comparator.minor.unwrap_or(0);
    let patch = comparator.patch.unwrap_or(0);

    match comparator.op {
        Op::Exact | Op::GreaterEq | Op::Tilde | Op::Caret | Op::Wildcard => Some(Version {
            major,
            minor,
            patch,
            pre: comparator.pre.clone(),
            build: BuildMetadata::EMPTY,
        }),
        Op::Greater if !comparator.pre.is_empty() => Some(Version {
            major,
            minor,
            patch,
            pre: comparator.pre.clone(),
            build: BuildMetadata::EMPTY,
        }),
        Op::Greater => Some(successor(major, comparator.minor, comparator.patch)),
        _ => None,
    }
}

/// Smallest release above `major.minor.patch`, where missing parts cover
/// every version below them
fn successor(major: u64, minor: Option<u64>, patch: Option<u64>) -> Version {
    let next_major = || major.checked_add(1).map(|major| Version::new(major, 0, 0));
    let next_minor = |minor: u64| {
        minor
            .checked_add(1)
            .map(|minor| Version::new(major, minor, 0))
            .or_else(next_major)
    };

    let next = match (minor, patch) {
        (Some(minor), Some(patch)) => patch
            .checked_add(1)
            .map(|patch| Version::new(major, minor, patch))
            .or_else(|| next_minor(minor)),
        (Some(minor), None) => next_minor(minor),
        _ => next_major(),
    };

    // nothing sits above u64::MAX in every position
    next.unwrap_or_else(|| Version::new(major, minor.unwrap_or(0), patch.unwrap_or(0)))
}

/// Comparator sets and alternatives compared regardless of written order
fn canonical(alternatives: &[VersionReq]) -> Vec<Vec<String>> {
    let mut sets: Vec<Vec<String>> = alternatives
        .iter()
        .map(|requirement| {
            let mut comparators: Vec<String> = requirement
                .comparators
                .iter()
                .map(ToString::to_string)
                .collect();
            comparators.sort();
            comparators.dedup();
            comparators
        })
        .collect();
    sets.sort();
    sets.dedup();
    sets
}

fn without_build(version: &Version) -> Version {
    Version {
        build: BuildMetadata::EMPTY,
        ..version.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> SemverRange {
        SemverRangeParser::new().parse_range(raw).unwrap()
    }

    fn floor(raw: &str) -> String {
        parse(raw).floor().to_string()
    }

    #[test]
    fn test_exact_versions() {
        for raw in ["1.2.3", "=1.2.3", "v1.2.3", "= 1.2.3", " 1.2.3 ", "1.2.3-beta.1"] {
            assert!(parse(raw).is_exact(), "{} should be exact", raw);
        }
    }

    #[test]
    fn test_non_exact_ranges() {
        for raw in [
            "^1.2.3",
            "~1.2.3",
            "1.2",
            "1",
            "1.x",
            "*",
            "",
            ">=1.0.0 <2.0.0",
            "1.2.3 - 2.0.0",
            "1.2.3 || 1.2.4",
        ] {
            assert!(!parse(raw).is_exact(), "{} should not be exact", raw);
        }
    }

    #[test]
    fn test_floors() {
        assert_eq!(floor("1.2.3"), "1.2.3");
        assert_eq!(floor("^1.2.3"), "1.2.3");
        assert_eq!(floor("~1.2"), "1.2.0");
        assert_eq!(floor(">1.2.3"), "1.2.4");
        assert_eq!(floor(">1.2"), "1.3.0");
        assert_eq!(floor(">1"), "2.0.0");
        assert_eq!(floor(">= 1.0.0 < 2.0.0"), "1.0.0");
        assert_eq!(floor("<2.0.0"), "0.0.0");
        assert_eq!(floor("*"), "0.0.0");
        assert_eq!(floor("1.x || >=2.5.0"), "1.0.0");
        assert_eq!(floor("1.2.3 - 2.0.0"), "1.2.3");
        assert_eq!(floor(">=1.0.0, >=1.4.0"), "1.4.0");
        assert_eq!(floor("1.2.3+build.5"), "1.2.3");
    }

    #[test]
    fn test_range_equality() {
        assert!(parse("^1.2.3").range_eq(&parse("^1.2.3")));
        assert!(parse(">= 1.2.3").range_eq(&parse(">=1.2.3")));
        assert!(parse("1.2.3").range_eq(&parse("=1.2.3")));
        assert!(parse("v1.2.3").range_eq(&parse("1.2.3+build")));
        assert!(parse("1.x").range_eq(&parse("1.*")));
        assert!(!parse("^1.2.3").range_eq(&parse("~1.2.3")));
        assert!(!parse("1.2.3").range_eq(&parse("^1.2.3")));
    }

    #[test]
    fn test_greater_floor_at_numeric_limits() {
        assert_eq!(floor(">1.2.18446744073709551615"), "1.3.0");
        assert_eq!(floor(">1.18446744073709551615"), "2.0.0");
        assert_eq!(floor(">1.18446744073709551615.18446744073709551615"), "2.0.0");
        assert_eq!(floor(">18446744073709551615"), "18446744073709551615.0.0");
        assert!(parse(">1.2.18446744073709551615").greater_than(&parse("^1.2.3")));
    }

    #[test]
    fn test_range_equality_ignores_written_order() {
        assert!(parse(">=1.0.0 <2.0.0").range_eq(&parse("<2.0.0 >=1.0.0")));
        assert!(parse("1.x || 3.x").range_eq(&parse("3.x || 1.x")));
        assert!(!parse(">=1.0.0 <2.0.0").range_eq(&parse(">=1.0.0 <3.0.0")));
    }

    #[test]
    fn test_hyphen_ranges_with_wildcards() {
        assert_eq!(floor("1.2.3 - *"), "1.2.3");
        assert!(!parse("1.2.3 - *").is_exact());
        assert!(parse("1.2.3 - x").range_eq(&parse(">=1.2.3")));
        assert!(parse("1.2.3 - 2.x").range_eq(&parse("1.2.3 - 2")));
        assert!(parse("* - 2.0.0").range_eq(&parse("<=2.0.0")));
        assert!(parse("* - x").range_eq(&parse("*")));
    }

    #[test]
    fn test_greater_than() {
        assert!(parse("2.3.4").greater_than(&parse("1.2.3")));
        assert!(parse("1.2.3").greater_than(&parse("1.2.0")));
        assert!(parse("^1.3.0").greater_than(&parse("^1.2.3")));
        assert!(parse("1.0.0").greater_than(&parse("1.0.0-rc.1")));
        assert!(!parse("^1.2.3").greater_than(&parse(">=1.2.3")));
        assert!(!parse(">=1.2.3").greater_than(&parse("^1.2.3")));
    }

    #[test]
    fn test_malformed_ranges() {
        let parser = SemverRangeParser::new();
        for raw in [
            "latest",
            "next",
            "file:../local-pkg",
            "git+https://github.com/user/repo.git",
            "^",
            ">= ",
            "1.2.3.4",
            "npm:lodash@^4",
        ] {
            let err = parser.parse_range(raw).unwrap_err();
            assert_eq!(err.range, raw);
            assert!(!err.details.is_empty());
        }
    }

    #[test]
    fn test_too_long_range() {
        let raw = format!("^{}", "1".repeat(300));
        let err = SemverRangeParser::new().parse_range(&raw).unwrap_err();
        assert!(err.details.contains("too long"));
    }
}
