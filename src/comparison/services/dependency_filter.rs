use crate::comparison::domain::DependencyComparison;
use crate::shared::error::DiffError;
use std::cell::Cell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// DependencyFilter - Drops excluded dependencies from a comparison
///
/// Patterns are case-sensitive; `*` matches any (possibly empty) run of
/// characters. A dependency matching any pattern disappears from every bucket
/// of every group.
#[derive(Debug)]
pub struct DependencyFilter {
    patterns: Vec<ExcludePattern>,
}

impl DependencyFilter {
    /// Creates a filter from raw pattern strings (e.g. "@types/*", "eslint-*")
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern (empty, too long, bad characters, wildcards only)
    pub fn new(patterns: Vec<String>) -> Result<Self, DiffError> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(DiffError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            });
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Removes every excluded dependency from the comparison
    pub fn apply(&self, mut comparison: DependencyComparison) -> DependencyComparison {
        if !self.patterns.is_empty() {
            comparison.retain_names(|name| !self.matches(name));
        }
        comparison
    }

    fn matches(&self, name: &str) -> bool {
        // no short-circuit: every pattern that matches gets marked as used
        self.patterns
            .iter()
            .fold(false, |hit, pattern| pattern.matches(name) || hit)
    }

    /// Patterns that have not matched any dependency seen so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self, DiffError> {
        validate_pattern(&pattern)?;
        let matcher = PatternMatcher::compile(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, name: &str) -> bool {
        let is_match = self.matcher.matches(name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// No wildcard: "lodash"
    Exact(String),
    /// Literal segments between wildcards; `anchored_*` is false when the
    /// pattern starts/ends with `*`
    Glob {
        segments: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn compile(pattern: &str) -> Self {
        if !pattern.contains('*') {
            return PatternMatcher::Exact(pattern.to_string());
        }
        PatternMatcher::Glob {
            segments: pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            PatternMatcher::Exact(exact) => name == exact,
            PatternMatcher::Glob {
                segments,
                anchored_start,
                anchored_end,
            } => {
                let mut rest = name;
                for (i, segment) in segments.iter().enumerate() {
                    let is_first = i == 0;
                    let is_last = i + 1 == segments.len();

                    if is_first && *anchored_start {
                        match rest.strip_prefix(segment.as_str()) {
                            Some(tail) => rest = tail,
                            None => return false,
                        }
                        if is_last && *anchored_end {
                            return rest.is_empty();
                        }
                        continue;
                    }

                    if is_last && *anchored_end {
                        return rest.ends_with(segment.as_str());
                    }

                    match rest.find(segment.as_str()) {
                        Some(pos) => rest = &rest[pos + segment.len()..],
                        None => return false,
                    }
                }
                true
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<(), DiffError> {
    let invalid = |message: String| Err(DiffError::Validation { message });

    if pattern.is_empty() {
        return invalid("Exclusion pattern cannot be empty".to_string());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return invalid(format!(
            "Exclusion pattern is too long: {} chars (maximum: {} chars)",
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        return invalid(format!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric characters, '-', '_', '.', '@', '/' and '*' are allowed.",
            ch, pattern
        ));
    }

    if pattern.chars().all(|c| c == '*') {
        return invalid(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        ));
    }

    Ok(())
}

/// npm names may be scoped (`@scope/name`), hence '@' and '/'
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '/' | '*')
}
