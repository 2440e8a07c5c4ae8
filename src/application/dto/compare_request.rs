use crate::comparison::domain::GroupTable;
use std::path::PathBuf;

/// CompareRequest - Request DTO for the manifest comparison use case
#[derive(Debug, Clone)]
pub struct CompareRequest {
    /// Manifest before the change
    pub old_path: PathBuf,
    /// Manifest after the change
    pub new_path: PathBuf,
    /// Patterns for excluding dependencies from the report
    pub exclude_patterns: Vec<String>,
    /// Group table used for both manifests
    pub groups: GroupTable,
}

impl CompareRequest {
    /// Creates a request using the standard group table and no exclusions
    pub fn new(old_path: PathBuf, new_path: PathBuf) -> Self {
        Self {
            old_path,
            new_path,
            exclude_patterns: Vec::new(),
            groups: GroupTable::standard(),
        }
    }

    pub fn with_exclude_patterns(mut self, exclude_patterns: Vec<String>) -> Self {
        self.exclude_patterns = exclude_patterns;
        self
    }

    pub fn with_groups(mut self, groups: GroupTable) -> Self {
        self.groups = groups;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_request_defaults() {
        let request = CompareRequest::new(PathBuf::from("old.json"), PathBuf::from("new.json"));
        assert!(request.exclude_patterns.is_empty());
        assert_eq!(request.groups.len(), 5);
    }

    #[test]
    fn test_compare_request_builders() {
        let groups = GroupTable::new(vec![crate::comparison::domain::GroupDefinition::new(
            "runtime",
            vec!["dependencies".to_string()],
            "Runtime",
        )])
        .unwrap();
        let request = CompareRequest::new(PathBuf::from("a"), PathBuf::from("b"))
            .with_exclude_patterns(vec!["@types/*".to_string()])
            .with_groups(groups);
        assert_eq!(request.exclude_patterns, vec!["@types/*"]);
        assert_eq!(request.groups.ids().collect::<Vec<_>>(), vec!["runtime"]);
    }
}
