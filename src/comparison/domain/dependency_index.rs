use super::manifest::{self, Manifest};
use super::GroupTable;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Dependencies of one group: names in merge order plus their declared ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDependencies {
    names: Vec<String>,
    ranges: HashMap<String, String>,
}

impl GroupDependencies {
    /// Merges one entry. A repeated name takes the new range but keeps its
    /// original position.
    fn with_entry(mut self, name: &str, range: &str) -> Self {
        if self
            .ranges
            .insert(name.to_string(), range.to_string())
            .is_none()
        {
            self.names.push(name.to_string());
        }
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn range_of(&self, name: &str) -> Option<&str> {
        self.ranges.get(name).map(String::as_str)
    }

    /// `(name, range)` pairs in merge order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().filter_map(move |name| {
            self.ranges
                .get(name)
                .map(|range| (name.as_str(), range.as_str()))
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ranges.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// DependencyIndex: one manifest's dependencies indexed by group and by name
///
/// Built once from a manifest and a group table, immutable afterwards.
/// Every group of the table is present, even when the manifest declares
/// nothing for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyIndex {
    groups: Vec<(String, GroupDependencies)>,
    all_names: HashSet<String>,
}

impl DependencyIndex {
    /// Indexes `manifest` according to `groups`
    ///
    /// For each group, the entries of each of its manifest keys are merged in
    /// key order; later keys overwrite earlier ones on name collision. Fields
    /// that are missing, not objects, or empty are skipped.
    pub fn build(manifest: &Manifest, groups: &GroupTable) -> Self {
        Self::from_value(manifest.as_value(), groups)
    }

    /// Indexes a raw manifest document without taking ownership of it
    pub fn from_value(root: &Value, groups: &GroupTable) -> Self {
        let groups: Vec<(String, GroupDependencies)> = groups
            .iter()
            .map(|group| {
                let dependencies = group
                    .manifest_keys()
                    .iter()
                    .filter_map(|key| manifest::dependency_entries(root, key))
                    .flatten()
                    .fold(GroupDependencies::default(), |acc, (name, range)| {
                        acc.with_entry(name, range)
                    });
                (group.id().to_string(), dependencies)
            })
            .collect();

        let all_names = groups
            .iter()
            .flat_map(|(_, dependencies)| dependencies.names.iter().cloned())
            .collect();

        Self { groups, all_names }
    }

    pub fn group(&self, group_id: &str) -> Option<&GroupDependencies> {
        self.groups
            .iter()
            .find(|(id, _)| id == group_id)
            .map(|(_, dependencies)| dependencies)
    }

    /// Names declared in a group, in merge order. Unknown groups are empty.
    pub fn names_in_group(&self, group_id: &str) -> &[String] {
        self.group(group_id)
            .map(GroupDependencies::names)
            .unwrap_or(&[])
    }

    pub fn range_of(&self, group_id: &str, name: &str) -> Option<&str> {
        self.group(group_id)?.range_of(name)
    }

    /// `(name, range)` pairs of a group in merge order. Unknown groups yield nothing.
    pub fn entries_in_group<'a>(
        &'a self,
        group_id: &str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.group(group_id)
            .into_iter()
            .flat_map(GroupDependencies::iter)
    }

    pub fn all_names(&self) -> &HashSet<String> {
        &self.all_names
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.all_names.contains(name)
    }

    /// Ids of every group declaring `name`, in group-definition order
    pub fn groups_containing(&self, name: &str) -> Vec<String> {
        self.groups
            .iter()
            .filter(|(_, dependencies)| dependencies.contains(name))
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(id, _)| id.as_str())
    }

    /// Number of (group, name) entries, counting a name once per group
    pub fn entry_count(&self) -> usize {
        self.groups
            .iter()
            .map(|(_, dependencies)| dependencies.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::GroupDefinition;
    use serde_json::json;

    fn index(value: serde_json::Value) -> DependencyIndex {
        DependencyIndex::build(&Manifest::new(value), &GroupTable::standard())
    }

    #[test]
    fn test_build_indexes_every_group() {
        let idx = index(json!({ "dependencies": { "lodash": "4.17.15" } }));
        let ids: Vec<&str> = idx.group_ids().collect();
        assert_eq!(
            ids,
            vec!["production", "development", "peer", "optional", "bundled"]
        );
        assert!(idx.group("peer").unwrap().is_empty());
    }

    #[test]
    fn test_names_in_group_preserves_order() {
        let idx = index(json!({
            "devDependencies": { "jest": "^29.0.0", "eslint": "^8.0.0", "ava": "5.0.0" }
        }));
        assert_eq!(
            idx.names_in_group("development"),
            &["jest".to_string(), "eslint".to_string(), "ava".to_string()][..]
        );
    }

    #[test]
    fn test_names_in_unknown_group_is_empty() {
        let idx = index(json!({ "dependencies": { "lodash": "4.17.15" } }));
        assert!(idx.names_in_group("runtime").is_empty());
        assert!(idx.range_of("runtime", "lodash").is_none());
    }

    #[test]
    fn test_entries_in_group() {
        let idx = index(json!({
            "dependencies": { "b": "2.0.0", "a": "^1.0.0" }
        }));
        let entries: Vec<_> = idx.entries_in_group("production").collect();
        assert_eq!(entries, vec![("b", "2.0.0"), ("a", "^1.0.0")]);
        assert_eq!(idx.entries_in_group("runtime").count(), 0);
    }

    #[test]
    fn test_range_of() {
        let idx = index(json!({ "peerDependencies": { "react": "^18.0.0" } }));
        assert_eq!(idx.range_of("peer", "react"), Some("^18.0.0"));
        assert_eq!(idx.range_of("production", "react"), None);
    }

    #[test]
    fn test_bundled_merges_both_keys_later_wins() {
        let idx = index(json!({
            "bundleDependencies": { "a": "1.0.0", "b": "1.0.0" },
            "bundledDependencies": { "b": "2.0.0", "c": "3.0.0" }
        }));
        assert_eq!(
            idx.names_in_group("bundled"),
            &["a".to_string(), "b".to_string(), "c".to_string()][..]
        );
        assert_eq!(idx.range_of("bundled", "b"), Some("2.0.0"));
    }

    #[test]
    fn test_malformed_fields_are_tolerated() {
        let idx = index(json!({
            "dependencies": ["lodash"],
            "devDependencies": "jest",
            "peerDependencies": {},
            "optionalDependencies": null
        }));
        assert!(idx.all_names().is_empty());
        assert_eq!(idx.entry_count(), 0);
    }

    #[test]
    fn test_all_names_is_union_of_groups() {
        let idx = index(json!({
            "dependencies": { "a": "1.0.0", "b": "1.0.0" },
            "devDependencies": { "b": "1.0.0", "c": "1.0.0" }
        }));
        let mut names: Vec<&String> = idx.all_names().iter().collect();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(idx.entry_count(), 4);
        assert!(idx.has_dependency("c"));
        assert!(!idx.has_dependency("d"));
    }

    #[test]
    fn test_groups_containing_in_definition_order() {
        let idx = index(json!({
            "peerDependencies": { "react": "^18.0.0" },
            "dependencies": { "react": "18.2.0" },
            "devDependencies": { "react": "18.2.0" }
        }));
        assert_eq!(
            idx.groups_containing("react"),
            vec!["production", "development", "peer"]
        );
        assert!(idx.groups_containing("vue").is_empty());
    }

    #[test]
    fn test_groups_containing_counts_empty_range() {
        let idx = index(json!({ "dependencies": { "local": "" } }));
        assert_eq!(idx.groups_containing("local"), vec!["production"]);
    }

    #[test]
    fn test_from_value_matches_build() {
        let value = json!({
            "dependencies": { "lodash": "4.17.15" },
            "devDependencies": { "jest": "^29.0.0" }
        });
        let borrowed = DependencyIndex::from_value(&value, &GroupTable::standard());
        assert_eq!(borrowed, index(value));
    }

    #[test]
    fn test_build_with_custom_table() {
        let table = GroupTable::new(vec![GroupDefinition::new(
            "runtime",
            vec!["requires".to_string()],
            "Runtime",
        )])
        .unwrap();
        let manifest = Manifest::new(json!({
            "requires": { "serde": "1.0" },
            "dependencies": { "lodash": "4.17.15" }
        }));
        let idx = DependencyIndex::build(&manifest, &table);
        assert_eq!(idx.names_in_group("runtime"), &["serde".to_string()][..]);
        assert!(!idx.has_dependency("lodash"));
    }
}
