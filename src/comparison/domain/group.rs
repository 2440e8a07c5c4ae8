use crate::shared::error::DiffError;
use std::collections::HashSet;

/// Standard dependency groups as (id, manifest keys, display title).
///
/// `bundled` reads both spellings npm accepts for the field.
const STANDARD_GROUPS: &[(&str, &[&str], &str)] = &[
    ("production", &["dependencies"], "Production"),
    ("development", &["devDependencies"], "Development"),
    ("peer", &["peerDependencies"], "Peer"),
    ("optional", &["optionalDependencies"], "Optional"),
    (
        "bundled",
        &["bundleDependencies", "bundledDependencies"],
        "Bundled",
    ),
];

/// A logical dependency group and the manifest fields it is sourced from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDefinition {
    id: String,
    manifest_keys: Vec<String>,
    title: String,
}

impl GroupDefinition {
    pub fn new(
        id: impl Into<String>,
        manifest_keys: Vec<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            manifest_keys,
            title: title.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Manifest keys in merge order; entries of later keys win on name collision
    pub fn manifest_keys(&self) -> &[String] {
        &self.manifest_keys
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Ordered, validated collection of group definitions.
///
/// Group order drives every ordered output: the index, `groups_containing`,
/// and the per-group reports of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTable {
    groups: Vec<GroupDefinition>,
}

impl GroupTable {
    /// Builds a table from custom definitions
    ///
    /// # Errors
    /// Returns `DiffError::InvalidGroupTable` if the table is empty, a group id
    /// is empty or duplicated, or a group has no non-empty manifest key
    pub fn new(groups: Vec<GroupDefinition>) -> Result<Self, DiffError> {
        if groups.is_empty() {
            return Err(DiffError::InvalidGroupTable {
                reason: "at least one group must be defined".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for group in &groups {
            if group.id.trim().is_empty() {
                return Err(DiffError::InvalidGroupTable {
                    reason: "group id must not be empty".to_string(),
                });
            }
            if !seen.insert(group.id.as_str()) {
                return Err(DiffError::InvalidGroupTable {
                    reason: format!("duplicate group id '{}'", group.id),
                });
            }
            if group.manifest_keys.is_empty()
                || group.manifest_keys.iter().any(|key| key.trim().is_empty())
            {
                return Err(DiffError::InvalidGroupTable {
                    reason: format!(
                        "group '{}' needs at least one manifest key and no empty keys",
                        group.id
                    ),
                });
            }
        }

        Ok(Self { groups })
    }

    /// The standard npm-style table: production, development, peer, optional, bundled
    pub fn standard() -> Self {
        let groups = STANDARD_GROUPS
            .iter()
            .map(|(id, keys, title)| {
                GroupDefinition::new(*id, keys.iter().map(|k| k.to_string()).collect(), *title)
            })
            .collect();
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupDefinition> {
        self.groups.iter()
    }

    pub fn get(&self, id: &str) -> Option<&GroupDefinition> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::standard()
    }
}
