use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A dependency that entered a group while already existing elsewhere in the
/// old manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovedDependency {
    pub name: String,
    pub new_group: String,
    pub old_groups: Vec<String>,
}

/// A dependency whose declared range changed within a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeChange {
    pub name: String,
    pub old_range: String,
    pub new_range: String,
}

impl RangeChange {
    pub fn new(name: &str, old_range: &str, new_range: &str) -> Self {
        Self {
            name: name.to_string(),
            old_range: old_range.to_string(),
            new_range: new_range.to_string(),
        }
    }
}

/// Categorized changes of a single dependency group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeReport {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub moved: Vec<MovedDependency>,
    pub upgraded: Vec<RangeChange>,
    pub downgraded: Vec<RangeChange>,
    pub locked: Vec<RangeChange>,
    pub unlocked: Vec<RangeChange>,
}

impl ChangeReport {
    pub fn is_empty(&self) -> bool {
        self.change_count() == 0
    }

    pub fn change_count(&self) -> usize {
        self.added.len()
            + self.removed.len()
            + self.moved.len()
            + self.upgraded.len()
            + self.downgraded.len()
            + self.locked.len()
            + self.unlocked.len()
    }

    /// Keeps only the entries whose dependency name satisfies `keep`
    pub fn retain_names<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.added.retain(|name| keep(name.as_str()));
        self.removed.retain(|name| keep(name.as_str()));
        self.moved.retain(|moved| keep(moved.name.as_str()));
        for changes in [
            &mut self.upgraded,
            &mut self.downgraded,
            &mut self.locked,
            &mut self.unlocked,
        ] {
            changes.retain(|change| keep(change.name.as_str()));
        }
    }
}

/// The change report of one group together with its identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub group_id: String,
    pub title: String,
    pub changes: ChangeReport,
}

/// Result of comparing two manifests: one report per group, in group-definition order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyComparison {
    reports: Vec<GroupReport>,
}

impl DependencyComparison {
    pub fn new(reports: Vec<GroupReport>) -> Self {
        Self { reports }
    }

    /// The report of a group, or `None` for a group id outside the table
    pub fn get(&self, group_id: &str) -> Option<&ChangeReport> {
        self.reports
            .iter()
            .find(|report| report.group_id == group_id)
            .map(|report| &report.changes)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupReport> {
        self.reports.iter()
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().map(|report| report.group_id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.reports.iter().all(|report| report.changes.is_empty())
    }

    pub fn total_changes(&self) -> usize {
        self.reports
            .iter()
            .map(|report| report.changes.change_count())
            .sum()
    }

    pub fn retain_names<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        for report in &mut self.reports {
            report.changes.retain_names(&mut keep);
        }
    }
}

/// Serialized as an ordered map `groupId -> report`
impl Serialize for DependencyComparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.reports.len()))?;
        for report in &self.reports {
            map.serialize_entry(&report.group_id, &report.changes)?;
        }
        map.end()
    }
}
