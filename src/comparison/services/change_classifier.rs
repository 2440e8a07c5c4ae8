use crate::comparison::domain::{
    ChangeReport, DependencyComparison, DependencyIndex, GroupReport, GroupTable, MovedDependency,
    RangeChange, VersionRange,
};
use crate::ports::outbound::RangeParser;
use crate::shared::error::DiffError;
use std::fmt;

/// Outcome of comparing the old and new range of a dependency kept in a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeChangeKind {
    /// An exact pin became a range
    Unlocked,
    /// A range became an exact pin
    Locked,
    Upgraded,
    Downgraded,
}

impl fmt::Display for RangeChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeChangeKind::Unlocked => write!(f, "unlocked"),
            RangeChangeKind::Locked => write!(f, "locked"),
            RangeChangeKind::Upgraded => write!(f, "upgraded"),
            RangeChangeKind::Downgraded => write!(f, "downgraded"),
        }
    }
}

/// ChangeClassifier service for comparing two dependency indexes
///
/// Pure business logic: no I/O, no logging. Every group of the table is
/// classified independently and exactly once.
pub struct ChangeClassifier;

impl ChangeClassifier {
    /// Classifies the changes between `old` and `new`, one report per group
    ///
    /// Per group `g`, with `O` and `N` the names of `g` in each index:
    /// - `added`: in `N \ O` and nowhere in the old manifest
    /// - `moved`: in `N \ O` but declared in other groups of the old manifest
    /// - `removed`: in `O \ N` and nowhere in the new manifest
    /// - range buckets: names in both, judged by [`ChangeClassifier::judge`]
    ///
    /// `added`/`moved` follow the new manifest's order, the other buckets the
    /// old manifest's order.
    ///
    /// # Errors
    /// Returns `DiffError::MalformedRange` for the first range of a kept
    /// dependency that `parser` rejects. No partial result is returned.
    pub fn classify<P: RangeParser>(
        old: &DependencyIndex,
        new: &DependencyIndex,
        groups: &GroupTable,
        parser: &P,
    ) -> Result<DependencyComparison, DiffError> {
        let reports = groups
            .iter()
            .map(|group| {
                Self::classify_group(group.id(), old, new, parser).map(|changes| GroupReport {
                    group_id: group.id().to_string(),
                    title: group.title().to_string(),
                    changes,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DependencyComparison::new(reports))
    }

    fn classify_group<P: RangeParser>(
        group_id: &str,
        old: &DependencyIndex,
        new: &DependencyIndex,
        parser: &P,
    ) -> Result<ChangeReport, DiffError> {
        let mut report = ChangeReport::default();

        for name in new.names_in_group(group_id) {
            if old.range_of(group_id, name).is_some() {
                continue;
            }
            if old.has_dependency(name) {
                report.moved.push(MovedDependency {
                    name: name.clone(),
                    new_group: group_id.to_string(),
                    old_groups: old.groups_containing(name),
                });
            } else {
                report.added.push(name.clone());
            }
        }

        for (name, old_raw) in old.entries_in_group(group_id) {
            let Some(new_raw) = new.range_of(group_id, name) else {
                if !new.has_dependency(name) {
                    report.removed.push(name.to_string());
                }
                continue;
            };

            let old_range = Self::parse(parser, group_id, name, old_raw)?;
            let new_range = Self::parse(parser, group_id, name, new_raw)?;
            let change = RangeChange::new(name, old_raw, new_raw);
            match Self::judge(&old_range, &new_range) {
                Some(RangeChangeKind::Unlocked) => report.unlocked.push(change),
                Some(RangeChangeKind::Locked) => report.locked.push(change),
                Some(RangeChangeKind::Upgraded) => report.upgraded.push(change),
                Some(RangeChangeKind::Downgraded) => report.downgraded.push(change),
                None => {}
            }
        }

        Ok(report)
    }

    /// Judges a range transition; first matching rule wins
    ///
    /// 1. range-equal: no change
    /// 2. exact → not exact: unlocked
    /// 3. not exact → exact: locked
    /// 4. new above old: upgraded
    /// 5. old above new: downgraded
    /// 6. otherwise unclassified (`None`)
    pub fn judge<R: VersionRange>(old: &R, new: &R) -> Option<RangeChangeKind> {
        if old.range_eq(new) {
            return None;
        }
        match (old.is_exact(), new.is_exact()) {
            (true, false) => Some(RangeChangeKind::Unlocked),
            (false, true) => Some(RangeChangeKind::Locked),
            _ if new.greater_than(old) => Some(RangeChangeKind::Upgraded),
            _ if old.greater_than(new) => Some(RangeChangeKind::Downgraded),
            _ => None,
        }
    }

    fn parse<P: RangeParser>(
        parser: &P,
        group_id: &str,
        name: &str,
        raw: &str,
    ) -> Result<P::Range, DiffError> {
        parser
            .parse_range(raw)
            .map_err(|err| DiffError::MalformedRange {
                group: group_id.to_string(),
                dependency: name.to_string(),
                range: err.range,
                details: err.details,
            })
    }
}
