use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::core::{CategoryGroup, ClassifiedRecord};

/// Nested `group -> year -> count` table.
///
/// Groups keep first-seen order; years within a group are kept sorted.
/// Every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTable {
    groups: IndexMap<CategoryGroup, BTreeMap<i32, u32>>,
}

impl AggregateTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn increment(&mut self, group: CategoryGroup, year: i32) {
        *self
            .groups
            .entry(group)
            .or_default()
            .entry(year)
            .or_insert(0) += 1;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = CategoryGroup> + '_ {
        self.groups.keys().copied()
    }

    #[must_use]
    pub fn years_of(&self, group: CategoryGroup) -> Option<&BTreeMap<i32, u32>> {
        self.groups.get(&group)
    }

    /// Count for one cell; `None` when the year was never observed for `group`.
    #[must_use]
    pub fn count(&self, group: CategoryGroup, year: i32) -> Option<u32> {
        self.groups.get(&group)?.get(&year).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryGroup, &BTreeMap<i32, u32>)> + '_ {
        self.groups.iter().map(|(group, years)| (*group, years))
    }

    /// Iterates every `(group, year, count)` cell.
    pub fn cells(&self) -> impl Iterator<Item = (CategoryGroup, i32, u32)> + '_ {
        self.groups.iter().flat_map(|(group, years)| {
            years.iter().map(move |(year, count)| (*group, *year, *count))
        })
    }

    /// Sum of all cells, which equals the number of aggregated records.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.cells().map(|(_, _, count)| u64::from(count)).sum()
    }
}

/// Counts classified records per `(group, year)`.
#[must_use]
pub fn aggregate(records: &[ClassifiedRecord]) -> AggregateTable {
    let mut table = AggregateTable::new();
    for record in records {
        table.increment(record.category_group, record.year());
    }
    table
}
