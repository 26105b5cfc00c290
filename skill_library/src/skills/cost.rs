//! Training cost tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Experience cost of reaching each percent of one skill.
///
/// Built up row by row from the game's cost listing. A percent that has not
/// been observed has unknown cost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTable {
    costs: BTreeMap<u32, u64>,
}

impl CostTable {
    /// Create an empty cost table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the cost of reaching `percent`.
    ///
    /// Re-observing a percent overwrites the earlier value. Returns the value
    /// that was replaced, if any.
    pub fn set_cost(&mut self, percent: u32, cost: u64) -> Option<u64> {
        self.costs.insert(percent, cost)
    }

    /// Cost of reaching `percent`, if known.
    pub fn cost_of(&self, percent: u32) -> Option<u64> {
        self.costs.get(&percent).copied()
    }

    /// Number of known percents.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterate over `(percent, cost)` pairs in ascending percent order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.costs.iter().map(|(percent, cost)| (*percent, *cost))
    }
}

impl FromIterator<(u32, u64)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (u32, u64)>>(iter: I) -> Self {
        Self {
            costs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_cost() {
        let mut table = CostTable::new();
        assert!(table.is_empty());

        table.set_cost(1, 80);
        table.set_cost(51, 9046);

        assert_eq!(table.cost_of(1), Some(80));
        assert_eq!(table.cost_of(51), Some(9046));
        assert_eq!(table.cost_of(2), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_reobserved_percent_overwrites() {
        let mut table = CostTable::new();

        assert_eq!(table.set_cost(2, 82), None);
        assert_eq!(table.set_cost(2, 82), Some(82));
        assert_eq!(table.set_cost(2, 90), Some(82));

        assert_eq!(table.len(), 1);
        assert_eq!(table.cost_of(2), Some(90));
    }

    #[test]
    fn test_iter_is_ordered() {
        let table: CostTable = [(3, 86), (1, 80), (2, 82)].into_iter().collect();
        let percents: Vec<_> = table.iter().map(|(p, _)| p).collect();
        assert_eq!(percents, vec![1, 2, 3]);
    }
}
