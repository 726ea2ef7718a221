use crate::expression::Item;

/// Counters gathered while enumerating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub lists_explored: usize,
    pub operations_built: usize,
    pub operations_pruned: usize,
    pub candidates_admitted: usize,
}

/// Result of one exhaustive search
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Closest items found, fewest tiles first
    pub solutions: Vec<Item>,
    /// Distance between the solutions' value and the target; `None` when
    /// there was nothing to search
    pub best_diff: Option<i64>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn is_exact(&self) -> bool {
        self.best_diff == Some(0)
    }
}
