use std::collections::HashSet;

use log::debug;

use crate::expression::Item;

/// Closest candidates seen so far, without duplicate traces
#[derive(Debug)]
pub(crate) struct SolutionSet {
    target: i64,
    best_diff: Option<i64>,
    solutions: Vec<Item>,
    traces: HashSet<Vec<String>>,
}

impl SolutionSet {
    pub(crate) fn new(target: i64) -> Self {
        Self {
            target,
            best_diff: None,
            solutions: Vec::new(),
            traces: HashSet::new(),
        }
    }

    /// Offer a candidate; returns whether it was kept.
    ///
    /// A strictly closer candidate evicts everything kept so far. A candidate
    /// as close as the current best is kept unless its trace is already
    /// present.
    pub(crate) fn admit(&mut self, item: &Item) -> bool {
        let diff = (item.value() - self.target).abs();
        match self.best_diff {
            Some(best) if diff > best => false,
            Some(best) if diff == best => {
                let trace = item.trace();
                if self.traces.contains(&trace) {
                    return false;
                }
                self.traces.insert(trace);
                self.solutions.push(item.clone());
                true
            }
            _ => {
                debug!(
                    "New best distance {} with value {} (was {:?})",
                    diff,
                    item.value(),
                    self.best_diff
                );
                self.best_diff = Some(diff);
                self.solutions.clear();
                self.traces.clear();
                self.traces.insert(item.trace());
                self.solutions.push(item.clone());
                true
            }
        }
    }

    /// Kept solutions ordered by ascending tile count, discovery order
    /// preserved among equals
    pub(crate) fn into_ranked(mut self) -> (Vec<Item>, Option<i64>) {
        self.solutions.sort_by_key(Item::tile_count);
        (self.solutions, self.best_diff)
    }
}
