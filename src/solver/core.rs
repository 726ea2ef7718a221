use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::expression::Item;
use crate::solver::constants::OPERATORS;
use crate::solver::errors::SolverError;
use crate::solver::solutions::SolutionSet;
use crate::solver::types::{SearchOutcome, SearchStats};
use crate::tile::Tile;

/// Exhaustive searcher for the values reachable from a set of tiles
#[derive(Debug, Default, Clone, Copy)]
pub struct Solver {}

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self {}
    }

    /// Enumerate every way of combining `tiles` and keep the items closest
    /// to `target`
    pub fn search(&self, tiles: &[Tile], target: i64) -> SearchOutcome {
        match self.run(tiles, target, None) {
            Ok(outcome) => outcome,
            // Only reachable through a cancel flag, and none was given
            Err(_) => SearchOutcome::default(),
        }
    }

    /// Same as [`Solver::search`], giving up as soon as `cancel` is set
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cancelled`] if the flag was raised before the
    /// enumeration finished.
    pub fn search_with_cancel(
        &self,
        tiles: &[Tile],
        target: i64,
        cancel: &AtomicBool,
    ) -> Result<SearchOutcome, SolverError> {
        self.run(tiles, target, Some(cancel))
    }

    fn run(
        &self,
        tiles: &[Tile],
        target: i64,
        cancel: Option<&AtomicBool>,
    ) -> Result<SearchOutcome, SolverError> {
        info!(
            "Searching {:?} for {}",
            tiles.iter().map(Tile::value).collect::<Vec<_>>(),
            target
        );

        let mut stats = SearchStats::default();
        let mut solutions = SolutionSet::new(target);
        let mut stack: Vec<Vec<Item>> = vec![tiles.iter().copied().map(Item::from).collect()];

        while let Some(items) = stack.pop() {
            if let Some(flag) = cancel
                && flag.load(Ordering::Relaxed)
            {
                info!(
                    "Search cancelled after exploring {} lists",
                    stats.lists_explored
                );
                return Err(SolverError::Cancelled);
            }
            stats.lists_explored += 1;

            for (i, left) in items.iter().enumerate() {
                if solutions.admit(left) {
                    stats.candidates_admitted += 1;
                }
                for (j, right) in items.iter().enumerate().skip(i + 1) {
                    for operator in OPERATORS {
                        match Item::combine(left, operator, right) {
                            Some(combined) => {
                                stats.operations_built += 1;
                                stack.push(next_items(&items, combined, i, j));
                            }
                            None => stats.operations_pruned += 1,
                        }
                    }
                }
            }
        }

        let (solutions, best_diff) = solutions.into_ranked();
        info!(
            "Explored {} lists, built {} operations ({} pruned), kept {} solutions at distance {:?}",
            stats.lists_explored,
            stats.operations_built,
            stats.operations_pruned,
            solutions.len(),
            best_diff
        );

        Ok(SearchOutcome {
            solutions,
            best_diff,
            stats,
        })
    }
}

/// `combined` followed by every item of `items` except positions `i` and `j`
fn next_items(items: &[Item], combined: Item, i: usize, j: usize) -> Vec<Item> {
    let mut next = Vec::with_capacity(items.len() - 1);
    next.push(combined);
    next.extend(
        items
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, item)| item.clone()),
    );
    next
}
