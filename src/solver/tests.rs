use std::sync::atomic::AtomicBool;

use crate::draw::{Draw, Status};
use crate::expression::Operator;
use crate::solver::constants::OPERATORS;
use crate::solver::{SearchStats, Solver, SolverError, solve_all};
use crate::tile::Tile;

fn tiles(values: &[i64]) -> Vec<Tile> {
    values.iter().map(|&v| Tile::from_pool(v)).collect()
}

#[test]
fn test_operator_order() {
    assert_eq!(
        OPERATORS,
        [Operator::Mul, Operator::Add, Operator::Sub, Operator::Div]
    );
}

#[test]
fn test_search_two_equal_tiles() {
    let outcome = Solver::new().search(&tiles(&[5, 5]), 100);

    assert_eq!(outcome.best_diff, Some(75));
    assert!(!outcome.is_exact());
    assert_eq!(outcome.solutions.len(), 1);
    if let Some(best) = outcome.solutions.first() {
        assert_eq!(best.trace(), vec!["5 x 5 = 25".to_string()]);
    }
    assert_eq!(
        outcome.stats,
        SearchStats {
            lists_explored: 4,
            operations_built: 3,
            operations_pruned: 1,
            candidates_admitted: 3,
        }
    );
}

#[test]
fn test_search_prunes_identity_moves() {
    let outcome = Solver::new().search(&tiles(&[7, 1]), 100);

    // 7 x 1 and 7 / 1 are never played
    assert_eq!(outcome.stats.operations_pruned, 2);
    assert_eq!(outcome.stats.operations_built, 2);
    assert_eq!(outcome.best_diff, Some(92));
    assert_eq!(outcome.solutions.len(), 1);
    if let Some(best) = outcome.solutions.first() {
        assert_eq!(best.to_string(), "7 + 1 = 8");
    }
}

#[test]
fn test_search_prefers_bare_tile() {
    let outcome = Solver::new().search(&tiles(&[100, 50, 2]), 100);

    assert!(outcome.is_exact());
    let ranks: Vec<usize> = outcome.solutions.iter().map(|s| s.rank()).collect();
    assert_eq!(ranks.first(), Some(&1));
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    if let Some(best) = outcome.solutions.first() {
        assert!(best.is_tile());
    }
    // 50 x 2 also reaches 100 with two tiles
    assert!(
        outcome
            .solutions
            .iter()
            .any(|s| s.trace() == vec!["50 x 2 = 100".to_string()])
    );
}

#[test]
fn test_search_without_tiles() {
    let outcome = Solver::new().search(&[], 100);
    assert!(outcome.solutions.is_empty());
    assert_eq!(outcome.best_diff, None);
    assert_eq!(outcome.stats.lists_explored, 1);
}

#[test]
fn test_search_with_cancel() {
    let solver = Solver::new();
    let raised = AtomicBool::new(true);
    let result = solver.search_with_cancel(&tiles(&[1, 3, 5, 7, 9, 25]), 234, &raised);
    assert!(matches!(result, Err(SolverError::Cancelled)));

    let lowered = AtomicBool::new(false);
    let result = solver.search_with_cancel(&tiles(&[5, 5]), 100, &lowered);
    assert!(result.is_ok());
    if let Ok(outcome) = result {
        assert_eq!(outcome.best_diff, Some(75));
    }
}

#[test]
fn test_solve_all_matches_sequential() {
    let inputs: [(&[i64], i64); 3] = [
        (&[1, 1, 2, 2, 3, 3], 100),
        (&[25, 4, 1, 1, 2, 2], 100),
        (&[4, 4, 4, 4, 4, 4], 100),
    ];
    let mut draws: Vec<Draw> = inputs
        .iter()
        .filter_map(|(tiles, target)| Draw::new(tiles, *target).ok())
        .collect();
    assert_eq!(draws.len(), 3);

    let mut sequential = draws.clone();
    let expected: Vec<Status> = sequential.iter_mut().map(Draw::resolve).collect();
    let statuses = solve_all(&mut draws);

    assert_eq!(
        statuses,
        vec![Status::ApproximateMatch, Status::ExactMatch, Status::Invalid]
    );
    assert_eq!(statuses, expected);
    for (parallel, sequential) in draws.iter().zip(&sequential) {
        assert_eq!(parallel.solutions(), sequential.solutions());
        assert_eq!(parallel.best_diff(), sequential.best_diff());
    }
}
